//! A growable, contiguous sequence container over an exclusively owned heap block.
//!
//! [`SimpleVector<T>`] keeps a logical size on top of a
//! [`contig_array_ptr::ArrayPtr<T>`] whose length is the allocated capacity.
//! Growth doubles the capacity and relocates elements into a freshly built
//! block, which is swapped in only once it is complete.
//!
//! ```
//! use contig::{SimpleVector, reserve, simple_vec};
//!
//! let mut v = SimpleVector::<i32>::from(reserve(10));
//! assert_eq!((v.size(), v.capacity()), (0, 10));
//! for i in 0..5 {
//!     v.push_back(i);
//! }
//! assert_eq!(v.capacity(), 10);
//!
//! let mut w = simple_vec![1, 2, 3];
//! w.insert(1, 99).unwrap();
//! assert_eq!(w, [1, 99, 2, 3]);
//! assert!(w.at(4).unwrap_err().is_out_of_range());
//! ```

pub mod reservation;
pub mod simple_vector;

pub use contig_common::{Error, ErrorKind, Result};
pub use reservation::{ReserveRequest, reserve};
pub use simple_vector::SimpleVector;

/// Creates a [`SimpleVector`] from a list of values, or from a value and a
/// count (`simple_vec![value; n]`).
#[macro_export]
macro_rules! simple_vec {
    () => {
        $crate::SimpleVector::new()
    };
    ($value:expr; $n:expr) => {
        $crate::SimpleVector::from_elem($n, $value)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($x),+])
    };
}
