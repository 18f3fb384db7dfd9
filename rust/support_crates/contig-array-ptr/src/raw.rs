//! Raw block allocation helpers over the global allocator.

use std::{
    alloc::{self, Layout},
    ptr::{self, NonNull},
};

use contig_common::{Error, Result};

/// Allocates an uninitialized block for `len` values of `T`.
///
/// Zero-sized layouts (`len == 0` or zero-sized `T`) do not allocate and yield
/// a dangling, well-aligned pointer.
pub(crate) fn allocate<T>(len: usize) -> Result<NonNull<T>> {
    let layout = Layout::array::<T>(len)?;
    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }
    let raw = unsafe { alloc::alloc(layout) } as *mut T;
    NonNull::new(raw).ok_or_else(|| {
        log::debug!(
            "allocation of {} x {} ({} bytes) failed",
            len,
            std::any::type_name::<T>(),
            layout.size()
        );
        Error::allocation_failed(layout)
    })
}

/// Returns a block obtained from [`allocate`] to the global allocator.
///
/// # Safety
///
/// `ptr` must have been returned by `allocate::<T>(len)` with the same `len`,
/// and must not be used afterwards.
pub(crate) unsafe fn deallocate<T>(ptr: NonNull<T>, len: usize) {
    let size = std::mem::size_of::<T>() * len;
    if size == 0 {
        return;
    }
    unsafe {
        let layout = Layout::from_size_align_unchecked(size, std::mem::align_of::<T>());
        alloc::dealloc(ptr.as_ptr() as *mut u8, layout);
    }
}

/// A block of `capacity` slots of which the first `initialized` hold live values.
///
/// Dropping it drops the live values and frees the block. This is what keeps
/// a half-constructed block from leaking when element construction panics.
pub(crate) struct RawBlock<T> {
    pub ptr: NonNull<T>,
    pub capacity: usize,
    pub initialized: usize,
}

impl<T> RawBlock<T> {
    pub fn allocate(capacity: usize) -> Result<RawBlock<T>> {
        Ok(RawBlock {
            ptr: allocate(capacity)?,
            capacity,
            initialized: 0,
        })
    }

    /// Writes `value` into the next uninitialized slot.
    #[inline]
    pub fn push(&mut self, value: T) {
        assert!(self.initialized < self.capacity);
        unsafe { self.ptr.as_ptr().add(self.initialized).write(value) };
        self.initialized += 1;
    }

    /// Gives up the block without dropping or freeing anything.
    #[inline]
    pub fn into_parts(self) -> (NonNull<T>, usize) {
        let parts = (self.ptr, self.capacity);
        std::mem::forget(self);
        parts
    }
}

impl<T> Drop for RawBlock<T> {
    fn drop(&mut self) {
        struct Dealloc<U>(NonNull<U>, usize);

        impl<U> Drop for Dealloc<U> {
            fn drop(&mut self) {
                unsafe { deallocate(self.0, self.1) }
            }
        }

        // Frees the block even if dropping one of the values panics.
        let _dealloc = Dealloc(self.ptr, self.capacity);
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.ptr.as_ptr(),
                self.initialized,
            ));
        }
    }
}
