//! Exclusive owner of one heap-allocated contiguous block of elements.
//!
//! [`ArrayPtr<T>`] is the storage layer of the contig containers: it allocates,
//! releases and transfers a block, and nothing else. Size/capacity bookkeeping
//! and growth live one level up, in `contig::SimpleVector`.

pub mod array_ptr;
mod raw;

pub use array_ptr::ArrayPtr;

use contig_common::Error;

/// Turns an error from a fallible allocation into the corresponding fatal
/// failure: `handle_alloc_error` for allocator exhaustion, a panic for
/// capacity overflow.
#[cold]
#[track_caller]
pub fn handle_alloc_failure(err: Error) -> ! {
    match err.failed_layout() {
        Some(layout) => std::alloc::handle_alloc_error(layout),
        None => panic!("{err}"),
    }
}
