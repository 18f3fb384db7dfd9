use std::{
    fmt,
    marker::PhantomData,
    mem,
    ops::{Deref, DerefMut},
    ptr::{self, NonNull},
};

use contig_common::Result;

use crate::{handle_alloc_failure, raw::RawBlock};

/// A move-only owning handle to a heap-allocated contiguous block of `T`.
///
/// `ArrayPtr<T>` exclusively owns zero or one block. Every one of the `len`
/// slots in the block holds a live value; the handle drops them and frees the
/// block exactly once, when it is dropped. The empty state owns nothing and
/// never allocates.
///
/// Ownership is never duplicated: there is no `Clone`. It is transferred by
/// moving the handle, by [`swap`](ArrayPtr::swap), or relinquished with
/// [`release`](ArrayPtr::release).
pub struct ArrayPtr<T> {
    ptr: NonNull<T>,
    len: usize,
    _p: PhantomData<T>,
}

unsafe impl<T: Send> Send for ArrayPtr<T> {}

unsafe impl<T: Sync> Sync for ArrayPtr<T> {}

impl<T> ArrayPtr<T> {
    /// Creates an empty handle that owns no block.
    #[inline]
    pub const fn new() -> ArrayPtr<T> {
        ArrayPtr {
            ptr: NonNull::dangling(),
            len: 0,
            _p: PhantomData,
        }
    }

    /// Allocates a block of `len` default-constructed elements.
    ///
    /// `len == 0` yields the empty state. Aborts through
    /// `std::alloc::handle_alloc_error` if the allocator is exhausted, panics
    /// on capacity overflow.
    pub fn with_default(len: usize) -> ArrayPtr<T>
    where
        T: Default,
    {
        Self::from_fn(len, |_| T::default())
    }

    /// Fallible form of [`with_default`](ArrayPtr::with_default).
    ///
    /// On `Err` nothing has been allocated.
    pub fn try_with_default(len: usize) -> Result<ArrayPtr<T>>
    where
        T: Default,
    {
        Self::try_from_fn(len, |_| T::default())
    }

    /// Allocates a block of `len` elements, element `i` being `f(i)`.
    pub fn from_fn<F>(len: usize, f: F) -> ArrayPtr<T>
    where
        F: FnMut(usize) -> T,
    {
        match Self::try_from_fn(len, f) {
            Ok(array) => array,
            Err(e) => handle_alloc_failure(e),
        }
    }

    /// Fallible form of [`from_fn`](ArrayPtr::from_fn).
    ///
    /// If `f` panics, the elements produced so far are dropped and the block
    /// is freed before the panic propagates.
    pub fn try_from_fn<F>(len: usize, mut f: F) -> Result<ArrayPtr<T>>
    where
        F: FnMut(usize) -> T,
    {
        if len == 0 {
            return Ok(ArrayPtr::new());
        }
        let mut block = RawBlock::<T>::allocate(len)?;
        for i in 0..len {
            block.push(f(i));
        }
        let (ptr, len) = block.into_parts();
        Ok(ArrayPtr {
            ptr,
            len,
            _p: PhantomData,
        })
    }

    /// Takes ownership of an already-allocated block.
    ///
    /// # Safety
    ///
    /// - `ptr` must be either dangling with a zero-sized layout, or a block
    ///   allocated by the global allocator with `Layout::array::<T>(len)`
    ///   (as done by `Box<[T]>`, `Vec<T>` with `capacity == len`, or a
    ///   previous [`release`](ArrayPtr::release)).
    /// - All `len` elements must be initialized.
    /// - Nothing else may use or free the block afterwards.
    #[inline]
    pub unsafe fn from_raw_parts(ptr: NonNull<T>, len: usize) -> ArrayPtr<T> {
        ArrayPtr {
            ptr,
            len,
            _p: PhantomData,
        }
    }

    /// Relinquishes ownership of the block and resets `self` to the empty state.
    ///
    /// Returns the block pointer and its length. The caller becomes
    /// responsible for dropping the elements and freeing the block, typically
    /// by passing both back to [`from_raw_parts`](ArrayPtr::from_raw_parts).
    #[must_use = "the released block leaks unless it is adopted again"]
    #[inline]
    pub fn release(&mut self) -> (NonNull<T>, usize) {
        let ptr = mem::replace(&mut self.ptr, NonNull::dangling());
        let len = mem::take(&mut self.len);
        (ptr, len)
    }

    /// Transfers the block into a boxed slice.
    pub fn into_boxed_slice(mut self) -> Box<[T]> {
        let (ptr, len) = self.release();
        unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(ptr.as_ptr(), len)) }
    }

    /// Returns the number of elements in the block.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for the empty state.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the handle owns a non-empty block.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.len != 0
    }

    /// Returns the raw pointer to the start of the block, without affecting
    /// ownership.
    ///
    /// For the empty state this is a dangling, well-aligned pointer.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Returns the mutable raw pointer to the start of the block.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](ArrayPtr::len). This is asserted in
    /// debug builds only.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        unsafe { &*self.ptr.as_ptr().add(index) }
    }

    /// Mutable form of [`get_unchecked`](ArrayPtr::get_unchecked).
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](ArrayPtr::len).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        unsafe { &mut *self.ptr.as_ptr().add(index) }
    }

    /// Exchanges the owned blocks of `self` and `other`. Constant time, no
    /// element is touched.
    #[inline]
    pub fn swap(&mut self, other: &mut ArrayPtr<T>) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.len, &mut other.len);
    }
}

impl<T> Drop for ArrayPtr<T> {
    fn drop(&mut self) {
        if self.len == 0 {
            return;
        }
        drop(RawBlock {
            ptr: self.ptr,
            capacity: self.len,
            initialized: self.len,
        });
    }
}

impl<T> Default for ArrayPtr<T> {
    fn default() -> Self {
        ArrayPtr::new()
    }
}

impl<T> Deref for ArrayPtr<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for ArrayPtr<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> From<Box<[T]>> for ArrayPtr<T> {
    fn from(values: Box<[T]>) -> Self {
        let len = values.len();
        let raw = Box::into_raw(values) as *mut T;
        unsafe { ArrayPtr::from_raw_parts(NonNull::new_unchecked(raw), len) }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayPtr")
            .field("values", &self.as_slice())
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
