//! `SimpleVector<T>`: size/capacity bookkeeping, growth and shifting on top of
//! an [`ArrayPtr<T>`].

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Deref, DerefMut, Range},
};

use contig_array_ptr::{ArrayPtr, handle_alloc_failure};
use contig_common::{Error, Result, verify_range};

use crate::ReserveRequest;

/// A growable sequence stored in one contiguous, exclusively owned block.
///
/// The block always holds `capacity()` initialized values. The first
/// `size()` of them form the logical sequence; the rest are spare slots whose
/// values are unspecified (default values after growth, stale values after
/// [`clear`](SimpleVector::clear), [`pop_back`](SimpleVector::pop_back),
/// [`erase`](SimpleVector::erase) or a shrinking
/// [`resize`](SimpleVector::resize)). Spare slots are overwritten when the
/// sequence grows back into them and dropped together with the block.
///
/// Operations that may need new storage (`reserve`, `resize`, `push_back`,
/// `insert`) fill the spare slots with `T::default()` and therefore require
/// `T: Default`.
///
/// # Failure safety
///
/// A new block is built completely (allocated, defaulted, existing elements
/// relocated) before it replaces the current one. If allocation fails or
/// `T::default()` panics, the vector is left exactly as it was.
pub struct SimpleVector<T> {
    items: ArrayPtr<T>,
    size: usize,
}

impl<T> SimpleVector<T> {
    /// Creates an empty vector. Does not allocate.
    #[inline]
    pub const fn new() -> SimpleVector<T> {
        SimpleVector {
            items: ArrayPtr::new(),
            size: 0,
        }
    }

    /// Creates a vector of `size` default-valued elements, with
    /// `capacity() == size`.
    pub fn with_size(size: usize) -> SimpleVector<T>
    where
        T: Default,
    {
        SimpleVector {
            items: ArrayPtr::with_default(size),
            size,
        }
    }

    /// Creates a vector of `size` copies of `value`, with `capacity() == size`.
    pub fn from_elem(size: usize, value: T) -> SimpleVector<T>
    where
        T: Clone,
    {
        SimpleVector {
            items: ArrayPtr::from_fn(size, |_| value.clone()),
            size,
        }
    }

    /// Creates an empty vector with exactly `request.capacity()` slots
    /// pre-allocated.
    pub fn with_reservation(request: ReserveRequest) -> SimpleVector<T>
    where
        T: Default,
    {
        let mut v = SimpleVector::new();
        v.reserve(request.capacity());
        v
    }

    /// Returns the number of logically valid elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Same as [`size`](SimpleVector::size).
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns a reference to the element at `index`, or an
    /// [`OutOfRange`](contig_common::ErrorKind::OutOfRange) error when
    /// `index >= size()`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        verify_range!(index < self.size);
        Ok(&self.items[index])
    }

    /// Mutable form of [`at`](SimpleVector::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        verify_range!(index < self.size);
        Ok(&mut self.items[index])
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`size`](SimpleVector::size). This is only
    /// asserted in debug builds. An index in `[size, capacity)` does not
    /// trigger memory unsafety, but yields an unspecified spare value.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.size, "index {index} >= size {}", self.size);
        unsafe { self.items.get_unchecked(index) }
    }

    /// Mutable form of [`get_unchecked`](SimpleVector::get_unchecked).
    ///
    /// # Safety
    ///
    /// `index` must be less than [`size`](SimpleVector::size).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.size, "index {index} >= size {}", self.size);
        unsafe { self.items.get_unchecked_mut(index) }
    }

    /// Sets the size to zero. Capacity and storage are unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Removes the last element from the logical sequence.
    ///
    /// The vector must not be empty; this is asserted in debug builds. In
    /// release builds, popping an empty vector leaves it unchanged.
    #[inline]
    pub fn pop_back(&mut self) {
        debug_assert!(self.size > 0, "pop_back on an empty SimpleVector");
        self.size = self.size.saturating_sub(1);
    }

    /// Removes the element at `index`, shifting every following element one
    /// slot to the left. Returns `index`, which now designates the element
    /// that followed the erased one (or the end).
    ///
    /// # Panics
    ///
    /// Panics if `index >= size()`.
    pub fn erase(&mut self, index: usize) -> usize {
        debug_assert!(index < self.size, "erase at {index}, size {}", self.size);
        self.items[index..self.size].rotate_left(1);
        self.size -= 1;
        index
    }

    /// Exchanges contents with `other` in constant time. Only storage
    /// ownership moves; no element is copied or moved.
    #[inline]
    pub fn swap(&mut self, other: &mut SimpleVector<T>) {
        self.items.swap(&mut other.items);
        mem::swap(&mut self.size, &mut other.size);
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items[..self.size]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items[..self.size]
    }

    /// Returns the `[begin, end)` raw pointer range of the logical sequence.
    ///
    /// For an empty vector `begin == end`; the address itself is
    /// unspecified. The pointers are invalidated by any mutation of the
    /// vector.
    #[inline]
    pub fn as_ptr_range(&self) -> Range<*const T> {
        self.as_slice().as_ptr_range()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the logical sequence as raw bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8]
    where
        T: bytemuck::NoUninit,
    {
        bytemuck::cast_slice(self.as_slice())
    }

    /// Converts into a `Vec<T>` holding the logical sequence. Spare slots are
    /// dropped.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = self.items.into_boxed_slice().into_vec();
        vec.truncate(self.size);
        vec
    }
}

impl<T: Default> SimpleVector<T> {
    /// Ensures `capacity() >= new_capacity`.
    ///
    /// When growing, allocates exactly `new_capacity` slots and relocates the
    /// existing elements. Never shrinks.
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(e) = self.try_reserve(new_capacity) {
            handle_alloc_failure(e);
        }
    }

    /// Fallible form of [`reserve`](SimpleVector::reserve). On `Err` the
    /// vector is unmodified.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        self.relocate(new_capacity)
    }

    /// Sets the size to `new_size`.
    ///
    /// Newly exposed positions hold `T::default()`. Growing past the capacity
    /// reallocates to `2 * new_size` slots.
    pub fn resize(&mut self, new_size: usize) {
        if let Err(e) = self.try_resize(new_size) {
            handle_alloc_failure(e);
        }
    }

    /// Fallible form of [`resize`](SimpleVector::resize). On `Err` the
    /// vector is unmodified.
    pub fn try_resize(&mut self, new_size: usize) -> Result<()> {
        if new_size > self.capacity() {
            let new_capacity = new_size
                .checked_mul(2)
                .ok_or_else(Error::capacity_overflow)?;
            // Slots past the old size are fresh defaults after relocation.
            self.relocate(new_capacity)?;
        } else if new_size > self.size {
            self.items[self.size..new_size].fill_with(T::default);
        }
        self.size = new_size;
        Ok(())
    }

    /// Appends `value` at the end.
    ///
    /// A full vector doubles its capacity first (an empty one gets 2 slots).
    pub fn push_back(&mut self, value: T) {
        if self.size == self.capacity() {
            if let Err(e) = self.grown_capacity().and_then(|c| self.relocate(c)) {
                handle_alloc_failure(e);
            }
        }
        self.items[self.size] = value;
        self.size += 1;
    }

    /// Inserts `value` at `index`, shifting the elements from `index` onwards
    /// one slot to the right. Returns a reference to the inserted element.
    ///
    /// `index` may be anything in `[0, size()]`; otherwise an
    /// [`OutOfRange`](contig_common::ErrorKind::OutOfRange) error is returned
    /// and the vector is unchanged. Growth follows the
    /// [`push_back`](SimpleVector::push_back) rule.
    pub fn insert(&mut self, index: usize, value: T) -> Result<&mut T> {
        verify_range!(index <= self.size);
        if self.size == self.capacity() {
            let new_capacity = match self.grown_capacity() {
                Ok(c) => c,
                Err(e) => handle_alloc_failure(e),
            };
            let mut items = ArrayPtr::with_default(new_capacity);
            self.trace_relocation(new_capacity);
            let (prefix, suffix) = self.items.split_at_mut(index);
            move_into(&mut items[..index], prefix);
            items[index] = value;
            move_into(&mut items[index + 1..], suffix);
            self.items.swap(&mut items);
        } else {
            // The spare slot at `size` rotates down to `index`.
            self.items[index..=self.size].rotate_right(1);
            self.items[index] = value;
        }
        self.size += 1;
        Ok(&mut self.items[index])
    }

    fn grown_capacity(&self) -> Result<usize> {
        match self.capacity() {
            0 => Ok(2),
            c => c.checked_mul(2).ok_or_else(Error::capacity_overflow),
        }
    }

    /// Replaces the block with a new one of `new_capacity` default slots,
    /// moving the logical elements over.
    fn relocate(&mut self, new_capacity: usize) -> Result<()> {
        debug_assert!(new_capacity >= self.size);
        let mut items = ArrayPtr::try_with_default(new_capacity)?;
        self.trace_relocation(new_capacity);
        move_into(&mut items, &mut self.items[..self.size]);
        self.items.swap(&mut items);
        Ok(())
    }

    fn trace_relocation(&self, new_capacity: usize) {
        log::trace!(
            "SimpleVector<{}>: capacity {} -> {}, relocating {} elements",
            std::any::type_name::<T>(),
            self.capacity(),
            new_capacity,
            self.size
        );
    }
}

/// Moves every element of `src` into the matching slot of `dst`, leaving the
/// previous `dst` values behind in `src`.
#[inline]
fn move_into<T>(dst: &mut [T], src: &mut [T]) {
    debug_assert!(dst.len() >= src.len());
    for (d, s) in dst.iter_mut().zip(src) {
        mem::swap(d, s);
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        SimpleVector::new()
    }
}

impl<T: Clone> Clone for SimpleVector<T> {
    /// Deep copy of the logical sequence; the copy's capacity equals its size.
    fn clone(&self) -> SimpleVector<T> {
        let src = self.as_slice();
        SimpleVector {
            items: ArrayPtr::from_fn(src.len(), |i| src[i].clone()),
            size: src.len(),
        }
    }

    /// Copy-assignment: the full copy is built before it is swapped in, so a
    /// failure leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleVector")
            .field("values", &self.as_slice())
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

impl<T: PartialEq> PartialEq<[T]> for SimpleVector<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for SimpleVector<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

/// Lexicographic order; a proper prefix orders before the longer sequence.
/// `<`, `<=`, `>` and `>=` all derive from `partial_cmp`.
impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Default> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Box<[T]> = iter.into_iter().collect();
        SimpleVector::from(values)
    }
}

impl<T> From<Box<[T]>> for SimpleVector<T> {
    fn from(values: Box<[T]>) -> Self {
        let size = values.len();
        SimpleVector {
            items: ArrayPtr::from(values),
            size,
        }
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    fn from(values: Vec<T>) -> Self {
        SimpleVector::from(values.into_boxed_slice())
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(values: [T; N]) -> Self {
        let values: Box<[T]> = Box::new(values);
        SimpleVector::from(values)
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(values: &[T]) -> Self {
        SimpleVector {
            items: ArrayPtr::from_fn(values.len(), |i| values[i].clone()),
            size: values.len(),
        }
    }
}

impl<T: Default> From<ReserveRequest> for SimpleVector<T> {
    fn from(request: ReserveRequest) -> Self {
        SimpleVector::with_reservation(request)
    }
}
