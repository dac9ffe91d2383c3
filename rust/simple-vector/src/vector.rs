//! `SimpleVector`: a growable contiguous sequence with explicit capacity management.

use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut, Index, IndexMut, Range};
use std::slice::SliceIndex;

use simple_vector_buffer::OwnedBuffer;

use crate::error::{Error, Result};
use crate::reservation::ReserveProxy;

/// A resizable sequence stored in a single contiguous [`OwnedBuffer`].
///
/// The vector tracks its logical size separately from its capacity. Slots
/// `[0, len)` hold the elements; slots `[len, capacity)` hold initialized values
/// that are not part of the sequence (default values, or leftovers from
/// `pop_back`, `erase`, `clear` and shrinking `resize`). Those leftovers are
/// dropped when overwritten or when the buffer is released.
///
/// # Growth
///
/// - `push_back` and `insert` grow a full vector to `max(len + 1, 2 * capacity)`,
///   or to 1 when the capacity is zero.
/// - `resize` past the capacity grows to `max(new_len, 2 * capacity)`.
/// - `reserve` grows to exactly the requested capacity.
///
/// Growing allocates a new buffer, moves the elements into it, swaps it in, and
/// then drops the old one. Capacity never shrinks.
///
/// # Examples
///
/// ```
/// use simple_vector::simple_vector;
///
/// let mut v = simple_vector![2, 3, 4];
/// v.insert(0, 1);
/// v.push_back(5);
/// assert_eq!(v, [1, 2, 3, 4, 5]);
/// assert_eq!(v.capacity(), 6);
///
/// assert!(v.at(5).is_err());
/// ```
pub struct SimpleVector<T> {
    /// Number of elements in the sequence.
    size: usize,
    /// Number of usable slots; never exceeds `data.len()`.
    capacity: usize,
    data: OwnedBuffer<T>,
}

impl<T> SimpleVector<T> {
    /// Creates an empty vector. Does not allocate.
    pub const fn new() -> SimpleVector<T> {
        SimpleVector {
            size: 0,
            capacity: 0,
            data: OwnedBuffer::new(),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns the number of elements the vector can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data.as_slice()[..self.size]
    }

    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data.as_mut_slice()[..self.size]
    }

    /// Returns a pointer to the first slot, or null if nothing is allocated.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Returns a mutable pointer to the first slot, or null if nothing is allocated.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// Returns the begin/end pointer pair spanning the elements.
    ///
    /// The range is invalidated by any operation that changes the capacity.
    #[inline]
    pub fn as_ptr_range(&self) -> Range<*const T> {
        self.as_slice().as_ptr_range()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns an `OutOfRange` error if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T> {
        let size = self.size;
        self.as_slice()
            .get(index)
            .ok_or_else(|| Error::out_of_range(index, size))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns an `OutOfRange` error if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let size = self.size;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or_else(|| Error::out_of_range(index, size))
    }

    /// Returns a reference to the element at `index` without any bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.size);
        unsafe { self.data.get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index` without any bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.size);
        unsafe { self.data.get_unchecked_mut(index) }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Removes all elements. The capacity and the buffer are kept for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Removes the last element from the sequence.
    ///
    /// The removed value stays in its slot until it is overwritten or the
    /// buffer is released.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn pop_back(&mut self) {
        assert!(self.size != 0, "pop_back on an empty SimpleVector");
        self.size -= 1;
    }

    /// Removes the element at `position`, shifting the following elements one
    /// slot to the left.
    ///
    /// Returns the position of the element that now follows the removed one
    /// (equal to `len()` if the last element was removed).
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()`.
    pub fn erase(&mut self, position: usize) -> usize {
        assert!(
            position < self.size,
            "erase position {position} out of range for length {}",
            self.size
        );
        self.data.as_mut_slice()[position..self.size].rotate_left(1);
        self.size -= 1;
        position
    }

    /// Exchanges the contents of two vectors without moving any element.
    pub fn swap(&mut self, other: &mut SimpleVector<T>) {
        std::mem::swap(&mut self.size, &mut other.size);
        std::mem::swap(&mut self.capacity, &mut other.capacity);
        self.data.swap(&mut other.data);
    }

    /// Moves the contents out into a new vector, leaving this one empty with
    /// zero capacity.
    #[must_use]
    pub fn take(&mut self) -> SimpleVector<T> {
        std::mem::take(self)
    }

    /// Converts the vector into a `Vec` holding only the elements.
    pub fn into_vec(mut self) -> Vec<T> {
        match self.data.release() {
            Some(block) => {
                let mut vec = block.into_vec();
                vec.truncate(self.size);
                vec
            }
            None => Vec::new(),
        }
    }
}

impl<T: Default> SimpleVector<T> {
    /// Creates a vector of `size` default values, with `capacity == size`.
    pub fn with_size(size: usize) -> SimpleVector<T> {
        SimpleVector {
            size,
            capacity: size,
            data: OwnedBuffer::with_len(size),
        }
    }

    /// Creates an empty vector with room for exactly `capacity` elements.
    ///
    /// The whole buffer is allocated up front.
    pub fn with_capacity(capacity: usize) -> SimpleVector<T> {
        let mut v = SimpleVector::new();
        v.reserve(capacity);
        v
    }

    /// Changes the number of elements to `new_size`.
    ///
    /// Shrinking only truncates the sequence. Growing within the capacity
    /// resets the newly exposed slots to `T::default()`. Growing past the
    /// capacity reallocates to `max(new_size, 2 * capacity)`.
    pub fn resize(&mut self, new_size: usize) {
        if new_size <= self.size {
            self.size = new_size;
        } else if new_size <= self.capacity {
            self.data.as_mut_slice()[self.size..new_size]
                .iter_mut()
                .for_each(|slot| *slot = T::default());
            self.size = new_size;
        } else {
            // Slots past the moved elements come fresh from the allocation.
            let new_capacity = new_size.max(self.capacity.saturating_mul(2));
            self.reallocate(new_capacity);
            self.size = new_size;
        }
    }

    /// Ensures room for at least `new_capacity` elements.
    ///
    /// Reallocates to exactly `new_capacity` when it exceeds the current
    /// capacity; does nothing otherwise.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity {
            self.reallocate(new_capacity);
        }
    }

    /// Appends `value` to the end of the sequence. Amortized O(1).
    pub fn push_back(&mut self, value: T) {
        if self.size == self.capacity {
            self.reallocate(self.grown_capacity());
        }
        self.data[self.size] = value;
        self.size += 1;
    }

    /// Inserts `value` at `position`, shifting the elements from `position`
    /// onwards one slot to the right. O(len).
    ///
    /// Returns the position of the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `position > len()`.
    pub fn insert(&mut self, position: usize, value: T) -> usize {
        let size = self.size;
        assert!(
            position <= size,
            "insert position {position} out of range for length {size}"
        );

        if size < self.capacity {
            // The spare slot at `size` rotates round to `position`.
            let slots = &mut self.data.as_mut_slice()[position..=size];
            slots.rotate_right(1);
            slots[0] = value;
        } else {
            let new_capacity = self.grown_capacity();
            let mut new_data = OwnedBuffer::with_len(new_capacity);
            let (prefix, suffix) = self.data.as_mut_slice()[..size].split_at_mut(position);
            let target = new_data.as_mut_slice();
            target[..position].swap_with_slice(prefix);
            target[position] = value;
            target[position + 1..=size].swap_with_slice(suffix);

            self.data.swap(&mut new_data);
            log::trace!(
                "SimpleVector grew on insert: capacity {} -> {new_capacity}, {size} elements moved",
                self.capacity
            );
            self.capacity = new_capacity;
        }
        self.size += 1;
        position
    }

    /// Capacity to grow to when one more slot is needed.
    #[inline]
    fn grown_capacity(&self) -> usize {
        if self.capacity == 0 {
            1
        } else {
            (self.size + 1).max(self.capacity.saturating_mul(2))
        }
    }

    /// Moves the elements into a freshly allocated buffer of `new_capacity`
    /// default slots and releases the old buffer.
    #[cold]
    fn reallocate(&mut self, new_capacity: usize) {
        let mut new_data = OwnedBuffer::with_len(new_capacity);
        let count = self.size.min(new_capacity);
        new_data.as_mut_slice()[..count].swap_with_slice(&mut self.data.as_mut_slice()[..count]);
        self.data.swap(&mut new_data);
        log::trace!(
            "SimpleVector reallocated: capacity {} -> {new_capacity}, {count} elements moved",
            self.capacity
        );
        self.capacity = new_capacity;
    }
}

impl<T: Clone + Default> SimpleVector<T> {
    /// Creates a vector of `size` copies of `value`, with `capacity == size`.
    pub fn from_elem(size: usize, value: T) -> SimpleVector<T> {
        let mut data = OwnedBuffer::with_len(size);
        data.as_mut_slice().fill(value);
        SimpleVector {
            size,
            capacity: size,
            data,
        }
    }

    /// Appends clones of all elements in `values`, one `push_back` at a time.
    pub fn extend_from_slice(&mut self, values: &[T]) {
        for value in values {
            self.push_back(value.clone());
        }
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        SimpleVector::new()
    }
}

impl<T: Clone> Clone for SimpleVector<T> {
    /// Deep-copies the elements into a new buffer with `capacity == len()`.
    fn clone(&self) -> Self {
        SimpleVector::from(self.as_slice().to_vec())
    }

    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T: Default> From<ReserveProxy> for SimpleVector<T> {
    fn from(proxy: ReserveProxy) -> Self {
        SimpleVector::with_capacity(proxy.capacity())
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    /// Takes over the elements of `vec`; the capacity equals the length.
    fn from(vec: Vec<T>) -> Self {
        let size = vec.len();
        SimpleVector {
            size,
            capacity: size,
            data: OwnedBuffer::from(vec),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(values: [T; N]) -> Self {
        SimpleVector::from(Vec::from(values))
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(values: &[T]) -> Self {
        SimpleVector::from(values.to_vec())
    }
}

impl<T> From<SimpleVector<T>> for Vec<T> {
    fn from(v: SimpleVector<T>) -> Self {
        v.into_vec()
    }
}

impl<T> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SimpleVector::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Default> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + Default + 'a> Extend<&'a T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.push_back(value);
        }
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

impl<T, I: SliceIndex<[T]>> Index<I> for SimpleVector<T> {
    type Output = I::Output;

    /// # Panics
    ///
    /// Panics if `index` reaches past `len()`, even when the slots are allocated.
    #[inline]
    fn index(&self, index: I) -> &I::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for SimpleVector<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for SimpleVector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for SimpleVector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    /// Sequences of different lengths are never equal.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

impl<T: PartialEq> PartialEq<[T]> for SimpleVector<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for SimpleVector<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for SimpleVector<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for SimpleVector<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    /// Lexicographic; a shorter sequence that is a prefix of the longer one
    /// orders first.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
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

impl<T> IntoIterator for SimpleVector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Yields the elements by value. Spare slots are dropped up front.
    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}
