//! A single heap-allocated block of elements with exclusive, move-only ownership.
//!
//! `OwnedBuffer` is the storage primitive behind `SimpleVector`. It knows nothing
//! about logical size or growth: it owns exactly one block of a fixed length,
//! hands out indexed access into it, and transfers the block on move, swap or
//! release. It never duplicates a block; there is no `Clone` implementation.

use std::fmt;
use std::ops::{Index, IndexMut};

/// An exclusively owned, fixed-length heap block of `T`.
///
/// A zero-length buffer holds no block at all. Every slot of an allocated block
/// is an initialized `T`; freshly allocated blocks are filled with `T::default()`.
///
/// The buffer is move-only. Copying the contents requires an explicit,
/// element-by-element deep copy by the caller.
pub struct OwnedBuffer<T> {
    /// The owned block, `None` when nothing is allocated.
    block: Option<Box<[T]>>,
}

impl<T> OwnedBuffer<T> {
    /// Creates a buffer that owns no block.
    pub const fn new() -> OwnedBuffer<T> {
        OwnedBuffer { block: None }
    }

    /// Takes ownership of an existing block without copying it.
    ///
    /// An empty block is released immediately and the buffer owns nothing.
    pub fn from_boxed_slice(block: Box<[T]>) -> OwnedBuffer<T> {
        if block.is_empty() {
            OwnedBuffer::new()
        } else {
            OwnedBuffer { block: Some(block) }
        }
    }

    /// Takes ownership of a raw block of `len` elements starting at `ptr`.
    ///
    /// A null `ptr` yields an empty buffer.
    ///
    /// # Safety
    ///
    /// `ptr` and `len` must describe a block obtained from
    /// [`OwnedBuffer::into_raw_parts`] (or equivalently from leaking a `Box<[T]>`
    /// of exactly `len` elements), and no other owner may free or access it
    /// afterwards.
    pub unsafe fn from_raw_parts(ptr: *mut T, len: usize) -> OwnedBuffer<T> {
        if ptr.is_null() {
            return OwnedBuffer::new();
        }
        let block = unsafe { Box::from_raw(std::ptr::slice_from_raw_parts_mut(ptr, len)) };
        OwnedBuffer::from_boxed_slice(block)
    }

    /// Relinquishes ownership of the block, leaving this buffer empty.
    ///
    /// The caller becomes responsible for the returned block.
    #[must_use]
    pub fn release(&mut self) -> Option<Box<[T]>> {
        self.block.take()
    }

    /// Consumes the buffer and returns the raw pointer and length of its block.
    ///
    /// Returns a null pointer and zero length when no block is owned. The
    /// block must eventually be handed back to [`OwnedBuffer::from_raw_parts`]
    /// to be freed.
    #[must_use]
    pub fn into_raw_parts(mut self) -> (*mut T, usize) {
        match self.release() {
            Some(block) => {
                let len = block.len();
                (Box::into_raw(block) as *mut T, len)
            }
            None => (std::ptr::null_mut(), 0),
        }
    }

    /// Moves the block out into a new buffer, leaving this one empty.
    #[must_use]
    pub fn take(&mut self) -> OwnedBuffer<T> {
        OwnedBuffer {
            block: self.block.take(),
        }
    }

    /// Exchanges the blocks of two buffers. No elements are moved.
    #[inline]
    pub fn swap(&mut self, other: &mut OwnedBuffer<T>) {
        std::mem::swap(&mut self.block, &mut other.block);
    }

    /// Returns `true` if a block is currently owned.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.block.is_some()
    }

    /// Returns the number of slots in the owned block (zero if none).
    #[inline]
    pub fn len(&self) -> usize {
        self.block.as_ref().map_or(0, |block| block.len())
    }

    /// Returns `true` if the buffer has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a raw pointer to the first slot, or null if no block is owned.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.block
            .as_ref()
            .map_or(std::ptr::null(), |block| block.as_ptr())
    }

    /// Returns a mutable raw pointer to the first slot, or null if no block is owned.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.block
            .as_mut()
            .map_or(std::ptr::null_mut(), |block| block.as_mut_ptr())
    }

    /// Returns the whole block as a slice (empty if none is owned).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.block.as_deref().unwrap_or(&[])
    }

    /// Returns the whole block as a mutable slice (empty if none is owned).
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.block.as_deref_mut().unwrap_or(&mut [])
    }

    /// Returns a reference to the slot at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the slot at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns a reference to the slot at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`OwnedBuffer::len`].
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len());
        unsafe { self.as_slice().get_unchecked(index) }
    }

    /// Returns a mutable reference to the slot at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`OwnedBuffer::len`].
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len());
        unsafe { self.as_mut_slice().get_unchecked_mut(index) }
    }
}

impl<T: Default> OwnedBuffer<T> {
    /// Allocates a block of `len` default-constructed elements.
    ///
    /// No allocation takes place when `len` is zero.
    pub fn with_len(len: usize) -> OwnedBuffer<T> {
        if len == 0 {
            return OwnedBuffer::new();
        }
        let block = std::iter::repeat_with(T::default)
            .take(len)
            .collect::<Box<[T]>>();
        OwnedBuffer { block: Some(block) }
    }
}

impl<T> Default for OwnedBuffer<T> {
    fn default() -> Self {
        OwnedBuffer::new()
    }
}

impl<T> Index<usize> for OwnedBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for OwnedBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> From<Box<[T]>> for OwnedBuffer<T> {
    fn from(block: Box<[T]>) -> Self {
        OwnedBuffer::from_boxed_slice(block)
    }
}

impl<T> From<Vec<T>> for OwnedBuffer<T> {
    fn from(vec: Vec<T>) -> Self {
        OwnedBuffer::from_boxed_slice(vec.into_boxed_slice())
    }
}

impl<T: fmt::Debug> fmt::Debug for OwnedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedBuffer")
            .field("len", &self.len())
            .field("values", &self.as_slice())
            .finish()
    }
}
