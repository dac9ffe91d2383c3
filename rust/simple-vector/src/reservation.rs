//! The capacity-reservation marker.

/// A request to construct a [`SimpleVector`](crate::SimpleVector) with room for
/// `capacity` elements and no elements present.
///
/// This exists so that "construct with capacity N" reads differently from
/// "construct with size N" at the call site:
///
/// ```
/// use simple_vector::{SimpleVector, reserve};
///
/// let v = SimpleVector::<i32>::from(reserve(16));
/// assert_eq!(v.len(), 0);
/// assert_eq!(v.capacity(), 16);
///
/// let v = SimpleVector::<i32>::with_size(16);
/// assert_eq!(v.len(), 16);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReserveProxy {
    capacity: usize,
}

impl ReserveProxy {
    pub const fn new(capacity: usize) -> ReserveProxy {
        ReserveProxy { capacity }
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Creates a [`ReserveProxy`] for `capacity` elements.
pub const fn reserve(capacity: usize) -> ReserveProxy {
    ReserveProxy::new(capacity)
}
