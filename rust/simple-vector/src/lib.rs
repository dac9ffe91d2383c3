//! A resizable, contiguous sequence container with explicit capacity management.
//!
//! [`SimpleVector`] keeps its logical size and its capacity apart and exposes
//! the growth and move behavior that `Vec` hides: when capacity runs out it
//! allocates a larger [`OwnedBuffer`](simple_vector_buffer::OwnedBuffer), moves
//! the elements across, and releases the old buffer.
//!
//! Checked access ([`SimpleVector::at`]) reports an [`ErrorKind::OutOfRange`]
//! error. Other misuse (popping an empty vector, erasing or inserting at an
//! invalid position) panics.
//!
//! With the `serde` feature enabled the vector (de)serializes as a sequence.

pub mod error;
mod macros;
pub mod reservation;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod vector;

pub use error::{Error, ErrorKind, Result};
pub use reservation::{ReserveProxy, reserve};
pub use vector::SimpleVector;

#[cfg(test)]
mod tests;
