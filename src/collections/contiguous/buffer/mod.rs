//! A module containing [`Buffer`] and its associated types.
//!
//! [`IntoIter`] drains a Buffer by value; borrowed iteration goes through the
//! [`Deref`](std::ops::Deref) to a slice, reusing [`std::slice::Iter`] and
//! [`std::slice::IterMut`].

mod buffer;
mod iter;
mod tests;

pub use buffer::*;
pub use iter::*;
