//! Contiguous collection types. Currently just [`Buffer`], a growable block
//! of owned value slots.

pub mod buffer;

#[doc(inline)]
pub use buffer::Buffer;
