//! Linked collection types. Revolves around [`SinglyLinkedList`] and the
//! [`Stack`] and [`Queue`] policy adapters built on top of it.

pub mod list;
pub mod queue;
pub mod stack;

#[doc(inline)]
pub use list::{NodeId, SinglyLinkedList};
#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use stack::Stack;
