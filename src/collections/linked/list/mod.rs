//! A module containing [`SinglyLinkedList`] and its associated types:
//! [`NodeId`] for identity-addressed access and the usual iterator trio.

mod iter;
mod node;
mod singly_linked_list;
mod tests;

pub use iter::*;
pub use node::NodeId;
pub(crate) use node::{Link, Node, NodePtr};
pub use singly_linked_list::*;
