use std::fmt::{self, Debug, Formatter};
use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated through Box rather than raw alloc, because
// dereferencing a Box allows the value to be moved back off the heap when a
// node is detached.

pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: A NodePtr always points at a live Node owned by a list.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: A NodePtr always points at a live Node owned by a list.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: A NodePtr always points at a live Node owned by a list.
        unsafe { &(*self.0.as_ptr()).next }
    }

    pub fn token(&self) -> u64 {
        // SAFETY: A NodePtr always points at a live Node owned by a list.
        unsafe { (*self.0.as_ptr()).token }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: A NodePtr always points at a live Node owned by a list.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Frees the node's allocation and moves its contents back to the caller.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: from_node is the only constructor, so the pointer was
        // produced by Box::leak and has not been freed yet.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Debug for NodePtr<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "NodePtr({:p})", self.0.as_ptr())
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
    // Minted once at insertion and never changed; see NodeId.
    pub token: u64,
}

/// An opaque identity token for a node currently held by a
/// [`SinglyLinkedList`](super::SinglyLinkedList).
///
/// Ids are handed out by the insertion methods and compared by node identity,
/// never by value, so two equal values in one list still have distinct ids. An
/// id is invalidated when its node is removed; every list method that accepts
/// one re-verifies membership by walking from the head before touching the
/// node, so presenting a stale id is rejected rather than undefined.
///
/// A node's address is not identity enough on its own: the allocator is free
/// to place a later node in a removed node's slot. Each id therefore also
/// carries the token the list stamped into the node at insertion, which is
/// never reused within a list, so a stale id fails the membership walk even
/// when its allocation has been recycled.
pub struct NodeId<T> {
    pub(crate) ptr: NodePtr<T>,
    pub(crate) token: u64,
}

impl<T> NodeId<T> {
    /// Captures the identity of a node observed in a live list.
    pub(crate) fn for_node(ptr: NodePtr<T>) -> NodeId<T> {
        NodeId {
            ptr,
            token: ptr.token(),
        }
    }

    /// True when `ptr` is the very node this id was minted for, address and
    /// stamp both.
    pub(crate) fn matches(&self, ptr: NodePtr<T>) -> bool {
        ptr == self.ptr && ptr.token() == self.token
    }
}

impl<T> Clone for NodeId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeId<T> {}

impl<T> PartialEq for NodeId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr && self.token == other.token
    }
}

impl<T> Eq for NodeId<T> {}

impl<T> Debug for NodeId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({:p}#{})", self.ptr.0.as_ptr(), self.token)
    }
}
