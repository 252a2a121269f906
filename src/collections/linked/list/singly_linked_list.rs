use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;

use super::{Iter, IterMut, Node, NodeId, NodePtr};
use crate::util::result::ResultExtension;
#[doc(inline)]
pub use crate::util::error::{EmptyList, IndexOutOfBounds, ListError, NodeNotFound};

/// A list with links in one direction, holding head and tail pointers into an
/// acyclic chain of owned nodes.
///
/// Values can be addressed by position or, via the [`NodeId`] tokens returned
/// from the insertion methods, by node identity. The list exclusively owns its
/// nodes and their values; removal transfers the value back to the caller, who
/// may drop it or reinsert it elsewhere.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the list.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `is_empty` | `O(1)` |
/// | `len` | `O(n)` |
/// | `front` | `O(1)` |
/// | `back` | `O(1)` |
/// | `append` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `insert` | `O(i)` |
/// | `get` | `O(i)` |
/// | `node_at` | `O(i)` |
/// | `index_of` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `remove_at` | `O(n)` |
/// | `pop_back` | `O(n)` |
/// | `replace` | `O(n)` |
/// | `replace_at` | `O(n)` |
///
/// There is no cached length; `len` counts nodes by walking the chain. With
/// only forward links, anything that must find a predecessor (tail removal
/// included) walks from the head.
pub struct SinglyLinkedList<T> {
    pub(crate) state: ListState<T>,
    // The stamp for the next insertion; tokens are never reused, which is
    // what lets a membership walk tell a stale id from a node that reuses
    // its allocation.
    pub(crate) next_token: u64,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

// An inhabited Full state always has both pointers set, which makes the
// head-without-tail (and converse) corruption unrepresentable.
pub(crate) struct ListContents<T> {
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> SinglyLinkedList<T> {
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            state: Empty,
            next_token: 0,
            _phantom: PhantomData,
        }
    }

    pub const fn is_empty(&self) -> bool {
        match &self.state {
            Empty => true,
            Full { .. } => false,
        }
    }

    /// Counts the nodes in the list by walking the chain. O(n).
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut walk = match &self.state {
            Empty => None,
            Full(contents) => Some(contents.head),
        };
        while let Some(curr) = walk {
            count += 1;
            walk = *curr.next();
        }
        count
    }

    pub fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(contents) => Some(contents.head.value()),
        }
    }

    pub fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(contents) => Some(contents.tail.value()),
        }
    }

    /// Returns the identity of the node at `index`, or [`None`] if the index
    /// is past the end of the list. Walking off the end is not an error.
    pub fn node_at(&self, index: usize) -> Option<NodeId<T>> {
        let mut walk = match &self.state {
            Empty => return None,
            Full(contents) => contents.head,
        };
        for _ in 0..index {
            walk = (*walk.next())?;
        }
        Some(NodeId::for_node(walk))
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        Some(self.node_at(index)?.ptr.value())
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        Some(self.node_at(index)?.ptr.value_mut())
    }

    /// Returns the 0-based position of `node` by identity-walking from the
    /// head, or [`None`] if it is not a member of this list.
    pub fn index_of(&self, node: NodeId<T>) -> Option<usize> {
        let mut walk = match &self.state {
            Empty => None,
            Full(contents) => Some(contents.head),
        };
        let mut index = 0;
        while let Some(curr) = walk {
            if node.matches(curr) {
                return Some(index);
            }
            walk = *curr.next();
            index += 1;
        }
        None
    }

    fn mint_token(&mut self) -> u64 {
        let token = self.next_token;
        self.next_token += 1;
        token
    }

    /// Inserts `value` at the tail. On an empty list the new node becomes both
    /// head and tail.
    pub fn append(&mut self, value: T) -> NodeId<T> {
        let token = self.mint_token();
        let node = NodePtr::from_node(Node { value, next: None, token });
        match &mut self.state {
            Empty => self.state = Full(ListContents { head: node, tail: node }),
            Full(contents) => {
                *contents.tail.next_mut() = Some(node);
                contents.tail = node;
            },
        }
        NodeId::for_node(node)
    }

    /// Inserts `value` at the head.
    pub fn push_front(&mut self, value: T) -> NodeId<T> {
        let token = self.mint_token();
        let node = NodePtr::from_node(Node { value, next: None, token });
        match &mut self.state {
            Empty => self.state = Full(ListContents { head: node, tail: node }),
            Full(contents) => {
                *node.next_mut() = Some(contents.head);
                contents.head = node;
            },
        }
        NodeId::for_node(node)
    }

    /// Inserts `value` so that its node occupies position `index` afterwards.
    ///
    /// An index past the end is not an error: the walk stops at the tail and
    /// the value is appended there, so an overshoot silently clamps to append.
    /// On an empty list the index is ignored and the value becomes the sole
    /// node.
    pub fn insert(&mut self, index: usize, value: T) -> NodeId<T> {
        if self.is_empty() {
            return self.append(value);
        }
        if index == 0 {
            return self.push_front(value);
        }

        let token = self.mint_token();
        let node = NodePtr::from_node(Node { value, next: None, token });
        if let Full(contents) = &mut self.state {
            // Walk to the node that will precede the insertion point,
            // stopping at the tail on overshoot.
            let mut last = contents.head;
            let mut walk = *contents.head.next();
            for _ in 1..index {
                match walk {
                    Some(curr) => {
                        last = curr;
                        walk = *curr.next();
                    },
                    None => break,
                }
            }
            *node.next_mut() = walk;
            *last.next_mut() = Some(node);
            if walk.is_none() {
                contents.tail = node;
            }
        }
        NodeId::for_node(node)
    }

    /// Detaches the node identified by `node` and returns its value. Dropping
    /// the returned value releases it; keeping it detaches the "node" for
    /// reuse.
    ///
    /// # Panics
    /// Panics if the list is empty or `node` is not a member of it. Membership
    /// is verified explicitly rather than assumed, so a stale id dies here
    /// instead of corrupting the chain. See [`try_remove`](Self::try_remove)
    /// for the non-panicking form.
    pub fn remove(&mut self, node: NodeId<T>) -> T {
        self.try_remove(node).throw()
    }

    /// Non-panicking form of [`remove`](Self::remove). The list is left
    /// unchanged on error.
    pub fn try_remove(&mut self, node: NodeId<T>) -> Result<T, ListError> {
        let contents = match &mut self.state {
            Empty => return Err(EmptyList.into()),
            Full(contents) => contents,
        };

        if node.matches(contents.head) {
            let old = contents.head.take_node();
            match old.next {
                Some(new_head) => contents.head = new_head,
                // The head was also the tail.
                None => self.state = Empty,
            }
            return Ok(old.value);
        }

        // Walk for the predecessor, verifying membership along the way. The
        // token check in matches rejects a stale id whose allocation has been
        // handed to a newer node.
        let mut prev = contents.head;
        let target = loop {
            match *prev.next() {
                Some(curr) if node.matches(curr) => break curr,
                Some(curr) => prev = curr,
                None => return Err(NodeNotFound.into()),
            }
        };
        let old = target.take_node();
        *prev.next_mut() = old.next;
        if old.next.is_none() {
            contents.tail = prev;
        }
        Ok(old.value)
    }

    /// Removes the node at `index` and returns its value, or returns [`None`]
    /// without complaint if the index is past the end.
    ///
    /// # Panics
    /// Panics if the list is empty. See [`try_remove_at`](Self::try_remove_at)
    /// for the non-panicking form.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        self.try_remove_at(index).throw()
    }

    /// Non-panicking form of [`remove_at`](Self::remove_at).
    pub fn try_remove_at(&mut self, index: usize) -> Result<Option<T>, EmptyList> {
        if self.is_empty() {
            return Err(EmptyList);
        }
        match self.node_at(index) {
            None => Ok(None),
            // UNWRAP: The id was just produced by a walk over this list.
            #[allow(clippy::unwrap_used)]
            Some(node) => Ok(Some(self.try_remove(node).unwrap())),
        }
    }

    /// Detaches the tail node and returns its value, or [`None`] on an empty
    /// list. This is the shared back end of the stack and queue adapters.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = match &self.state {
            Empty => return None,
            Full(contents) => NodeId::for_node(contents.tail),
        };
        // UNWRAP: The tail is always a member of a populated list.
        #[allow(clippy::unwrap_used)]
        Some(self.try_remove(tail).unwrap())
    }

    /// Replaces the node identified by `target` with a new node holding
    /// `value`, releasing nothing: the old value is returned. Length is
    /// unchanged.
    ///
    /// # Panics
    /// Panics if `target` is not a member of the list (an empty list included).
    /// See [`try_replace`](Self::try_replace) for the non-panicking form.
    pub fn replace(&mut self, target: NodeId<T>, value: T) -> T {
        self.try_replace(target, value).throw()
    }

    /// Non-panicking form of [`replace`](Self::replace).
    pub fn try_replace(&mut self, target: NodeId<T>, value: T) -> Result<T, ListError> {
        let index = self.index_of(target).ok_or(NodeNotFound)?;
        // UNWRAP: A list containing target is not empty and index is in
        // bounds, so replacement can neither fail nor find the list empty.
        #[allow(clippy::unwrap_used)]
        Ok(self.try_replace_at(index, value).unwrap().unwrap())
    }

    /// Replaces the node at `index`: the new value's node is inserted at
    /// `index`, pushing the old occupant to `index + 1`, and the old occupant
    /// is then detached and returned. Length is unchanged. On an empty list
    /// the index is ignored, the value becomes the sole node and [`None`] is
    /// returned.
    ///
    /// # Panics
    /// Panics if the list is non-empty and `index` is past the end. See
    /// [`try_replace_at`](Self::try_replace_at) for the non-panicking form.
    pub fn replace_at(&mut self, index: usize, value: T) -> Option<T> {
        self.try_replace_at(index, value).throw()
    }

    /// Non-panicking form of [`replace_at`](Self::replace_at).
    pub fn try_replace_at(
        &mut self,
        index: usize,
        value: T,
    ) -> Result<Option<T>, IndexOutOfBounds> {
        if self.is_empty() {
            self.append(value);
            return Ok(None);
        }
        let len = self.len();
        if index >= len {
            return Err(IndexOutOfBounds { index, len });
        }

        let inserted = self.insert(index, value);
        // UNWRAP: index < len, so the old occupant now follows the inserted
        // node.
        #[allow(clippy::unwrap_used)]
        let old = NodeId::for_node((*inserted.ptr.next()).unwrap());
        // UNWRAP: The successor was just observed in this list.
        #[allow(clippy::unwrap_used)]
        Ok(Some(self.try_remove(old).unwrap()))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        for item in iter {
            list.append(item);
        }
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        let mut curr = match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head),
        };
        while let Some(ptr) = curr {
            let node = ptr.take_node();
            curr = node.next;
        }
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for item in self.iter() {
            if !first {
                write!(f, " -> ")?;
            }
            write!(f, "({item:?})")?;
            first = false;
        }
        Ok(())
    }
}
