//! A LIFO policy adapter over [`SinglyLinkedList`].

use std::fmt::{self, Debug, Formatter};

use super::SinglyLinkedList;

/// A last-in, first-out stack.
///
/// Pushes append at the tail of the underlying list and pops detach the tail,
/// so the most recently pushed value is always the first one back. Popping
/// transfers ownership of the value to the caller; an empty stack yields
/// [`None`] rather than an error.
pub struct Stack<T> {
    list: SinglyLinkedList<T>,
}

impl<T> Stack<T> {
    pub const fn new() -> Stack<T> {
        Stack {
            list: SinglyLinkedList::new(),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn push(&mut self, value: T) {
        self.list.append(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_back()
    }

    /// A reference to the value that [`pop`](Self::pop) would return next.
    pub fn peek(&self) -> Option<&T> {
        self.list.back()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("list", &self.list)
            .finish()
    }
}
