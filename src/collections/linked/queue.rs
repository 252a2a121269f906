//! A FIFO policy adapter over [`SinglyLinkedList`].

use std::fmt::{self, Debug, Formatter};

use super::SinglyLinkedList;

/// A first-in, first-out queue.
///
/// The mechanism is deliberately backwards from the textbook one and is kept
/// that way: values *enter at the head* and *leave at the tail*, so traversing
/// the underlying list visits them in reverse arrival order. The oldest value
/// is always the tail, which is exactly what [`dequeue`](Self::dequeue)
/// detaches, so end-to-end ordering is still strictly FIFO. Dequeuing an empty
/// queue yields [`None`] rather than an error.
pub struct Queue<T> {
    list: SinglyLinkedList<T>,
}

impl<T> Queue<T> {
    pub const fn new() -> Queue<T> {
        Queue {
            list: SinglyLinkedList::new(),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn enqueue(&mut self, value: T) {
        self.list.push_front(value);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.list.pop_back()
    }

    /// A reference to the value that [`dequeue`](Self::dequeue) would return
    /// next, i.e. the oldest value in the queue.
    pub fn peek(&self) -> Option<&T> {
        self.list.back()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("list", &self.list)
            .finish()
    }
}
