use std::marker::PhantomData;
use std::mem;

use super::{Link, ListContents, SinglyLinkedList};
use super::singly_linked_list::ListState::*;

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter {
            // Take the chain out of the list so that its Drop doesn't free
            // the nodes the iterator is about to walk.
            curr: match mem::take(&mut self.state) {
                Empty => None,
                Full(ListContents { head, .. }) => Some(head),
            },
            _phantom: PhantomData,
        }
    }
}

pub struct IntoIter<T> {
    pub(crate) curr: Link<T>,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr.map(|ptr| {
            // Use a box to move the value and clean up.
            let node = ptr.take_node();
            self.curr = node.next;
            node.value
        })
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Release whatever the caller didn't consume.
        while self.next().is_some() {}
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            curr: match &self.state {
                Empty => None,
                Full(contents) => Some(contents.head),
            },
            _phantom: PhantomData,
        }
    }
}

pub struct Iter<'a, T> {
    pub(crate) curr: Link<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr.map(|ptr| {
            self.curr = *ptr.next();
            ptr.value()
        })
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            curr: match &self.state {
                Empty => None,
                Full(contents) => Some(contents.head),
            },
            _phantom: PhantomData,
        }
    }
}

pub struct IterMut<'a, T> {
    pub(crate) curr: Link<T>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr.map(|mut ptr| {
            self.curr = *ptr.next();
            ptr.value_mut()
        })
    }
}
