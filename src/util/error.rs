use std::error::Error;
use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

#[derive(Debug)]
pub struct EmptyList;

impl Display for EmptyList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "List is empty!")
    }
}

impl Error for EmptyList {}

#[derive(Debug)]
pub struct EmptyBuffer;

impl Display for EmptyBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Buffer is empty!")
    }
}

impl Error for EmptyBuffer {}

#[derive(Debug)]
pub struct NodeNotFound;

impl Display for NodeNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Node is not a member of this list!")
    }
}

impl Error for NodeNotFound {}

#[derive(Debug)]
pub struct AllocationFailed {
    pub cap: usize,
}

impl Display for AllocationFailed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to allocate storage for {} slots!", self.cap)
    }
}

impl Error for AllocationFailed {}

#[derive(
    Debug,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::TryInto,
    derive_more::IsVariant,
)]
pub enum ListError {
    IndexOutOfBounds(IndexOutOfBounds),
    EmptyList(EmptyList),
    NodeNotFound(NodeNotFound),
}
