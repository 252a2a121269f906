use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

/// A test value whose clones all increment a shared counter when dropped,
/// allowing release behaviour to be observed from the outside.
#[derive(Debug, Default, Clone)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    /// The number of clones (and originals) dropped so far. Remember that the
    /// handle held by the test itself will eventually count too.
    pub fn count(&self) -> usize {
        self.0.get()
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
