use super::Buffer;

impl<T> IntoIterator for Buffer<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { buf: self, index: 0 }
    }
}

/// An owning iterator that drains a [`Buffer`] front to back.
pub struct IntoIter<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) index: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index == self.buf.len {
            None
        } else {
            // SAFETY: Slots in [index, len) are initialized and each is read
            // exactly once; Drop below skips everything already yielded.
            let value = unsafe { self.buf.ptr.add(self.index).read().assume_init() };
            self.index += 1;
            Some(value)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buf.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.index..self.buf.len {
            // SAFETY: Slots in [index, len) are initialized and unyielded.
            unsafe {
                self.buf.ptr.add(i).as_mut().assume_init_drop();
            }
        }
        // Everything is either moved out or dropped above; the Buffer's own
        // Drop must only free the block.
        self.buf.len = 0;
    }
}

impl<'a, T> IntoIterator for &'a Buffer<T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Buffer<T> {
    type Item = &'a mut T;

    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
