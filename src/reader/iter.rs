use std::iter::FusedIterator;

use super::reader::Reader;
use crate::utils::error::{ReaderError, Result};

/// Single-pass cursor over one reader.
///
/// Each call to [`ReaderExt::iter`](super::ReaderExt::iter) creates an
/// independent cursor; cursors never share position.
pub struct ReaderIter<'a, R: Reader + ?Sized> {
    reader: &'a R,
    pos: u64,
    len: u64,
}

impl<'a, R: Reader + ?Sized> ReaderIter<'a, R> {
    pub fn new(reader: &'a R) -> Self {
        Self {
            reader,
            pos: 0,
            len: reader.lsize(),
        }
    }

    pub fn has_next(&self) -> bool {
        self.pos < self.len
    }

    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Next element, or `IteratorExhausted` once every element was yielded.
    pub fn try_next(&mut self) -> Result<R::Elem> {
        if !self.has_next() {
            return Err(ReaderError::IteratorExhausted { len: self.len });
        }
        let value = self.reader.read(self.pos);
        self.pos += 1;
        Ok(value)
    }
}

/// Size hint for `n` remaining elements. Exact when `n` fits `usize`.
pub(crate) fn remaining_hint(n: u64) -> (usize, Option<usize>) {
    match usize::try_from(n) {
        Ok(n) => (n, Some(n)),
        Err(_) => (usize::MAX, None),
    }
}

impl<R: Reader + ?Sized> Iterator for ReaderIter<'_, R> {
    type Item = R::Elem;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        remaining_hint(self.len - self.pos)
    }
}

// Narrower targets cannot count every element of a `u64`-sized reader.
#[cfg(target_pointer_width = "64")]
impl<R: Reader + ?Sized> ExactSizeIterator for ReaderIter<'_, R> {}

impl<R: Reader + ?Sized> FusedIterator for ReaderIter<'_, R> {}
