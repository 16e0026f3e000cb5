//! Lazy numeric streams over a reader.

use std::iter::FusedIterator;

use rayon::prelude::*;

use super::ext::ReaderExt;
use super::iter::remaining_hint;
use super::primitive::Primitive;
use super::reader::Reader;
use crate::utils::error::Result;

type Wide<R> = <<R as Reader>::Elem as Primitive>::Wide;

/// Widened elements of `reader[front..back]`, produced one `read` at a time.
///
/// The stream can be consumed from either end and split into two disjoint
/// halves, which is what lets a consumer hand parts of it to other workers.
pub struct TypedStream<'a, R: Reader + ?Sized> {
    reader: &'a R,
    front: u64,
    back: u64,
}

impl<'a, R: Reader + ?Sized> TypedStream<'a, R> {
    fn new(reader: &'a R) -> Self {
        Self {
            reader,
            front: 0,
            back: reader.lsize(),
        }
    }

    pub fn remaining(&self) -> u64 {
        self.back - self.front
    }

    /// Split off the first half of what is left. Returns `None` when fewer
    /// than two elements remain.
    pub fn try_split(&mut self) -> Option<Self> {
        let remaining = self.remaining();
        if remaining < 2 {
            return None;
        }
        let mid = self.front + remaining / 2;
        let prefix = Self {
            reader: self.reader,
            front: self.front,
            back: mid,
        };
        self.front = mid;
        Some(prefix)
    }
}

impl<R: Reader + ?Sized> Iterator for TypedStream<'_, R> {
    type Item = Wide<R>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let value = self.reader.read(self.front).widen();
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        remaining_hint(self.remaining())
    }
}

impl<R: Reader + ?Sized> DoubleEndedIterator for TypedStream<'_, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.reader.read(self.back).widen())
    }
}

#[cfg(target_pointer_width = "64")]
impl<R: Reader + ?Sized> ExactSizeIterator for TypedStream<'_, R> {}

impl<R: Reader + ?Sized> FusedIterator for TypedStream<'_, R> {}

pub trait TypedStreamExt: Reader {
    fn typed_stream(&self) -> TypedStream<'_, Self> {
        TypedStream::new(self)
    }

    /// The same sequence as [`typed_stream`](Self::typed_stream), as a rayon
    /// parallel iterator. Indices are handed out to worker threads, each
    /// calling `read` independently.
    fn par_typed_stream(&self) -> Result<impl IndexedParallelIterator<Item = Wide<Self>> + '_>
    where
        Self: Sync,
    {
        let len = self.size()?;
        Ok((0..len)
            .into_par_iter()
            .map(move |idx| self.read(idx as u64).widen()))
    }
}

impl<R: Reader + ?Sized> TypedStreamExt for R {}
