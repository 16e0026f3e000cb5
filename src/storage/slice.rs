use crate::reader::{Primitive, Reader};

use super::slot;

/// Zero-copy reader over a borrowed slice.
#[derive(Clone, Copy, Debug)]
pub struct SliceReader<'a, T> {
    data: &'a [T],
}

impl<'a, T: Primitive> SliceReader<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        Self { data }
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}

impl<T: Primitive> Reader for SliceReader<'_, T> {
    type Elem = T;

    #[inline]
    fn read(&self, idx: u64) -> T {
        self.data[slot(idx)]
    }

    #[inline]
    fn lsize(&self) -> u64 {
        self.data.len() as u64
    }
}

/// Borrow any contiguous primitive collection as a reader.
pub trait AsReader<T: Primitive> {
    fn as_reader(&self) -> SliceReader<'_, T>;
}

impl<T: Primitive> AsReader<T> for [T] {
    fn as_reader(&self) -> SliceReader<'_, T> {
        SliceReader::new(self)
    }
}

impl<T: Primitive, const N: usize> AsReader<T> for [T; N] {
    fn as_reader(&self) -> SliceReader<'_, T> {
        SliceReader::new(self)
    }
}

impl<T: Primitive> AsReader<T> for Vec<T> {
    fn as_reader(&self) -> SliceReader<'_, T> {
        SliceReader::new(self)
    }
}
