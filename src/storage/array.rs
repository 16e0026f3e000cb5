use crate::reader::{Primitive, Reader};

use super::{slice::SliceReader, slot};

/// Reader that owns its elements.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayReader<T> {
    data: Box<[T]>,
}

impl<T: Primitive> ArrayReader<T> {
    pub fn new(data: Box<[T]>) -> Self {
        Self { data }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn view(&self) -> SliceReader<'_, T> {
        SliceReader::new(&self.data)
    }

    pub fn into_inner(self) -> Box<[T]> {
        self.data
    }
}

impl<T: Primitive> From<Vec<T>> for ArrayReader<T> {
    fn from(v: Vec<T>) -> Self {
        Self::new(v.into_boxed_slice())
    }
}

impl<T: Primitive> FromIterator<T> for ArrayReader<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Primitive> Reader for ArrayReader<T> {
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
