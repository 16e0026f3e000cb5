use std::fmt;

use crate::reader::{Primitive, Reader};

/// Reader whose elements are computed from their index.
///
/// `f` must be pure. No storage is allocated, so the length can exceed
/// what fits in memory.
#[derive(Clone)]
pub struct GeneratedReader<T, F> {
    len: u64,
    f: F,
    _elem: std::marker::PhantomData<fn() -> T>,
}

impl<T, F> GeneratedReader<T, F>
where
    T: Primitive,
    F: Fn(u64) -> T,
{
    pub fn new(len: u64, f: F) -> Self {
        Self {
            len,
            f,
            _elem: std::marker::PhantomData,
        }
    }
}

/// `len` copies of `value`.
pub fn constant<T: Primitive>(
    len: u64,
    value: T,
) -> GeneratedReader<T, impl Fn(u64) -> T + Clone> {
    GeneratedReader::new(len, move |_| value)
}

impl<T, F> Reader for GeneratedReader<T, F>
where
    T: Primitive,
    F: Fn(u64) -> T,
{
    type Elem = T;

    #[inline]
    fn read(&self, idx: u64) -> T {
        assert!(
            idx < self.len,
            "index {idx} out of range for generated reader of length {}",
            self.len
        );
        (self.f)(idx)
    }

    #[inline]
    fn lsize(&self) -> u64 {
        self.len
    }
}

impl<T: Primitive, F> fmt::Debug for GeneratedReader<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedReader")
            .field("len", &self.len)
            .field("datatype", &T::DATATYPE)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::ReaderExt;

    #[test]
    fn computes_elements_from_index() {
        let squares = GeneratedReader::new(5, |i| (i * i) as u32);
        assert_eq!(squares.to_vec().unwrap(), vec![0, 1, 4, 9, 16]);
        assert_eq!(format!("{squares:?}"), "GeneratedReader { len: 5, datatype: Uint32 }");
    }

    #[test]
    fn constant_reader() {
        let ones = constant(4, 1.0f64);
        assert_eq!(ones.lsize(), 4);
        assert_eq!(ones.nth(3), Ok(1.0));
        assert!(ones.nth(4).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn raw_read_past_end_panics() {
        let r = constant(2, 0u8);
        r.read(2);
    }
}
