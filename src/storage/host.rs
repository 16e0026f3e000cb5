use std::marker::PhantomData;
use std::mem::size_of;

use crate::reader::{Primitive, Reader};
use crate::utils::error::{ReaderError, Result};

use super::slot;

/// Host byte buffer read as elements of type `T` (native endianness).
///
/// Elements are decoded straight out of the bytes on each `read`; the buffer
/// is never converted or copied as a whole, so it does not need to be
/// aligned for `T`.
#[derive(Clone, Debug)]
pub struct HostBuffer<T> {
    data: Box<[u8]>,
    len: u64,
    _elem: PhantomData<T>,
}

impl<T: Primitive> HostBuffer<T> {
    pub fn from_bytes(data: Box<[u8]>) -> Result<Self> {
        let len = element_count::<T>(data.len())?;
        tracing::debug!(
            "host buffer: {} bytes as {} x {}",
            data.len(),
            len,
            T::DATATYPE
        );
        Ok(Self {
            data,
            len,
            _elem: PhantomData,
        })
    }

    pub fn from_elements(elems: &[T]) -> Self {
        let bytes: &[u8] = bytemuck::cast_slice(elems);
        Self {
            data: bytes.into(),
            len: elems.len() as u64,
            _elem: PhantomData,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len_bytes(&self) -> usize {
        self.data.len()
    }

    pub fn view(&self) -> HostBufferView<'_, T> {
        HostBufferView {
            data: &self.data,
            len: self.len,
            _elem: PhantomData,
        }
    }
}

impl<T: Primitive> Reader for HostBuffer<T> {
    type Elem = T;

    #[inline]
    fn read(&self, idx: u64) -> T {
        read_element(&self.data, idx)
    }

    #[inline]
    fn lsize(&self) -> u64 {
        self.len
    }
}

/// Borrowed counterpart of [`HostBuffer`].
#[derive(Clone, Copy, Debug)]
pub struct HostBufferView<'a, T> {
    data: &'a [u8],
    len: u64,
    _elem: PhantomData<T>,
}

impl<'a, T: Primitive> HostBufferView<'a, T> {
    pub fn new(data: &'a [u8]) -> Result<Self> {
        let len = element_count::<T>(data.len())?;
        Ok(Self {
            data,
            len,
            _elem: PhantomData,
        })
    }
}

impl<T: Primitive> Reader for HostBufferView<'_, T> {
    type Elem = T;

    #[inline]
    fn read(&self, idx: u64) -> T {
        read_element(self.data, idx)
    }

    #[inline]
    fn lsize(&self) -> u64 {
        self.len
    }
}

fn element_count<T>(len_bytes: usize) -> Result<u64> {
    let elem_size = size_of::<T>();
    if len_bytes % elem_size != 0 {
        return Err(ReaderError::ByteLength {
            len: len_bytes,
            elem_size,
        });
    }
    Ok((len_bytes / elem_size) as u64)
}

fn read_element<T: Primitive>(bytes: &[u8], idx: u64) -> T {
    let size = size_of::<T>();
    let start = slot(idx).saturating_mul(size);
    let end = start.saturating_add(size);
    bytemuck::pod_read_unaligned(&bytes[start..end])
}
