//! Sizing, boxed access, list semantics and bulk materialisation.

use super::iter::ReaderIter;
use super::primitive::{Datatype, Primitive};
use super::reader::Reader;
use super::value::Value;
use crate::utils::error::{ReaderError, Result};

/// Largest element count a Rust collection can address.
const MAX_COLLECTION_LEN: u64 = isize::MAX as u64;

pub trait ReaderExt: Reader {
    /// Element count as a collection size. Fails instead of truncating when
    /// the storage count cannot be addressed on this platform.
    fn size(&self) -> Result<usize> {
        let count = self.lsize();
        if count > MAX_COLLECTION_LEN {
            return Err(ReaderError::Overflow {
                count: count as u128,
            });
        }
        usize::try_from(count).map_err(|_| ReaderError::Overflow {
            count: count as u128,
        })
    }

    fn is_empty(&self) -> bool {
        self.lsize() == 0
    }

    fn datatype(&self) -> Datatype {
        <Self::Elem as Primitive>::DATATYPE
    }

    fn try_read(&self, idx: u64) -> Result<Self::Elem> {
        let len = self.lsize();
        if idx < len {
            Ok(self.read(idx))
        } else {
            Err(ReaderError::out_of_range(idx, len))
        }
    }

    /// Boxed element at `idx`.
    fn get(&self, idx: u64) -> Result<Value> {
        self.try_read(idx).map(Primitive::boxed)
    }

    /// List-style strict access. `idx` is signed so negative positions are
    /// reported as out of range rather than wrapped.
    fn nth(&self, idx: i64) -> Result<Self::Elem> {
        let len = self.size()?;
        match u64::try_from(idx) {
            Ok(i) if i < len as u64 => Ok(self.read(i)),
            _ => Err(ReaderError::out_of_range(idx, len as u64)),
        }
    }

    /// Like [`nth`](Self::nth) but substitutes `not_found` for an
    /// out-of-range index. The valid range is `0..size()`; in particular
    /// `idx == size()` yields `not_found`. Errors other than an out-of-range
    /// index still propagate.
    fn nth_or(&self, idx: i64, not_found: Self::Elem) -> Result<Self::Elem> {
        match self.nth(idx) {
            Err(e) if e.is_out_of_range() => {
                tracing::trace!("nth miss at {idx}, substituting {not_found:?}");
                Ok(not_found)
            }
            other => other,
        }
    }

    /// Boxed copy of every element, in index order.
    fn to_array(&self) -> Result<Vec<Value>> {
        let n_elems = self.size()?;
        let mut data = Vec::with_capacity(n_elems);
        for idx in 0..n_elems as u64 {
            data.push(self.read(idx).boxed());
        }
        Ok(data)
    }

    fn to_vec(&self) -> Result<Vec<Self::Elem>> {
        let n_elems = self.size()?;
        let mut data = Vec::with_capacity(n_elems);
        for idx in 0..n_elems as u64 {
            data.push(self.read(idx));
        }
        Ok(data)
    }

    /// Fresh cursor starting at index 0.
    fn iter(&self) -> ReaderIter<'_, Self> {
        ReaderIter::new(self)
    }
}

impl<R: Reader + ?Sized> ReaderExt for R {}
