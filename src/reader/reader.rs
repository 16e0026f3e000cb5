use std::rc::Rc;
use std::sync::Arc;

use super::primitive::Primitive;

/// Read contract for one primitive element type.
///
/// This is the only thing a storage backend implements. Sizing, boxed
/// access, iteration, streaming and functional invocation are all derived
/// from `read` and `lsize` by the extension traits in this module.
///
/// `read` is only defined for `idx < lsize()`. Backends shipped with this
/// crate panic outside that range, the same way slice indexing does; the
/// checked accessors in [`ReaderExt`](super::ReaderExt) return
/// [`ReaderError::OutOfRange`](crate::ReaderError::OutOfRange) instead.
///
/// `read` must be pure: the same index always yields the same element and
/// a call has no observable side effect. `lsize` must not change over the
/// reader's lifetime.
pub trait Reader {
    type Elem: Primitive;

    fn read(&self, idx: u64) -> Self::Elem;

    /// Element count as reported by storage.
    fn lsize(&self) -> u64;
}

impl<R: Reader + ?Sized> Reader for &R {
    type Elem = R::Elem;

    #[inline]
    fn read(&self, idx: u64) -> Self::Elem {
        (**self).read(idx)
    }

    #[inline]
    fn lsize(&self) -> u64 {
        (**self).lsize()
    }
}

impl<R: Reader + ?Sized> Reader for Box<R> {
    type Elem = R::Elem;

    #[inline]
    fn read(&self, idx: u64) -> Self::Elem {
        (**self).read(idx)
    }

    #[inline]
    fn lsize(&self) -> u64 {
        (**self).lsize()
    }
}

impl<R: Reader + ?Sized> Reader for Rc<R> {
    type Elem = R::Elem;

    #[inline]
    fn read(&self, idx: u64) -> Self::Elem {
        (**self).read(idx)
    }

    #[inline]
    fn lsize(&self) -> u64 {
        (**self).lsize()
    }
}

impl<R: Reader + ?Sized> Reader for Arc<R> {
    type Elem = R::Elem;

    #[inline]
    fn read(&self, idx: u64) -> Self::Elem {
        (**self).read(idx)
    }

    #[inline]
    fn lsize(&self) -> u64 {
        (**self).lsize()
    }
}
