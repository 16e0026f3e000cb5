//! typed-reader - zero-copy, read-only typed views over numeric buffers and tensors
//!
//! A storage backend implements one operation, [`Reader::read`], and gets
//! sizing, boxed access, iteration, numeric streaming, functional invocation
//! and list-style access for free. [`TensorView`] adds 2-D and n-D
//! coordinate addressing on top of any flat reader.

mod reader;

mod storage;

mod tensor;

mod utils;

pub use reader::{
    ByteReader, Datatype, DoubleReader, FloatReader, IntReader, Invoke, LongReader, Primitive,
    Reader, ReaderExt, ReaderIter, ShortReader, TypedStream, TypedStreamExt, UByteReader,
    UIntReader, ULongReader, UShortReader, Value,
};
pub use storage::{
    ArrayReader, AsReader, GeneratedReader, HostBuffer, HostBufferView, SliceReader, constant,
};
pub use tensor::{
    ByteTensorReader, DoubleTensorReader, FloatTensorReader, IntTensorReader, Layout,
    LongTensorReader, Shape, ShortTensorReader, TensorDesc, TensorReader, TensorView,
    TensorViewConfig, UByteTensorReader, UIntTensorReader, ULongTensorReader, UShortTensorReader,
};
pub use utils::error::{ReaderError, Result};

/// Every capability trait, for glob import.
pub mod prelude {
    pub use crate::{AsReader, Invoke, Reader, ReaderExt, TensorReader, TypedStreamExt};
}
