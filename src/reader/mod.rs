mod aliases;
pub use aliases::{
    ByteReader, DoubleReader, FloatReader, IntReader, LongReader, ShortReader, UByteReader,
    UIntReader, ULongReader, UShortReader,
};
mod ext;
pub use ext::ReaderExt;
mod invoke;
pub use invoke::Invoke;
mod iter;
pub use iter::ReaderIter;
mod primitive;
pub use primitive::{Datatype, Primitive};
#[allow(clippy::module_inception)]
mod reader;
pub use reader::Reader;
mod stream;
pub use stream::{TypedStream, TypedStreamExt};
mod value;
pub use value::Value;
