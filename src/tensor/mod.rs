mod aliases;
pub use aliases::{
    ByteTensorReader, DoubleTensorReader, FloatTensorReader, IntTensorReader, LongTensorReader,
    ShortTensorReader, UByteTensorReader, UIntTensorReader, ULongTensorReader, UShortTensorReader,
};
mod config;
pub use config::{Layout, TensorViewConfig};
mod desc;
pub use desc::TensorDesc;
mod shape;
pub use shape::Shape;
mod tensor_reader;
pub use tensor_reader::TensorReader;
mod view;
pub use view::TensorView;
