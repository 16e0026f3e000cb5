use super::tensor_reader::TensorReader;

macro_rules! typed_tensor_reader {
    ($($name:ident => $ty:ty;)*) => {
        $(
            pub trait $name: TensorReader<Elem = $ty> {}

            impl<R: TensorReader<Elem = $ty> + ?Sized> $name for R {}
        )*
    };
}

typed_tensor_reader! {
    ByteTensorReader => i8;
    UByteTensorReader => u8;
    ShortTensorReader => i16;
    UShortTensorReader => u16;
    IntTensorReader => i32;
    UIntTensorReader => u32;
    LongTensorReader => i64;
    ULongTensorReader => u64;
    FloatTensorReader => f32;
    DoubleTensorReader => f64;
}
