use super::reader::Reader;

// One named reader trait per element type, each satisfied by any reader of
// that type.
macro_rules! typed_reader {
    ($($(#[$meta:meta])* $name:ident => $ty:ty;)*) => {
        $(
            $(#[$meta])*
            pub trait $name: Reader<Elem = $ty> {}

            impl<R: Reader<Elem = $ty> + ?Sized> $name for R {}
        )*
    };
}

typed_reader! {
    /// `int8` reader.
    ByteReader => i8;
    /// `uint8` reader.
    UByteReader => u8;
    ShortReader => i16;
    UShortReader => u16;
    IntReader => i32;
    UIntReader => u32;
    /// `int64` reader.
    LongReader => i64;
    ULongReader => u64;
    /// `float32` reader.
    FloatReader => f32;
    DoubleReader => f64;
}
