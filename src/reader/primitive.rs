//! Element kinds a reader can produce.
//!
//! Every primitive carries three things: a datatype keyword, a boxed
//! [`Value`] form, and a widened form used by numeric streams (floats widen
//! to `f64`, signed integers to `i64`, unsigned integers to `u64`). The
//! per-type impls are generated by `impl_primitive!` below.

use std::fmt;

use super::value::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Datatype {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float32,
    Float64,
}

impl Datatype {
    pub fn as_str(self) -> &'static str {
        match self {
            Datatype::Int8 => "int8",
            Datatype::Uint8 => "uint8",
            Datatype::Int16 => "int16",
            Datatype::Uint16 => "uint16",
            Datatype::Int32 => "int32",
            Datatype::Uint32 => "uint32",
            Datatype::Int64 => "int64",
            Datatype::Uint64 => "uint64",
            Datatype::Float32 => "float32",
            Datatype::Float64 => "float64",
        }
    }

    pub fn size_in_bytes(self) -> usize {
        match self {
            Datatype::Int8 | Datatype::Uint8 => 1,
            Datatype::Int16 | Datatype::Uint16 => 2,
            Datatype::Int32 | Datatype::Uint32 | Datatype::Float32 => 4,
            Datatype::Int64 | Datatype::Uint64 | Datatype::Float64 => 8,
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, Datatype::Float32 | Datatype::Float64)
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A primitive element type that readers are specialised over.
///
/// `Pod` lets host byte buffers be reinterpreted as elements without a copy.
pub trait Primitive: bytemuck::Pod + fmt::Debug + PartialEq + Send + Sync {
    /// Representation yielded by typed streams.
    type Wide: Copy + fmt::Debug + PartialEq + Send + Sync + 'static;

    const DATATYPE: Datatype;

    fn widen(self) -> Self::Wide;

    fn boxed(self) -> Value;
}

macro_rules! impl_primitive {
    ($ty:ty, $wide:ty, $variant:ident) => {
        impl Primitive for $ty {
            type Wide = $wide;

            const DATATYPE: Datatype = Datatype::$variant;

            #[inline]
            fn widen(self) -> $wide {
                self as $wide
            }

            #[inline]
            fn boxed(self) -> Value {
                Value::$variant(self)
            }
        }

        impl From<$ty> for Value {
            #[inline]
            fn from(v: $ty) -> Self {
                Value::$variant(v)
            }
        }
    };
}

impl_primitive!(i8, i64, Int8);
impl_primitive!(u8, u64, Uint8);
impl_primitive!(i16, i64, Int16);
impl_primitive!(u16, u64, Uint16);
impl_primitive!(i32, i64, Int32);
impl_primitive!(u32, u64, Uint32);
impl_primitive!(i64, i64, Int64);
impl_primitive!(u64, u64, Uint64);
impl_primitive!(f32, f64, Float32);
impl_primitive!(f64, f64, Float64);
