use std::fmt;

use num_traits::ToPrimitive;

use super::primitive::Datatype;
use crate::utils::error::{ReaderError, Result};

/// Boxed, type-tagged element. Used wherever a capability has to hand out
/// or accept elements without knowing the reader's element type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Int8(i8),
    Uint8(u8),
    Int16(i16),
    Uint16(u16),
    Int32(i32),
    Uint32(u32),
    Int64(i64),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
}

impl Value {
    pub fn datatype(&self) -> Datatype {
        match self {
            Value::Int8(_) => Datatype::Int8,
            Value::Uint8(_) => Datatype::Uint8,
            Value::Int16(_) => Datatype::Int16,
            Value::Uint16(_) => Datatype::Uint16,
            Value::Int32(_) => Datatype::Int32,
            Value::Uint32(_) => Datatype::Uint32,
            Value::Int64(_) => Datatype::Int64,
            Value::Uint64(_) => Datatype::Uint64,
            Value::Float32(_) => Datatype::Float32,
            Value::Float64(_) => Datatype::Float64,
        }
    }

    /// Coerce to a signed index. Floats truncate toward zero; NaN, infinities
    /// and values past `i64` fail.
    pub fn to_index(&self) -> Result<i64> {
        let idx = match *self {
            Value::Int8(v) => v.to_i64(),
            Value::Uint8(v) => v.to_i64(),
            Value::Int16(v) => v.to_i64(),
            Value::Uint16(v) => v.to_i64(),
            Value::Int32(v) => v.to_i64(),
            Value::Uint32(v) => v.to_i64(),
            Value::Int64(v) => Some(v),
            Value::Uint64(v) => v.to_i64(),
            Value::Float32(v) => v.to_i64(),
            Value::Float64(v) => v.to_i64(),
        };
        idx.ok_or_else(|| ReaderError::IndexCoercion {
            value: self.to_string(),
        })
    }

    pub fn to_f64(&self) -> f64 {
        match *self {
            Value::Int8(v) => v as f64,
            Value::Uint8(v) => v as f64,
            Value::Int16(v) => v as f64,
            Value::Uint16(v) => v as f64,
            Value::Int32(v) => v as f64,
            Value::Uint32(v) => v as f64,
            Value::Int64(v) => v as f64,
            Value::Uint64(v) => v as f64,
            Value::Float32(v) => v as f64,
            Value::Float64(v) => v,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int8(v) => write!(f, "{v}"),
            Value::Uint8(v) => write!(f, "{v}"),
            Value::Int16(v) => write!(f, "{v}"),
            Value::Uint16(v) => write!(f, "{v}"),
            Value::Int32(v) => write!(f, "{v}"),
            Value::Uint32(v) => write!(f, "{v}"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Uint64(v) => write!(f, "{v}"),
            Value::Float32(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
        }
    }
}
