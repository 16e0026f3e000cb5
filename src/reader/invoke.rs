use super::ext::ReaderExt;
use super::primitive::Primitive;
use super::reader::Reader;
use super::value::Value;
use crate::utils::error::{ReaderError, Result};

/// A reader used as a function from index to element.
pub trait Invoke: Reader {
    fn invoke(&self, arg: Value) -> Result<Value> {
        let idx = arg.to_index()?;
        self.nth(idx).map(Primitive::boxed)
    }

    /// Call with an argument list. A flat reader only takes one argument.
    fn apply_to(&self, args: &[Value]) -> Result<Value> {
        match args {
            [arg] => self.invoke(*arg),
            _ => Err(ReaderError::UnsupportedArity { arity: args.len() }),
        }
    }
}

impl<R: Reader + ?Sized> Invoke for R {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::AsReader;

    #[test]
    fn invoke_coerces_the_index() {
        let data = [3.0f32, 4.0, 5.0];
        let reader = data.as_reader();
        assert_eq!(reader.invoke(Value::Int64(1)), Ok(Value::Float32(4.0)));
        assert_eq!(reader.invoke(Value::Float64(2.7)), Ok(Value::Float32(5.0)));
        assert_eq!(reader.invoke(Value::Uint8(0)), Ok(Value::Float32(3.0)));
        assert!(reader.invoke(Value::Int32(-1)).unwrap_err().is_out_of_range());
        assert!(matches!(
            reader.invoke(Value::Float64(f64::NAN)),
            Err(ReaderError::IndexCoercion { .. })
        ));
    }

    #[test]
    fn apply_checks_arity() {
        let data = [7i64, 8];
        let reader = data.as_reader();
        assert_eq!(reader.apply_to(&[Value::Int64(1)]), Ok(Value::Int64(8)));
        assert_eq!(
            reader.apply_to(&[Value::Int64(0), Value::Int64(1)]),
            Err(ReaderError::UnsupportedArity { arity: 2 })
        );
        assert_eq!(
            reader.apply_to(&[]),
            Err(ReaderError::UnsupportedArity { arity: 0 })
        );
    }
}
