use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReaderError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReaderError {
    // Addressing
    #[error("Index {index} out of range for length {len}")]
    OutOfRange { index: i128, len: u64 },

    #[error("Coordinate {coord} out of range for dimension {axis} of size {dim}")]
    CoordinateOutOfRange { axis: usize, coord: u64, dim: u64 },

    #[error("Element count {count} does not fit the size type")]
    Overflow { count: u128 },

    #[error("Expected {expected} coordinates, got {actual}")]
    RankMismatch { expected: usize, actual: usize },

    #[error("Unsupported arity: reader cannot be invoked with {arity} arguments")]
    UnsupportedArity { arity: usize },

    #[error("Iterator exhausted after {len} elements")]
    IteratorExhausted { len: u64 },

    #[error("Cannot coerce {value} to an integer index")]
    IndexCoercion { value: String },

    // Construction
    #[error("Shape {shape:?} holds {expected} elements but reader has {actual}")]
    ShapeMismatch {
        shape: Vec<u64>,
        expected: u64,
        actual: u64,
    },

    #[error("Buffer of {len} bytes is not a multiple of element size {elem_size}")]
    ByteLength { len: usize, elem_size: usize },
}

impl ReaderError {
    /// True for both flat index and coordinate misses.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            ReaderError::OutOfRange { .. } | ReaderError::CoordinateOutOfRange { .. }
        )
    }

    pub(crate) fn out_of_range(index: impl Into<i128>, len: u64) -> Self {
        ReaderError::OutOfRange {
            index: index.into(),
            len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_kinds() {
        assert!(ReaderError::out_of_range(-1i64, 3).is_out_of_range());
        assert!(
            ReaderError::CoordinateOutOfRange {
                axis: 1,
                coord: 4,
                dim: 4
            }
            .is_out_of_range()
        );
        assert!(!ReaderError::Overflow { count: 1 }.is_out_of_range());
        assert!(!ReaderError::RankMismatch { expected: 2, actual: 3 }.is_out_of_range());
    }

    #[test]
    fn messages() {
        assert_eq!(
            ReaderError::out_of_range(5u64, 3).to_string(),
            "Index 5 out of range for length 3"
        );
        assert_eq!(
            ReaderError::UnsupportedArity { arity: 2 }.to_string(),
            "Unsupported arity: reader cannot be invoked with 2 arguments"
        );
    }
}
