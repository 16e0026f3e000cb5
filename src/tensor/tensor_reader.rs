use super::desc::TensorDesc;
use super::shape::Shape;
use crate::reader::{Invoke, Primitive, Reader, Value};
use crate::utils::error::{ReaderError, Result};

/// A flat reader addressed by coordinates.
///
/// Implementors only provide the descriptor; every coordinate is turned
/// into a flat index through it and handed to [`Reader::read`].
pub trait TensorReader: Reader {
    fn desc(&self) -> &TensorDesc;

    fn shape(&self) -> &Shape {
        self.desc().shape()
    }

    fn rank(&self) -> usize {
        self.desc().rank()
    }

    fn read2d(&self, row: u64, col: u64) -> Result<Self::Elem> {
        let idx = self.desc().flat_index(&[row, col])?;
        Ok(self.read(idx))
    }

    fn tensor_read(&self, coords: &[u64]) -> Result<Self::Elem> {
        let idx = self.desc().flat_index(coords)?;
        Ok(self.read(idx))
    }

    /// Two-argument call: coerce both to coordinates, then [`read2d`](Self::read2d).
    fn invoke2(&self, row: Value, col: Value) -> Result<Value> {
        let desc = self.desc();
        desc.check_rank(2)?;
        let row = coordinate(desc, 0, row)?;
        let col = coordinate(desc, 1, col)?;
        self.read2d(row, col).map(Primitive::boxed)
    }

    /// Call with any number of arguments. One argument is a flat index, two
    /// are `(row, col)`, anything else must be a full coordinate tuple.
    ///
    /// Below rank 2 only a flat index or the full tuple is accepted; other
    /// counts fail with `UnsupportedArity`, as [`Invoke::apply_to`] does.
    /// From rank 2 up a wrong tuple length is a `RankMismatch`.
    fn apply_coords(&self, args: &[Value]) -> Result<Value> {
        let rank = self.rank();
        if rank < 2 && args.len() != 1 && args.len() != rank {
            return Err(ReaderError::UnsupportedArity { arity: args.len() });
        }
        match args {
            [arg] => self.invoke(*arg),
            [row, col] => self.invoke2(*row, *col),
            _ => {
                let desc = self.desc();
                desc.check_rank(args.len())?;
                let coords = args
                    .iter()
                    .enumerate()
                    .map(|(axis, v)| coordinate(desc, axis, *v))
                    .collect::<Result<Vec<_>>>()?;
                self.tensor_read(&coords).map(Primitive::boxed)
            }
        }
    }

    fn coords_of(&self, flat: u64) -> Result<Vec<u64>> {
        self.desc().unravel(flat)
    }
}

fn coordinate(desc: &TensorDesc, axis: usize, v: Value) -> Result<u64> {
    let c = v.to_index()?;
    let dim = desc.shape().dim(axis).unwrap_or(0);
    u64::try_from(c).map_err(|_| ReaderError::out_of_range(c, dim))
}
