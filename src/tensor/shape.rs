use std::fmt;

use crate::utils::error::{ReaderError, Result};

/// Dimension sizes of a tensor view. Rank 0 is a scalar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: Vec<u64>,
}

impl Shape {
    pub fn new(dims: Vec<u64>) -> Self {
        Self { dims }
    }

    pub fn scalar() -> Self {
        Self { dims: vec![] }
    }

    pub fn vector(len: u64) -> Self {
        Self { dims: vec![len] }
    }

    pub fn matrix(rows: u64, cols: u64) -> Self {
        Self {
            dims: vec![rows, cols],
        }
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    pub fn dims(&self) -> &[u64] {
        &self.dims
    }

    pub fn dim(&self, axis: usize) -> Option<u64> {
        self.dims.get(axis).copied()
    }

    /// Product of all dimensions, 1 for a scalar.
    pub fn num_elements(&self) -> Result<u64> {
        let mut total: u128 = 1;
        for &d in &self.dims {
            total = total.saturating_mul(d as u128);
        }
        u64::try_from(total).map_err(|_| ReaderError::Overflow { count: total })
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "]")
    }
}

impl From<Vec<u64>> for Shape {
    fn from(dims: Vec<u64>) -> Self {
        Self::new(dims)
    }
}

impl From<&[u64]> for Shape {
    fn from(dims: &[u64]) -> Self {
        Self::new(dims.to_vec())
    }
}

impl<const N: usize> From<[u64; N]> for Shape {
    fn from(dims: [u64; N]) -> Self {
        Self::new(dims.to_vec())
    }
}
