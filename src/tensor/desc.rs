use super::config::Layout;
use super::shape::Shape;
use crate::utils::error::{ReaderError, Result};

/// Shape plus the strides derived from it. Built once per view; the layout
/// and strides cannot change afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TensorDesc {
    shape: Shape,
    layout: Layout,
    strides: Vec<u64>,
    num_elements: u64,
}

impl TensorDesc {
    pub fn new(shape: Shape, layout: Layout) -> Result<Self> {
        let num_elements = shape.num_elements()?;
        let strides = Self::compute_strides(shape.dims(), layout);
        Ok(Self {
            shape,
            layout,
            strides,
            num_elements,
        })
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn strides(&self) -> &[u64] {
        &self.strides
    }

    pub fn num_elements(&self) -> u64 {
        self.num_elements
    }

    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    pub fn check_rank(&self, actual: usize) -> Result<()> {
        if actual == self.rank() {
            Ok(())
        } else {
            Err(ReaderError::RankMismatch {
                expected: self.rank(),
                actual,
            })
        }
    }

    // Strides saturate only when a dimension is 0. No coordinate tuple is
    // valid then, and `flat_index` rejects it before touching a stride.
    pub fn compute_strides(dims: &[u64], layout: Layout) -> Vec<u64> {
        let mut s = vec![1u64; dims.len()];
        match layout {
            Layout::RowMajor => {
                for i in (0..dims.len().saturating_sub(1)).rev() {
                    s[i] = s[i + 1].saturating_mul(dims[i + 1]);
                }
            }
            Layout::ColumnMajor => {
                for i in 1..dims.len() {
                    s[i] = s[i - 1].saturating_mul(dims[i - 1]);
                }
            }
        }
        s
    }

    /// Flat index of a coordinate tuple.
    pub fn flat_index(&self, coords: &[u64]) -> Result<u64> {
        self.check_rank(coords.len())?;
        for (axis, (&c, &d)) in coords.iter().zip(self.shape.dims()).enumerate() {
            if c >= d {
                return Err(ReaderError::CoordinateOutOfRange {
                    axis,
                    coord: c,
                    dim: d,
                });
            }
        }
        // Every coordinate is in range, so the sum is below `num_elements`.
        Ok(coords
            .iter()
            .zip(&self.strides)
            .map(|(&c, &stride)| c * stride)
            .sum())
    }

    /// Coordinate tuple of a flat index; inverse of [`flat_index`](Self::flat_index).
    pub fn unravel(&self, flat: u64) -> Result<Vec<u64>> {
        if flat >= self.num_elements {
            return Err(ReaderError::out_of_range(flat, self.num_elements));
        }
        let mut coords = vec![0u64; self.rank()];
        let mut rem = flat;
        for axis in self.layout.outer_to_inner(self.rank()) {
            coords[axis] = rem / self.strides[axis];
            rem %= self.strides[axis];
        }
        Ok(coords)
    }
}
