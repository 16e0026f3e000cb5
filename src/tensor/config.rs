/// Flattening convention from coordinates to flat index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Last axis varies fastest: `(row, col) -> row * cols + col`.
    #[default]
    RowMajor,
    /// First axis varies fastest: `(row, col) -> col * rows + row`.
    ColumnMajor,
}

impl Layout {
    /// Axes ordered from largest stride to smallest.
    pub fn outer_to_inner(self, rank: usize) -> Vec<usize> {
        match self {
            Layout::RowMajor => (0..rank).collect(),
            Layout::ColumnMajor => (0..rank).rev().collect(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TensorViewConfig {
    pub layout: Layout,
}

impl TensorViewConfig {
    pub fn row_major() -> Self {
        Self {
            layout: Layout::RowMajor,
        }
    }

    pub fn column_major() -> Self {
        Self {
            layout: Layout::ColumnMajor,
        }
    }
}
