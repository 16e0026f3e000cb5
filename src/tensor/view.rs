use super::config::TensorViewConfig;
use super::desc::TensorDesc;
use super::shape::Shape;
use super::tensor_reader::TensorReader;
use crate::reader::{Primitive, Reader};
use crate::utils::error::{ReaderError, Result};

/// A flat reader reinterpreted as an n-dimensional grid. No data is copied;
/// the view shares the lifetime of the reader it wraps.
#[derive(Clone, Debug)]
pub struct TensorView<R> {
    reader: R,
    desc: TensorDesc,
}

impl<R: Reader> TensorView<R> {
    pub fn new(reader: R, shape: impl Into<Shape>) -> Result<Self> {
        Self::with_config(reader, shape, TensorViewConfig::default())
    }

    pub fn matrix(reader: R, rows: u64, cols: u64) -> Result<Self> {
        Self::new(reader, Shape::matrix(rows, cols))
    }

    pub fn with_config(
        reader: R,
        shape: impl Into<Shape>,
        config: TensorViewConfig,
    ) -> Result<Self> {
        let desc = TensorDesc::new(shape.into(), config.layout)?;
        let len = reader.lsize();
        if desc.num_elements() != len {
            return Err(ReaderError::ShapeMismatch {
                shape: desc.shape().dims().to_vec(),
                expected: desc.num_elements(),
                actual: len,
            });
        }

        tracing::debug!(
            "tensor view {} {:?} over {} x {}",
            desc.shape(),
            desc.layout(),
            len,
            <R::Elem as Primitive>::DATATYPE
        );

        Ok(Self { reader, desc })
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Reader> Reader for TensorView<R> {
    type Elem = R::Elem;

    #[inline]
    fn read(&self, idx: u64) -> Self::Elem {
        self.reader.read(idx)
    }

    #[inline]
    fn lsize(&self) -> u64 {
        self.reader.lsize()
    }
}

impl<R: Reader> TensorReader for TensorView<R> {
    fn desc(&self) -> &TensorDesc {
        &self.desc
    }
}
