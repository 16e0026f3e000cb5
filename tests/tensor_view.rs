//! Integration tests: coordinate addressing over flat readers.
//!
//! Shapes and contents are randomised from a fixed seed so failures are
//! reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use typed_reader::prelude::*;
use typed_reader::{
    ByteTensorReader, FloatTensorReader, GeneratedReader, HostBuffer, Layout, ReaderError, Shape,
    TensorView, TensorViewConfig, Value,
};

// ── Helpers ────────────────────────────────────────────────────

fn random_dims(rng: &mut StdRng) -> Vec<u64> {
    let rank = rng.random_range(1..=4);
    (0..rank).map(|_| rng.random_range(1..=5)).collect()
}

fn random_buffer(rng: &mut StdRng, len: u64) -> HostBuffer<f32> {
    let values: Vec<f32> = (0..len).map(|_| rng.random::<f32>()).collect();
    HostBuffer::from_elements(&values)
}

/// Row-major offset computed independently of the crate.
fn row_major_offset(dims: &[u64], coords: &[u64]) -> u64 {
    coords
        .iter()
        .zip(dims)
        .fold(0, |acc, (&c, &d)| acc * d + c)
}

fn trace_row<R: ByteTensorReader>(tensor: &R, row: u64) -> Vec<i8> {
    let cols = tensor.shape().dims()[1];
    (0..cols).map(|c| tensor.read2d(row, c).unwrap()).collect()
}

fn total<R: FloatTensorReader>(tensor: &R) -> f64 {
    tensor.typed_stream().sum()
}

// ── 2-D addressing ─────────────────────────────────────────────

#[test]
fn test_read2d_matches_flat_read() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let rows = rng.random_range(1..=8u64);
        let cols = rng.random_range(1..=8u64);
        let buffer = random_buffer(&mut rng, rows * cols);
        let view = TensorView::matrix(&buffer, rows, cols).unwrap();

        for r in 0..rows {
            for c in 0..cols {
                assert_eq!(view.read2d(r, c), Ok(buffer.read(r * cols + c)));
            }
        }
        assert!(view.read2d(rows, 0).unwrap_err().is_out_of_range());
        assert!(view.read2d(0, cols).unwrap_err().is_out_of_range());
    }
}

#[test]
fn test_byte_tensor_rows() {
    let data: Vec<i8> = (0..6).collect();
    let view = TensorView::matrix(data.as_reader(), 2, 3).unwrap();
    assert_eq!(trace_row(&view, 0), vec![0, 1, 2]);
    assert_eq!(trace_row(&view, 1), vec![3, 4, 5]);
}

#[test]
fn test_invoke_two_arguments() {
    let data: Vec<u32> = (100..106).collect();
    let view = TensorView::matrix(data.as_reader(), 3, 2).unwrap();

    assert_eq!(
        view.invoke2(Value::Int64(2), Value::Int64(1)),
        Ok(Value::Uint32(105))
    );
    assert_eq!(
        view.apply_coords(&[Value::Float64(1.9), Value::Uint8(0)]),
        Ok(Value::Uint32(102))
    );
    // a flat reader of the same data rejects the second argument
    assert_eq!(
        view.reader().apply_to(&[Value::Int64(2), Value::Int64(1)]),
        Err(ReaderError::UnsupportedArity { arity: 2 })
    );
}

// ── n-D addressing ─────────────────────────────────────────────

#[test]
fn test_tensor_read_random_shapes() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..25 {
        let dims = random_dims(&mut rng);
        let len: u64 = dims.iter().product();
        let buffer = random_buffer(&mut rng, len);
        let view = TensorView::new(buffer.view(), dims.clone()).unwrap();

        for flat in 0..len {
            let coords = view.coords_of(flat).unwrap();
            assert_eq!(row_major_offset(&dims, &coords), flat);
            assert_eq!(view.tensor_read(&coords), Ok(buffer.read(flat)));
        }

        let mut too_long = vec![0; dims.len() + 1];
        assert_eq!(
            view.tensor_read(&too_long),
            Err(ReaderError::RankMismatch {
                expected: dims.len(),
                actual: dims.len() + 1
            })
        );
        too_long.truncate(dims.len());
        let last = dims.len() - 1;
        too_long[last] = dims[last];
        assert!(view.tensor_read(&too_long).unwrap_err().is_out_of_range());
    }
}

#[test]
fn test_column_major_round_trip() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..10 {
        let dims = random_dims(&mut rng);
        let len: u64 = dims.iter().product();
        let reader = GeneratedReader::new(len, |i| i as f64);
        let view =
            TensorView::with_config(reader, dims.clone(), TensorViewConfig::column_major())
                .unwrap();
        assert_eq!(view.desc().layout(), Layout::ColumnMajor);

        for flat in 0..len {
            let coords = view.coords_of(flat).unwrap();
            // first axis varies fastest
            let mut reversed_dims = dims.clone();
            reversed_dims.reverse();
            let mut reversed = coords.clone();
            reversed.reverse();
            assert_eq!(row_major_offset(&reversed_dims, &reversed), flat);
            assert_eq!(view.tensor_read(&coords), Ok(flat as f64));
        }
    }
}

#[test]
fn test_apply_coords_full_tuple() {
    let data: Vec<i64> = (0..24).collect();
    let view = TensorView::new(data.as_reader(), [2u64, 3, 4]).unwrap();

    assert_eq!(
        view.apply_coords(&[Value::Int32(1), Value::Int32(2), Value::Int32(3)]),
        Ok(Value::Int64(23))
    );
    assert_eq!(
        view.apply_coords(&[Value::Int32(0), Value::Int32(0)]),
        Err(ReaderError::RankMismatch {
            expected: 3,
            actual: 2
        })
    );
    assert!(
        view.apply_coords(&[Value::Int32(0), Value::Int32(-1), Value::Int32(0)])
            .unwrap_err()
            .is_out_of_range()
    );
}

#[test]
fn test_empty_column_major_view_rejects_every_tuple() {
    let empty = GeneratedReader::new(0, |_| 0u8);
    let view = TensorView::with_config(
        empty,
        [u64::MAX, u64::MAX, 0],
        TensorViewConfig::column_major(),
    )
    .unwrap();
    let big = u64::MAX - 1;
    assert!(view.tensor_read(&[big, big, 0]).unwrap_err().is_out_of_range());
    assert!(view.tensor_read(&[0, 0, 0]).unwrap_err().is_out_of_range());
}

#[test]
fn test_scalar_view() {
    let data = [2.5f32];
    let view = TensorView::new(data.as_reader(), Shape::scalar()).unwrap();
    assert_eq!(view.rank(), 0);
    assert_eq!(view.tensor_read(&[]), Ok(2.5));
    assert_eq!(view.apply_coords(&[]), Ok(Value::Float32(2.5)));
    assert_eq!(total(&view), 2.5);
}

// ── Construction ───────────────────────────────────────────────

#[test]
fn test_shape_mismatch_and_overflow() {
    let data = [0u8; 10];
    assert!(matches!(
        TensorView::matrix(data.as_reader(), 3, 3),
        Err(ReaderError::ShapeMismatch { .. })
    ));

    let huge = GeneratedReader::new(u64::MAX, |_| 0u8);
    assert!(matches!(
        TensorView::matrix(huge, u64::MAX, 2),
        Err(ReaderError::Overflow { .. })
    ));
}

#[test]
fn test_view_shares_the_reader() {
    let buffer = HostBuffer::from_elements(&[1.0f32, 2.0, 3.0, 4.0]);
    let a = TensorView::matrix(&buffer, 2, 2).unwrap();
    let b = TensorView::new(&buffer, [4u64]).unwrap();
    assert_eq!(a.read2d(1, 0), b.tensor_read(&[2]));
    assert_eq!(total(&a), 10.0);
}
