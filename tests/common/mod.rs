//! Common test utilities
#![allow(dead_code)]

use sparsefn::sparse::{CscData, CsrData, SparseFormat, SparseTensor};

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// A 4x5 matrix with an empty row, an empty column and uneven row lengths
///
/// ```text
/// [ 1  0  2  0  0 ]
/// [ 0  0  0  0  0 ]
/// [ 3  4  0  5  0 ]
/// [ 0  0 -6  0  0 ]
/// ```
pub fn sample_dense() -> (Vec<f64>, [usize; 2]) {
    (
        vec![
            1.0, 0.0, 2.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 0.0, 0.0, //
            3.0, 4.0, 0.0, 5.0, 0.0, //
            0.0, 0.0, -6.0, 0.0, 0.0,
        ],
        [4, 5],
    )
}

pub fn sample_csr() -> CsrData<f64> {
    let (dense, shape) = sample_dense();
    CsrData::from_dense(&dense, shape).unwrap()
}

pub fn sample_csc() -> CscData<f64> {
    let (dense, shape) = sample_dense();
    CscData::from_dense(&dense, shape).unwrap()
}

/// The sample matrix in each compressed format
pub fn compressed_samples() -> [SparseTensor<f64>; 2] {
    let (dense, shape) = sample_dense();
    [
        SparseTensor::from_dense(&dense, shape, SparseFormat::Csr).unwrap(),
        SparseTensor::from_dense(&dense, shape, SparseFormat::Csc).unwrap(),
    ]
}

/// Dense reference: exchange rows `m` and `n` of a row-major buffer
pub fn dense_swap_rows(dense: &[f64], shape: [usize; 2], m: usize, n: usize) -> Vec<f64> {
    let ncols = shape[1];
    let mut out = dense.to_vec();
    for c in 0..ncols {
        out.swap(m * ncols + c, n * ncols + c);
    }
    out
}

/// Dense reference: exchange columns `m` and `n` of a row-major buffer
pub fn dense_swap_columns(dense: &[f64], shape: [usize; 2], m: usize, n: usize) -> Vec<f64> {
    let ncols = shape[1];
    let mut out = dense.to_vec();
    for r in 0..shape[0] {
        out.swap(r * ncols + m, r * ncols + n);
    }
    out
}
