//! Property-based tests for the in-place operations.
//!
//! Key invariants:
//! - Swapping (m, n) then (n, m) restores all three buffers exactly
//! - Swaps agree with the dense reference on both formats
//! - Negative indices address the same position as their wrapped value
//! - Scaling by s then 1/s restores the values
//! - CSR and CSC give the same dense result for the same scaling

mod common;

use common::{assert_allclose_f64, dense_swap_columns, dense_swap_rows};
use proptest::prelude::*;
use sparsefn::prelude::*;

/// A dense matrix with roughly half of its entries zero
fn sparse_dense() -> impl Strategy<Value = (Vec<f64>, [usize; 2])> {
    (1usize..7, 1usize..7).prop_flat_map(|(nrows, ncols)| {
        prop::collection::vec(
            prop_oneof![Just(0.0), (-9i32..10).prop_map(f64::from)],
            nrows * ncols,
        )
        .prop_map(move |dense| (dense, [nrows, ncols]))
    })
}

/// A matrix plus two in-range positions along each axis
fn matrix_with_indices() -> impl Strategy<Value = (Vec<f64>, [usize; 2], [usize; 4])> {
    sparse_dense().prop_flat_map(|(dense, shape)| {
        let [nrows, ncols] = shape;
        (
            Just(dense),
            Just(shape),
            [0..nrows, 0..nrows, 0..ncols, 0..ncols],
        )
    })
}

fn both_formats(dense: &[f64], shape: [usize; 2]) -> [SparseTensor<f64>; 2] {
    [
        SparseTensor::from_dense(dense, shape, SparseFormat::Csr).unwrap(),
        SparseTensor::from_dense(dense, shape, SparseFormat::Csc).unwrap(),
    ]
}

proptest! {
    /// Swapping twice is the identity on the raw buffers.
    #[test]
    fn swap_is_an_involution((dense, shape, [r0, r1, c0, c1]) in matrix_with_indices()) {
        for original in both_formats(&dense, shape) {
            let mut x = original.clone();
            x.inplace_swap_row(r0, r1).unwrap();
            x.inplace_swap_row(r1, r0).unwrap();
            prop_assert_eq!(&x, &original);

            x.inplace_swap_column(c0, c1).unwrap();
            x.inplace_swap_column(c1, c0).unwrap();
            prop_assert_eq!(&x, &original);
        }
    }

    /// Swaps agree with the dense reference.
    #[test]
    fn swap_matches_dense((dense, shape, [r0, r1, c0, c1]) in matrix_with_indices()) {
        let rows = dense_swap_rows(&dense, shape, r0, r1);
        let both = dense_swap_columns(&rows, shape, c0, c1);
        for mut x in both_formats(&dense, shape) {
            x.inplace_swap_row(r0, r1).unwrap();
            prop_assert_eq!(x.to_dense(), rows.clone());
            x.inplace_swap_column(c0, c1).unwrap();
            prop_assert_eq!(x.to_dense(), both.clone());
        }
    }

    /// A negative index behaves as its wrapped counterpart.
    #[test]
    fn negative_index_wraps((dense, shape, [r0, _, c0, _]) in matrix_with_indices()) {
        let [nrows, ncols] = shape;
        for original in both_formats(&dense, shape) {
            let mut a = original.clone();
            let mut b = original.clone();
            a.inplace_swap_row(-1, r0).unwrap();
            b.inplace_swap_row(nrows - 1, r0).unwrap();
            prop_assert_eq!(&a, &b);

            let mut a = original.clone();
            let mut b = original;
            a.inplace_swap_column(c0 as i64 - ncols as i64, 0).unwrap();
            b.inplace_swap_column(c0, 0).unwrap();
            prop_assert_eq!(&a, &b);
        }
    }

    /// Scaling by s and then 1/s restores every value.
    #[test]
    fn scale_then_inverse_restores(
        (dense, shape) in sparse_dense(),
        factors in prop::collection::vec(0.1f64..10.0, 12),
    ) {
        let [nrows, ncols] = shape;
        let rows = &factors[..nrows];
        let cols = &factors[6..6 + ncols];
        let inv = |s: &[f64]| s.iter().map(|v| 1.0 / v).collect::<Vec<_>>();

        for mut x in both_formats(&dense, shape) {
            x.inplace_row_scale(rows).unwrap();
            x.inplace_column_scale(cols).unwrap();
            x.inplace_row_scale(&inv(rows)).unwrap();
            x.inplace_column_scale(&inv(cols)).unwrap();
            assert_allclose_f64(&x.to_dense(), &dense, 1e-12, 1e-12, "restored");
        }
    }

    /// Row scaling on CSR and CSC yields the same dense matrix.
    #[test]
    fn row_scale_is_format_independent(
        (dense, shape) in sparse_dense(),
        factors in prop::collection::vec(-4.0f64..4.0, 6),
    ) {
        let scale = &factors[..shape[0]];
        let [mut csr, mut csc] = both_formats(&dense, shape);
        csr.inplace_row_scale(scale).unwrap();
        csc.inplace_row_scale(scale).unwrap();
        prop_assert_eq!(csr.to_dense(), csc.to_dense());
    }
}
