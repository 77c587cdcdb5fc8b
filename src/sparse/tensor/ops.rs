//! In-place operations and axis reductions on SparseTensor
//!
//! Every method guards the format first: COO input fails with
//! [`Error::UnsupportedFormat`] and is left untouched.

use crate::dtype::Element;
use crate::error::{Error, Result};

use super::super::format::{Axis, SparseFormat};
use super::super::inplace::{CompressedStorage, IndexArg};
use super::super::kernels;
use super::SparseTensor;

fn unsupported(op: &'static str) -> Error {
    Error::UnsupportedFormat {
        format: SparseFormat::Coo,
        op,
    }
}

fn reduction_axis(axis: isize) -> Result<Axis> {
    Axis::from_index(axis).ok_or(Error::InvalidDimension { dim: axis, ndim: 2 })
}

impl<T: Element> SparseTensor<T> {
    // =========================================================================
    // In-place scaling
    // =========================================================================

    /// Multiply column `j` by `scale[j]`
    ///
    /// `scale` must have length `ncols`. On CSR input the factor of each entry
    /// is looked up through its stored column index clamped into
    /// `[0, scale.len())`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedFormat`] for COO input
    /// - [`Error::ShapeMismatch`] if `scale.len() != ncols`
    pub fn inplace_column_scale(&mut self, scale: &[T]) -> Result<()> {
        self.scale_axis(Axis::Columns, scale, "inplace_column_scale")
    }

    /// Multiply row `i` by `scale[i]`
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedFormat`] for COO input
    /// - [`Error::ShapeMismatch`] if `scale.len() != nrows`
    pub fn inplace_row_scale(&mut self, scale: &[T]) -> Result<()> {
        self.scale_axis(Axis::Rows, scale, "inplace_row_scale")
    }

    fn scale_axis(&mut self, axis: Axis, scale: &[T], op: &'static str) -> Result<()> {
        match self {
            SparseTensor::Csr(d) => d.scale_axis(axis, scale),
            SparseTensor::Csc(d) => d.scale_axis(axis, scale),
            SparseTensor::Coo(_) => Err(unsupported(op)),
        }
    }

    // =========================================================================
    // In-place swaps
    // =========================================================================

    /// Exchange rows `m` and `n`
    ///
    /// Negative indices count from the last row. Swapping a row with itself
    /// leaves the buffers untouched.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedFormat`] for COO input
    /// - [`Error::NonScalarIndex`] if either index is a sequence
    /// - [`Error::IndexOutOfBounds`] if an index falls outside `[-nrows, nrows)`
    pub fn inplace_swap_row(
        &mut self,
        m: impl Into<IndexArg>,
        n: impl Into<IndexArg>,
    ) -> Result<()> {
        self.swap_axis(Axis::Rows, m.into(), n.into(), "inplace_swap_row")
    }

    /// Exchange columns `m` and `n`
    ///
    /// Same contract as [`inplace_swap_row`](Self::inplace_swap_row), with
    /// negative indices counted from the last column.
    pub fn inplace_swap_column(
        &mut self,
        m: impl Into<IndexArg>,
        n: impl Into<IndexArg>,
    ) -> Result<()> {
        self.swap_axis(Axis::Columns, m.into(), n.into(), "inplace_swap_column")
    }

    fn swap_axis(&mut self, axis: Axis, m: IndexArg, n: IndexArg, op: &'static str) -> Result<()> {
        match self {
            SparseTensor::Csr(d) => d.swap_axis(axis, m, n),
            SparseTensor::Csc(d) => d.swap_axis(axis, m, n),
            SparseTensor::Coo(_) => Err(unsupported(op)),
        }
    }

    // =========================================================================
    // Axis reductions
    // =========================================================================

    /// Per-column mean and population variance, implicit zeros included
    ///
    /// Both vectors have length `ncols`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedFormat`] for COO input
    /// - [`Error::InvalidArgument`] if the matrix has no rows
    pub fn mean_variance_axis0(&self) -> Result<(Vec<f64>, Vec<f64>)> {
        match self {
            SparseTensor::Csr(d) => kernels::csr_mean_variance_axis0(d),
            SparseTensor::Csc(d) => kernels::csc_mean_variance_axis0(d),
            SparseTensor::Coo(_) => Err(unsupported("mean_variance_axis0")),
        }
    }

    /// Minimum and maximum along `axis`, implicit zeros included
    ///
    /// `axis` is `0` (or `-2`) to reduce across rows, giving one pair per
    /// column, or `1` (or `-1`) to reduce across columns.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedFormat`] for COO input
    /// - [`Error::InvalidDimension`] for any other `axis`
    /// - [`Error::InvalidArgument`] if the reduced axis has length 0
    pub fn min_max_axis(&self, axis: isize) -> Result<(Vec<T>, Vec<T>)> {
        match self {
            SparseTensor::Csr(d) => kernels::min_max_axis(d, reduction_axis(axis)?),
            SparseTensor::Csc(d) => kernels::min_max_axis(d, reduction_axis(axis)?),
            SparseTensor::Coo(_) => Err(unsupported("min_max_axis")),
        }
    }
}
