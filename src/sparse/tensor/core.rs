//! Core SparseTensor implementation: enum, creation, format queries

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};

use super::super::coo::CooData;
use super::super::csc::CscData;
use super::super::csr::CsrData;
use super::super::format::{CompressedFormat, SparseFormat, SparseStorage};

/// Sparse matrix with runtime-selected storage format
///
/// `SparseTensor` is the "any sparse input" type. It wraps the three storage
/// formats behind one interface and is what the in-place and reduction
/// operations take.
///
/// # Format Selection
///
/// - **COO**: Best for construction; rejected by every in-place operation
/// - **CSR**: Row operations are segment-local
/// - **CSC**: Column operations are segment-local
///
/// # Example
///
/// ```
/// use sparsefn::sparse::SparseTensor;
///
/// let mut x = SparseTensor::from_csr_slices(
///     &[0, 2, 3],        // row_ptrs
///     &[0, 2, 1],        // col_indices
///     &[1.0f64, 2.0, 3.0],
///     [2, 3],
/// )?;
///
/// x.inplace_column_scale(&[2.0, 1.0, 0.5])?;
/// assert_eq!(x.to_dense(), vec![2.0, 0.0, 1.0, 0.0, 3.0, 0.0]);
/// # Ok::<(), sparsefn::error::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SparseTensor<T: Element> {
    /// COO (Coordinate) format: construction and format conversion only.
    ///
    /// Stores (row, col, value) triplets. Convert with `to_csr()` or `to_csc()`
    /// before calling any in-place operation.
    Coo(CooData<T>),

    /// CSR (Compressed Sparse Row) format.
    ///
    /// Compresses row indices using a pointer array; rows are the major axis.
    Csr(CsrData<T>),

    /// CSC (Compressed Sparse Column) format.
    ///
    /// Compresses column indices using a pointer array; columns are the major
    /// axis. Transpose of CSC is CSR.
    Csc(CscData<T>),
}

impl<T: Element> SparseTensor<T> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create an empty sparse tensor
    pub fn empty(shape: [usize; 2], format: SparseFormat) -> Self {
        match format {
            SparseFormat::Coo => SparseTensor::Coo(CooData::empty(shape)),
            SparseFormat::Csr => SparseTensor::Csr(CsrData::empty(shape)),
            SparseFormat::Csc => SparseTensor::Csc(CscData::empty(shape)),
        }
    }

    /// Create sparse tensor from COO triplet slices
    pub fn from_coo_slices(
        rows: &[i64],
        cols: &[i64],
        values: &[T],
        shape: [usize; 2],
    ) -> Result<Self> {
        Ok(SparseTensor::Coo(CooData::from_slices(
            rows, cols, values, shape,
        )?))
    }

    /// Create sparse tensor from CSR component slices
    pub fn from_csr_slices(
        row_ptrs: &[i64],
        col_indices: &[i64],
        values: &[T],
        shape: [usize; 2],
    ) -> Result<Self> {
        Ok(SparseTensor::Csr(CsrData::from_slices(
            row_ptrs,
            col_indices,
            values,
            shape,
        )?))
    }

    /// Create sparse tensor from CSC component slices
    pub fn from_csc_slices(
        col_ptrs: &[i64],
        row_indices: &[i64],
        values: &[T],
        shape: [usize; 2],
    ) -> Result<Self> {
        Ok(SparseTensor::Csc(CscData::from_slices(
            col_ptrs,
            row_indices,
            values,
            shape,
        )?))
    }

    /// Create a sparse tensor in `format` from a row-major dense buffer
    ///
    /// Exact zeros are not stored.
    pub fn from_dense(dense: &[T], shape: [usize; 2], format: SparseFormat) -> Result<Self> {
        let csr = CsrData::from_dense(dense, shape)?;
        Ok(match format {
            SparseFormat::Coo => SparseTensor::Coo(csr.to_coo()),
            SparseFormat::Csr => SparseTensor::Csr(csr),
            SparseFormat::Csc => SparseTensor::Csc(csr.to_csc()),
        })
    }

    // =========================================================================
    // Format queries
    // =========================================================================

    /// Returns the storage format
    pub fn format(&self) -> SparseFormat {
        match self {
            SparseTensor::Coo(d) => d.format(),
            SparseTensor::Csr(d) => d.format(),
            SparseTensor::Csc(d) => d.format(),
        }
    }

    /// Returns the shape [nrows, ncols]
    pub fn shape(&self) -> [usize; 2] {
        match self {
            SparseTensor::Coo(d) => d.shape(),
            SparseTensor::Csr(d) => d.shape(),
            SparseTensor::Csc(d) => d.shape(),
        }
    }

    /// Returns the number of rows
    pub fn nrows(&self) -> usize {
        self.shape()[0]
    }

    /// Returns the number of columns
    pub fn ncols(&self) -> usize {
        self.shape()[1]
    }

    /// Returns the number of stored entries
    pub fn nnz(&self) -> usize {
        match self {
            SparseTensor::Coo(d) => d.nnz(),
            SparseTensor::Csr(d) => d.nnz(),
            SparseTensor::Csc(d) => d.nnz(),
        }
    }

    /// Returns the element type
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Returns the sparsity ratio (fraction of zeros)
    pub fn sparsity(&self) -> f64 {
        match self {
            SparseTensor::Coo(d) => d.sparsity(),
            SparseTensor::Csr(d) => d.sparsity(),
            SparseTensor::Csc(d) => d.sparsity(),
        }
    }

    /// Returns true if stored in CSR format
    pub fn is_csr(&self) -> bool {
        matches!(self, SparseTensor::Csr(_))
    }

    /// Returns true if stored in CSC format
    pub fn is_csc(&self) -> bool {
        matches!(self, SparseTensor::Csc(_))
    }

    /// Returns true if stored in COO format
    pub fn is_coo(&self) -> bool {
        matches!(self, SparseTensor::Coo(_))
    }

    /// Resolve the compressed format, rejecting COO
    ///
    /// `op` names the calling operation in the error message.
    pub fn compressed_format(&self, op: &'static str) -> Result<CompressedFormat> {
        let format = self.format();
        format
            .compressed()
            .ok_or(Error::UnsupportedFormat { format, op })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Borrow the CSR data, if stored as CSR
    pub fn as_csr(&self) -> Option<&CsrData<T>> {
        match self {
            SparseTensor::Csr(d) => Some(d),
            _ => None,
        }
    }

    /// Borrow the CSC data, if stored as CSC
    pub fn as_csc(&self) -> Option<&CscData<T>> {
        match self {
            SparseTensor::Csc(d) => Some(d),
            _ => None,
        }
    }

    /// Borrow the COO data, if stored as COO
    pub fn as_coo(&self) -> Option<&CooData<T>> {
        match self {
            SparseTensor::Coo(d) => Some(d),
            _ => None,
        }
    }
}

impl<T: Element> From<CooData<T>> for SparseTensor<T> {
    fn from(data: CooData<T>) -> Self {
        SparseTensor::Coo(data)
    }
}

impl<T: Element> From<CsrData<T>> for SparseTensor<T> {
    fn from(data: CsrData<T>) -> Self {
        SparseTensor::Csr(data)
    }
}

impl<T: Element> From<CscData<T>> for SparseTensor<T> {
    fn from(data: CscData<T>) -> Self {
        SparseTensor::Csc(data)
    }
}
