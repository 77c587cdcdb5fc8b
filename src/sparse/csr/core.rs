//! Core CSR implementation: struct, creation, getters

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};

use super::super::format::{CompressedFormat, SparseFormat, SparseStorage};
use super::super::inplace::{CompressedMut, CompressedRef, CompressedStorage};
use super::super::layout::validate_compressed;

/// CSR (Compressed Sparse Row) sparse matrix data
///
/// Row `i` owns the entries `row_ptrs[i]..row_ptrs[i + 1]` of `col_indices` and
/// `values`. Column indices inside a row need not be sorted.
///
/// The matrix exclusively owns its three buffers. Row swaps rebuild the index
/// and value buffers, so slices borrowed from the accessors cannot outlive a
/// mutation (the borrow checker enforces this).
#[derive(Debug, Clone, PartialEq)]
pub struct CsrData<T: Element> {
    pub(crate) row_ptrs: Vec<i64>,
    pub(crate) col_indices: Vec<i64>,
    pub(crate) values: Vec<T>,
    pub(crate) shape: [usize; 2],
}

impl<T: Element> CsrData<T> {
    /// Create a new CSR matrix from components
    ///
    /// # Arguments
    ///
    /// * `row_ptrs` - Row pointers (length: nrows + 1)
    /// * `col_indices` - Column indices for each non-zero
    /// * `values` - Values at each position
    /// * `shape` - Matrix shape [nrows, ncols]
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - row_ptrs length != nrows + 1
    /// - col_indices and values have different lengths
    /// - row_ptrs does not start at 0, end at nnz, or decreases
    /// - a column index lies outside `[0, ncols)`
    pub fn new(
        row_ptrs: Vec<i64>,
        col_indices: Vec<i64>,
        values: Vec<T>,
        shape: [usize; 2],
    ) -> Result<Self> {
        let [nrows, ncols] = shape;
        validate_compressed(
            &row_ptrs,
            &col_indices,
            values.len(),
            nrows,
            ncols,
            "row_ptrs",
            "col_indices",
        )?;

        Ok(Self {
            row_ptrs,
            col_indices,
            values,
            shape,
        })
    }

    /// Create CSR matrix from host slices
    pub fn from_slices(
        row_ptrs: &[i64],
        col_indices: &[i64],
        values: &[T],
        shape: [usize; 2],
    ) -> Result<Self> {
        Self::new(
            row_ptrs.to_vec(),
            col_indices.to_vec(),
            values.to_vec(),
            shape,
        )
    }

    /// Create an empty CSR matrix
    pub fn empty(shape: [usize; 2]) -> Self {
        Self {
            row_ptrs: vec![0; shape[0] + 1],
            col_indices: Vec::new(),
            values: Vec::new(),
            shape,
        }
    }

    /// Create a CSR matrix from a row-major dense buffer, dropping exact zeros
    pub fn from_dense(dense: &[T], shape: [usize; 2]) -> Result<Self> {
        let [nrows, ncols] = shape;
        if dense.len() != nrows * ncols {
            return Err(Error::shape_mismatch(&[nrows * ncols], &[dense.len()]));
        }

        let mut row_ptrs = Vec::with_capacity(nrows + 1);
        let mut col_indices = Vec::new();
        let mut values = Vec::new();
        row_ptrs.push(0);
        for row in dense.chunks(ncols.max(1)).take(nrows) {
            for (col, &v) in row.iter().enumerate() {
                if v != T::zero() {
                    col_indices.push(col as i64);
                    values.push(v);
                }
            }
            row_ptrs.push(values.len() as i64);
        }
        // ncols == 0: chunks() yields nothing, rows are all empty
        row_ptrs.resize(nrows + 1, 0);

        Ok(Self {
            row_ptrs,
            col_indices,
            values,
            shape,
        })
    }

    /// Returns the row pointers
    pub fn row_ptrs(&self) -> &[i64] {
        &self.row_ptrs
    }

    /// Returns the column indices
    pub fn col_indices(&self) -> &[i64] {
        &self.col_indices
    }

    /// Returns the values
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns the number of non-zeros in a specific row
    ///
    /// # Panics
    ///
    /// Panics if row >= nrows
    pub fn row_nnz(&self, row: usize) -> usize {
        (self.row_ptrs[row + 1] - self.row_ptrs[row]) as usize
    }

    /// Consume the matrix, returning `(row_ptrs, col_indices, values)`
    pub fn into_parts(self) -> (Vec<i64>, Vec<i64>, Vec<T>) {
        (self.row_ptrs, self.col_indices, self.values)
    }
}

impl<T: Element> SparseStorage for CsrData<T> {
    fn format(&self) -> SparseFormat {
        SparseFormat::Csr
    }

    fn shape(&self) -> [usize; 2] {
        self.shape
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }

    fn dtype(&self) -> DType {
        T::DTYPE
    }

    fn memory_usage(&self) -> usize {
        // row_ptrs (I64) + col_indices (I64) + values
        let ptr_size = (self.nrows() + 1) * std::mem::size_of::<i64>();
        let index_size = self.nnz() * std::mem::size_of::<i64>();
        let value_size = self.nnz() * self.dtype().size_in_bytes();
        ptr_size + index_size + value_size
    }
}

impl<T: Element> CompressedStorage<T> for CsrData<T> {
    const FORMAT: CompressedFormat = CompressedFormat::Csr;

    fn compressed(&self) -> CompressedRef<'_, T> {
        let [nrows, ncols] = self.shape;
        CompressedRef {
            major_ptrs: &self.row_ptrs,
            minor_indices: &self.col_indices,
            values: &self.values,
            major_dim: nrows,
            minor_dim: ncols,
        }
    }

    fn compressed_mut(&mut self) -> CompressedMut<'_, T> {
        let [nrows, ncols] = self.shape;
        CompressedMut {
            major_ptrs: &mut self.row_ptrs,
            minor_indices: &mut self.col_indices,
            values: &mut self.values,
            major_dim: nrows,
            minor_dim: ncols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn sample() -> CsrData<f64> {
        // Matrix:
        // [1, 0, 2]
        // [0, 0, 3]
        // [4, 5, 0]
        CsrData::from_slices(
            &[0, 2, 3, 5],
            &[0, 2, 2, 0, 1],
            &[1.0, 2.0, 3.0, 4.0, 5.0],
            [3, 3],
        )
        .unwrap()
    }

    #[test]
    fn test_csr_creation() {
        let csr = sample();
        assert_eq!(csr.nnz(), 5);
        assert_eq!(csr.shape(), [3, 3]);
        assert_eq!(csr.nrows(), 3);
        assert_eq!(csr.ncols(), 3);
        assert_eq!(csr.dtype(), DType::F64);
        assert_eq!(csr.row_nnz(1), 1);
    }

    #[test]
    fn test_csr_empty() {
        let csr = CsrData::<f32>::empty([100, 200]);

        assert_eq!(csr.nnz(), 0);
        assert_eq!(csr.shape(), [100, 200]);
        assert!(csr.is_empty());
        assert_eq!(csr.row_ptrs().len(), 101); // nrows + 1
    }

    #[test]
    fn test_csr_memory_usage() {
        let csr = CsrData::<f32>::from_slices(
            &[0, 2, 3, 5],
            &[0, 2, 2, 0, 1],
            &[1.0, 2.0, 3.0, 4.0, 5.0],
            [3, 3],
        )
        .unwrap();

        // 4 row_ptrs * 8 bytes + 5 col_indices * 8 bytes + 5 values * 4 bytes
        assert_eq!(csr.memory_usage(), 92);
    }

    #[test]
    fn test_csr_invalid_row_ptrs() {
        // Wrong length (should be 4 for 3 rows)
        let result =
            CsrData::from_slices(&[0, 2, 3], &[0, 2, 2, 0, 1], &[1.0, 2.0, 3.0, 4.0, 5.0], [3, 3]);
        assert_eq!(result.unwrap_err(), Error::shape_mismatch(&[4], &[3]));
    }

    #[test]
    fn test_csr_invalid_column_index() {
        let result = CsrData::from_slices(&[0, 1], &[3], &[1.0], [1, 3]);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Index);
    }

    #[test]
    fn test_csr_from_dense() {
        let csr = CsrData::from_dense(&[1.0, 0.0, 2.0, 0.0, 0.0, 3.0, 4.0, 5.0, 0.0], [3, 3])
            .unwrap();
        assert_eq!(csr, sample());
    }

    #[test]
    fn test_csr_from_dense_without_columns() {
        let csr = CsrData::<f64>::from_dense(&[], [3, 0]).unwrap();
        assert_eq!(csr.row_ptrs(), &[0, 0, 0, 0]);
    }
}
