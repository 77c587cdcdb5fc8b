//! Core CSC implementation: struct, creation, getters

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};

use super::super::format::{CompressedFormat, SparseFormat, SparseStorage};
use super::super::inplace::{CompressedMut, CompressedRef, CompressedStorage};
use super::super::layout::{compress, validate_compressed};

/// CSC (Compressed Sparse Column) sparse matrix data
///
/// Column `j` owns the entries `col_ptrs[j]..col_ptrs[j + 1]` of `row_indices`
/// and `values`. Row indices inside a column need not be sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct CscData<T: Element> {
    pub(crate) col_ptrs: Vec<i64>,
    pub(crate) row_indices: Vec<i64>,
    pub(crate) values: Vec<T>,
    pub(crate) shape: [usize; 2],
}

impl<T: Element> CscData<T> {
    /// Create a new CSC matrix from components
    ///
    /// # Errors
    ///
    /// Returns error if col_ptrs has the wrong length, does not start at 0 and
    /// end at nnz, or decreases, or if a row index lies outside `[0, nrows)`.
    pub fn new(
        col_ptrs: Vec<i64>,
        row_indices: Vec<i64>,
        values: Vec<T>,
        shape: [usize; 2],
    ) -> Result<Self> {
        let [nrows, ncols] = shape;
        validate_compressed(
            &col_ptrs,
            &row_indices,
            values.len(),
            ncols,
            nrows,
            "col_ptrs",
            "row_indices",
        )?;

        Ok(Self {
            col_ptrs,
            row_indices,
            values,
            shape,
        })
    }

    /// Create CSC matrix from host slices
    pub fn from_slices(
        col_ptrs: &[i64],
        row_indices: &[i64],
        values: &[T],
        shape: [usize; 2],
    ) -> Result<Self> {
        Self::new(
            col_ptrs.to_vec(),
            row_indices.to_vec(),
            values.to_vec(),
            shape,
        )
    }

    /// Create an empty CSC matrix
    pub fn empty(shape: [usize; 2]) -> Self {
        Self {
            col_ptrs: vec![0; shape[1] + 1],
            row_indices: Vec::new(),
            values: Vec::new(),
            shape,
        }
    }

    /// Create a CSC matrix from a row-major dense buffer, dropping exact zeros
    pub fn from_dense(dense: &[T], shape: [usize; 2]) -> Result<Self> {
        let [nrows, ncols] = shape;
        if dense.len() != nrows * ncols {
            return Err(Error::shape_mismatch(&[nrows * ncols], &[dense.len()]));
        }

        let mut cols = Vec::new();
        let mut rows = Vec::new();
        let mut values = Vec::new();
        for (pos, &v) in dense.iter().enumerate() {
            if v != T::zero() {
                rows.push((pos / ncols) as i64);
                cols.push((pos % ncols) as i64);
                values.push(v);
            }
        }
        let (col_ptrs, row_indices, values) = compress(&cols, &rows, &values, ncols);

        Ok(Self {
            col_ptrs,
            row_indices,
            values,
            shape,
        })
    }

    /// Returns the column pointers
    pub fn col_ptrs(&self) -> &[i64] {
        &self.col_ptrs
    }

    /// Returns the row indices
    pub fn row_indices(&self) -> &[i64] {
        &self.row_indices
    }

    /// Returns the values
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns the number of non-zeros in a specific column
    ///
    /// # Panics
    ///
    /// Panics if col >= ncols
    pub fn col_nnz(&self, col: usize) -> usize {
        (self.col_ptrs[col + 1] - self.col_ptrs[col]) as usize
    }

    /// Consume the matrix, returning `(col_ptrs, row_indices, values)`
    pub fn into_parts(self) -> (Vec<i64>, Vec<i64>, Vec<T>) {
        (self.col_ptrs, self.row_indices, self.values)
    }
}

impl<T: Element> SparseStorage for CscData<T> {
    fn format(&self) -> SparseFormat {
        SparseFormat::Csc
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
        let ptr_size = (self.ncols() + 1) * std::mem::size_of::<i64>();
        let index_size = self.nnz() * std::mem::size_of::<i64>();
        let value_size = self.nnz() * self.dtype().size_in_bytes();
        ptr_size + index_size + value_size
    }
}

impl<T: Element> CompressedStorage<T> for CscData<T> {
    const FORMAT: CompressedFormat = CompressedFormat::Csc;

    fn compressed(&self) -> CompressedRef<'_, T> {
        let [nrows, ncols] = self.shape;
        CompressedRef {
            major_ptrs: &self.col_ptrs,
            minor_indices: &self.row_indices,
            values: &self.values,
            major_dim: ncols,
            minor_dim: nrows,
        }
    }

    fn compressed_mut(&mut self) -> CompressedMut<'_, T> {
        let [nrows, ncols] = self.shape;
        CompressedMut {
            major_ptrs: &mut self.col_ptrs,
            minor_indices: &mut self.row_indices,
            values: &mut self.values,
            major_dim: ncols,
            minor_dim: nrows,
        }
    }
}
