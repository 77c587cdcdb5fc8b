//! Core COO implementation: struct, creation, getters

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};

use super::super::format::{SparseFormat, SparseStorage};

/// COO (Coordinate) sparse matrix data
///
/// Triplets in arbitrary order; duplicates are allowed and summed on
/// conversion to dense. COO is a construction format only: the in-place
/// compressed operations reject it.
#[derive(Debug, Clone, PartialEq)]
pub struct CooData<T: Element> {
    pub(crate) row_indices: Vec<i64>,
    pub(crate) col_indices: Vec<i64>,
    pub(crate) values: Vec<T>,
    pub(crate) shape: [usize; 2],
}

impl<T: Element> CooData<T> {
    /// Create COO matrix from host slices
    ///
    /// # Arguments
    ///
    /// * `rows` - Row indices
    /// * `cols` - Column indices
    /// * `values` - Non-zero values
    /// * `shape` - Matrix shape [nrows, ncols]
    pub fn from_slices(
        rows: &[i64],
        cols: &[i64],
        values: &[T],
        shape: [usize; 2],
    ) -> Result<Self> {
        if rows.len() != values.len() || cols.len() != values.len() {
            return Err(Error::shape_mismatch(
                &[values.len(), values.len()],
                &[rows.len(), cols.len()],
            ));
        }

        for (&r, &c) in rows.iter().zip(cols.iter()) {
            for (idx, size) in [(r, shape[0]), (c, shape[1])] {
                if idx < 0 {
                    return Err(Error::invalid_structure(format!("negative index: {idx}")));
                }
                if idx as usize >= size {
                    return Err(Error::IndexOutOfBounds { index: idx, size });
                }
            }
        }

        Ok(Self {
            row_indices: rows.to_vec(),
            col_indices: cols.to_vec(),
            values: values.to_vec(),
            shape,
        })
    }

    /// Create an empty COO matrix
    pub fn empty(shape: [usize; 2]) -> Self {
        Self {
            row_indices: Vec::new(),
            col_indices: Vec::new(),
            values: Vec::new(),
            shape,
        }
    }

    /// Returns the row indices
    pub fn row_indices(&self) -> &[i64] {
        &self.row_indices
    }

    /// Returns the column indices
    pub fn col_indices(&self) -> &[i64] {
        &self.col_indices
    }

    /// Returns the values
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T: Element> SparseStorage for CooData<T> {
    fn format(&self) -> SparseFormat {
        SparseFormat::Coo
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
        // row_indices (I64) + col_indices (I64) + values
        let index_size = self.nnz() * std::mem::size_of::<i64>() * 2;
        let value_size = self.nnz() * self.dtype().size_in_bytes();
        index_size + value_size
    }
}
