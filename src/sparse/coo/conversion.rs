//! COO format conversion: to_csr, to_csc, to_dense

use super::CooData;
use crate::dtype::Element;
use crate::sparse::layout::compress;
use crate::sparse::{CscData, CsrData};

impl<T: Element> CooData<T> {
    /// Convert to CSR format
    ///
    /// Entries keep their input order within each row; duplicates are kept.
    pub fn to_csr(&self) -> CsrData<T> {
        let (row_ptrs, col_indices, values) = compress(
            &self.row_indices,
            &self.col_indices,
            &self.values,
            self.shape[0],
        );
        CsrData {
            row_ptrs,
            col_indices,
            values,
            shape: self.shape,
        }
    }

    /// Convert to CSC format
    ///
    /// Entries keep their input order within each column; duplicates are kept.
    pub fn to_csc(&self) -> CscData<T> {
        let (col_ptrs, row_indices, values) = compress(
            &self.col_indices,
            &self.row_indices,
            &self.values,
            self.shape[1],
        );
        CscData {
            col_ptrs,
            row_indices,
            values,
            shape: self.shape,
        }
    }

    /// Transpose by exchanging the index vectors
    pub fn transpose(self) -> CooData<T> {
        CooData {
            row_indices: self.col_indices,
            col_indices: self.row_indices,
            values: self.values,
            shape: [self.shape[1], self.shape[0]],
        }
    }

    /// Materialize as a row-major dense buffer, summing duplicates
    pub fn to_dense(&self) -> Vec<T> {
        let [nrows, ncols] = self.shape;
        let mut out = vec![T::zero(); nrows * ncols];
        for ((&r, &c), &v) in self
            .row_indices
            .iter()
            .zip(&self.col_indices)
            .zip(&self.values)
        {
            let slot = &mut out[r as usize * ncols + c as usize];
            *slot = *slot + v;
        }
        out
    }
}
