//! CSR format conversion: to_coo, to_csc, to_dense, transpose

use super::CsrData;
use crate::dtype::Element;
use crate::sparse::layout::{compress, expand_ptrs};
use crate::sparse::{CooData, CscData, SparseStorage};

impl<T: Element> CsrData<T> {
    /// Convert to COO format
    ///
    /// Expands the compressed row pointers into explicit row indices.
    /// The resulting COO is in row-major order.
    pub fn to_coo(&self) -> CooData<T> {
        CooData {
            row_indices: expand_ptrs(&self.row_ptrs),
            col_indices: self.col_indices.clone(),
            values: self.values.clone(),
            shape: self.shape,
        }
    }

    /// Convert to CSC format
    ///
    /// Row indices come out sorted within each column.
    pub fn to_csc(&self) -> CscData<T> {
        let rows = expand_ptrs(&self.row_ptrs);
        let (col_ptrs, row_indices, values) =
            compress(&self.col_indices, &rows, &self.values, self.ncols());
        CscData {
            col_ptrs,
            row_indices,
            values,
            shape: self.shape,
        }
    }

    /// Reinterpret as the CSC matrix of the transpose
    ///
    /// The buffers are moved, not copied: a CSR matrix of shape `[r, c]` is the
    /// CSC matrix of shape `[c, r]` over the same offsets, indices and values.
    pub fn transpose(self) -> CscData<T> {
        let [nrows, ncols] = self.shape;
        CscData {
            col_ptrs: self.row_ptrs,
            row_indices: self.col_indices,
            values: self.values,
            shape: [ncols, nrows],
        }
    }

    /// Materialize as a row-major dense buffer of length `nrows * ncols`
    ///
    /// Duplicate entries for the same position are summed.
    pub fn to_dense(&self) -> Vec<T> {
        let ncols = self.ncols();
        let mut out = vec![T::zero(); self.nrows() * ncols];
        for (row, bounds) in self.row_ptrs.windows(2).enumerate() {
            for pos in bounds[0] as usize..bounds[1] as usize {
                let slot = &mut out[row * ncols + self.col_indices[pos] as usize];
                *slot = *slot + self.values[pos];
            }
        }
        out
    }
}
