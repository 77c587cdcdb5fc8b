//! CSC format conversion: to_coo, to_csr, to_dense, transpose

use super::CscData;
use crate::dtype::Element;
use crate::sparse::layout::{compress, expand_ptrs};
use crate::sparse::{CooData, CsrData, SparseStorage};

impl<T: Element> CscData<T> {
    /// Convert to COO format
    ///
    /// The resulting COO is in column-major order.
    pub fn to_coo(&self) -> CooData<T> {
        CooData {
            row_indices: self.row_indices.clone(),
            col_indices: expand_ptrs(&self.col_ptrs),
            values: self.values.clone(),
            shape: self.shape,
        }
    }

    /// Convert to CSR format
    ///
    /// Column indices come out sorted within each row.
    pub fn to_csr(&self) -> CsrData<T> {
        let cols = expand_ptrs(&self.col_ptrs);
        let (row_ptrs, col_indices, values) =
            compress(&self.row_indices, &cols, &self.values, self.nrows());
        CsrData {
            row_ptrs,
            col_indices,
            values,
            shape: self.shape,
        }
    }

    /// Reinterpret as the CSR matrix of the transpose, moving the buffers
    pub fn transpose(self) -> CsrData<T> {
        let [nrows, ncols] = self.shape;
        CsrData {
            row_ptrs: self.col_ptrs,
            col_indices: self.row_indices,
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
        for (col, bounds) in self.col_ptrs.windows(2).enumerate() {
            for pos in bounds[0] as usize..bounds[1] as usize {
                let slot = &mut out[self.row_indices[pos] as usize * ncols + col];
                *slot = *slot + self.values[pos];
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CscData<f64> {
        // [1, 0, 2]
        // [0, 0, 3]
        // [4, 5, 0]
        CscData::from_slices(
            &[0, 2, 3, 5],
            &[0, 2, 2, 0, 1],
            &[1.0, 4.0, 5.0, 2.0, 3.0],
            [3, 3],
        )
        .unwrap()
    }

    #[test]
    fn test_csc_to_csr() {
        let csr = sample().to_csr();
        assert_eq!(csr.row_ptrs(), &[0, 2, 3, 5]);
        assert_eq!(csr.col_indices(), &[0, 2, 2, 0, 1]);
        assert_eq!(csr.values(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_csc_to_coo() {
        let coo = sample().to_coo();
        assert_eq!(coo.row_indices(), &[0, 2, 2, 0, 1]);
        assert_eq!(coo.col_indices(), &[0, 0, 1, 2, 2]);
        assert_eq!(coo.nnz(), 5);
    }

    #[test]
    fn test_csc_to_dense() {
        assert_eq!(
            sample().to_dense(),
            vec![1.0, 0.0, 2.0, 0.0, 0.0, 3.0, 4.0, 5.0, 0.0]
        );
    }

    #[test]
    fn test_csc_transpose_roundtrip() {
        let csc = sample();
        let back = csc.clone().transpose().transpose();
        assert_eq!(back, csc);
    }
}
