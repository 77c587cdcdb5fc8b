//! SparseTensor format conversion: to_coo, to_csr, to_csc, to_dense

use crate::dtype::Element;

use super::super::format::SparseFormat;
use super::SparseTensor;

impl<T: Element> SparseTensor<T> {
    // =========================================================================
    // Format Conversion
    // =========================================================================

    /// Convert to COO format
    pub fn to_coo(&self) -> SparseTensor<T> {
        match self {
            SparseTensor::Coo(d) => SparseTensor::Coo(d.clone()),
            SparseTensor::Csr(d) => SparseTensor::Coo(d.to_coo()),
            SparseTensor::Csc(d) => SparseTensor::Coo(d.to_coo()),
        }
    }

    /// Convert to CSR format
    pub fn to_csr(&self) -> SparseTensor<T> {
        match self {
            SparseTensor::Coo(d) => SparseTensor::Csr(d.to_csr()),
            SparseTensor::Csr(d) => SparseTensor::Csr(d.clone()),
            SparseTensor::Csc(d) => SparseTensor::Csr(d.to_csr()),
        }
    }

    /// Convert to CSC format
    pub fn to_csc(&self) -> SparseTensor<T> {
        match self {
            SparseTensor::Coo(d) => SparseTensor::Csc(d.to_csc()),
            SparseTensor::Csr(d) => SparseTensor::Csc(d.to_csc()),
            SparseTensor::Csc(d) => SparseTensor::Csc(d.clone()),
        }
    }

    /// Convert to specified format
    pub fn to_format(&self, format: SparseFormat) -> SparseTensor<T> {
        match format {
            SparseFormat::Coo => self.to_coo(),
            SparseFormat::Csr => self.to_csr(),
            SparseFormat::Csc => self.to_csc(),
        }
    }

    /// Transpose without copying the buffers
    ///
    /// CSR becomes CSC and vice versa; COO exchanges its index vectors.
    pub fn transpose(self) -> SparseTensor<T> {
        match self {
            SparseTensor::Coo(d) => SparseTensor::Coo(d.transpose()),
            SparseTensor::Csr(d) => SparseTensor::Csc(d.transpose()),
            SparseTensor::Csc(d) => SparseTensor::Csr(d.transpose()),
        }
    }

    // =========================================================================
    // Dense Conversion
    // =========================================================================

    /// Convert to a row-major dense buffer of length `nrows * ncols`
    ///
    /// Duplicate entries are summed.
    ///
    /// # Warning
    ///
    /// A matrix of shape [m, n] allocates m*n elements.
    pub fn to_dense(&self) -> Vec<T> {
        match self {
            SparseTensor::Coo(d) => d.to_dense(),
            SparseTensor::Csr(d) => d.to_dense(),
            SparseTensor::Csc(d) => d.to_dense(),
        }
    }
}
