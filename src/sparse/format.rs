//! Sparse format definitions and traits

use crate::dtype::DType;

/// Sparse matrix storage format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SparseFormat {
    /// Coordinate format (COO)
    ///
    /// Stores explicit (row, col, value) triplets.
    /// Best for: construction, format conversion
    /// Storage: O(3 * nnz)
    Coo,

    /// Compressed Sparse Row (CSR)
    ///
    /// Row pointers + column indices + values.
    /// Storage: O(2 * nnz + nrows + 1)
    Csr,

    /// Compressed Sparse Column (CSC)
    ///
    /// Column pointers + row indices + values.
    /// Storage: O(2 * nnz + ncols + 1)
    Csc,
}

impl SparseFormat {
    /// Returns true if format is efficient for row operations
    #[inline]
    pub fn is_row_major(&self) -> bool {
        matches!(self, SparseFormat::Csr)
    }

    /// Returns true if format is efficient for column operations
    #[inline]
    pub fn is_col_major(&self) -> bool {
        matches!(self, SparseFormat::Csc)
    }

    /// The compressed subset this format belongs to, if any
    #[inline]
    pub fn compressed(&self) -> Option<CompressedFormat> {
        match self {
            SparseFormat::Csr => Some(CompressedFormat::Csr),
            SparseFormat::Csc => Some(CompressedFormat::Csc),
            SparseFormat::Coo => None,
        }
    }

    /// Returns the format name as a string
    pub fn name(&self) -> &'static str {
        match self {
            SparseFormat::Coo => "COO",
            SparseFormat::Csr => "CSR",
            SparseFormat::Csc => "CSC",
        }
    }
}

impl std::fmt::Display for SparseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One of the two matrix axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Axis 0: row positions
    Rows,
    /// Axis 1: column positions
    Columns,
}

impl Axis {
    /// Resolve a numpy-style axis number (`0`, `1`, `-1`, `-2`)
    pub fn from_index(axis: isize) -> Option<Self> {
        match axis {
            0 | -2 => Some(Axis::Rows),
            1 | -1 => Some(Axis::Columns),
            _ => None,
        }
    }

    /// Extent of this axis for a matrix of `shape`
    #[inline]
    pub fn extent(&self, shape: [usize; 2]) -> usize {
        match self {
            Axis::Rows => shape[0],
            Axis::Columns => shape[1],
        }
    }

    /// The other axis
    #[inline]
    pub fn other(&self) -> Self {
        match self {
            Axis::Rows => Axis::Columns,
            Axis::Columns => Axis::Rows,
        }
    }
}

/// Role an axis plays in a compressed layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisRole {
    /// Partitioned by the offsets buffer (rows for CSR)
    Major,
    /// Recorded per stored entry in the indices buffer (columns for CSR)
    Minor,
}

/// The compressed formats: the only layouts the in-place operations accept
///
/// CSR and CSC share one buffer layout with the axis roles exchanged, so a CSC
/// matrix of shape `[r, c]` reads exactly like a CSR matrix of shape `[c, r]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompressedFormat {
    /// Compressed by row
    Csr,
    /// Compressed by column
    Csc,
}

impl CompressedFormat {
    /// Which role `axis` plays in this format
    #[inline]
    pub fn role_of(&self, axis: Axis) -> AxisRole {
        match (self, axis) {
            (CompressedFormat::Csr, Axis::Rows) | (CompressedFormat::Csc, Axis::Columns) => {
                AxisRole::Major
            }
            (CompressedFormat::Csr, Axis::Columns) | (CompressedFormat::Csc, Axis::Rows) => {
                AxisRole::Minor
            }
        }
    }

    /// The format of the transpose
    #[inline]
    pub fn transposed(&self) -> Self {
        match self {
            CompressedFormat::Csr => CompressedFormat::Csc,
            CompressedFormat::Csc => CompressedFormat::Csr,
        }
    }
}

impl From<CompressedFormat> for SparseFormat {
    fn from(format: CompressedFormat) -> Self {
        match format {
            CompressedFormat::Csr => SparseFormat::Csr,
            CompressedFormat::Csc => SparseFormat::Csc,
        }
    }
}

/// Trait for sparse storage backends
///
/// This trait defines the common interface for all sparse storage formats.
/// Each format (COO, CSR, CSC) implements this trait.
pub trait SparseStorage: Sized {
    /// Returns the sparse format type
    fn format(&self) -> SparseFormat;

    /// Returns the shape as [nrows, ncols]
    fn shape(&self) -> [usize; 2];

    /// Returns the number of rows
    #[inline]
    fn nrows(&self) -> usize {
        self.shape()[0]
    }

    /// Returns the number of columns
    #[inline]
    fn ncols(&self) -> usize {
        self.shape()[1]
    }

    /// Returns the number of non-zero elements
    fn nnz(&self) -> usize;

    /// Returns the data type of values
    fn dtype(&self) -> DType;

    /// Returns the sparsity ratio (fraction of zeros)
    ///
    /// Sparsity = 1.0 - (nnz / total_elements)
    #[inline]
    fn sparsity(&self) -> f64 {
        let total = (self.nrows() * self.ncols()) as f64;
        if total == 0.0 {
            0.0
        } else {
            1.0 - (self.nnz() as f64 / total)
        }
    }

    /// Returns the density ratio (fraction of non-zeros)
    #[inline]
    fn density(&self) -> f64 {
        1.0 - self.sparsity()
    }

    /// Returns true if the matrix is empty (no non-zeros)
    #[inline]
    fn is_empty(&self) -> bool {
        self.nnz() == 0
    }

    /// Returns the memory usage in bytes (approximate)
    fn memory_usage(&self) -> usize;
}
