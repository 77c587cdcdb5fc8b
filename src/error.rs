//! Error types for sparsefn

use crate::sparse::SparseFormat;
use thiserror::Error;

/// Result type alias using sparsefn's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`]
///
/// Every failure in this crate is a contract violation by the caller, never an
/// environmental one, so the kinds mirror the classic type/value/index split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input has the wrong kind: an unsupported sparse format, or a
    /// sequence where a scalar index was required.
    Type,
    /// The input has the right kind but an unacceptable value: mismatched
    /// lengths, malformed buffers, probabilities outside `[0, 1]`.
    Value,
    /// An index lies outside the dimension it addresses.
    Index,
}

/// Errors that can occur in sparsefn operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The matrix is not stored in a compressed (CSR or CSC) format
    #[error("Expected a CSR or CSC sparse matrix, got {format} (in '{op}')")]
    UnsupportedFormat {
        /// The format that was encountered
        format: SparseFormat,
        /// The operation name
        op: &'static str,
    },

    /// A sequence was passed where a scalar index is required
    #[error("Argument '{arg}' must be a scalar integer, got a sequence of length {len}")]
    NonScalarIndex {
        /// The argument name
        arg: &'static str,
        /// Length of the offending sequence
        len: usize,
    },

    /// Shape mismatch in an operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Invalid axis for a 2-D matrix
    #[error("Invalid dimension {dim} for tensor with {ndim} dimensions")]
    InvalidDimension {
        /// The invalid dimension
        dim: isize,
        /// Number of dimensions
        ndim: usize,
    },

    /// Index out of bounds
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index, after negative wrap-around
        index: i64,
        /// Size of the dimension
        size: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Compressed buffers violate the format invariants
    #[error("Invalid sparse structure: {reason}")]
    InvalidStructure {
        /// Which invariant failed
        reason: String,
    },
}

impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedFormat { .. } | Error::NonScalarIndex { .. } => ErrorKind::Type,
            Error::ShapeMismatch { .. }
            | Error::InvalidDimension { .. }
            | Error::InvalidArgument { .. }
            | Error::InvalidStructure { .. } => ErrorKind::Value,
            Error::IndexOutOfBounds { .. } => ErrorKind::Index,
        }
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_structure(reason: impl Into<String>) -> Self {
        Self::InvalidStructure {
            reason: reason.into(),
        }
    }
}
