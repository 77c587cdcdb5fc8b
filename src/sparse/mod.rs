//! Sparse matrix support for sparsefn
//!
//! This module provides the sparse storage formats, in-place structural
//! operations on the compressed formats, axis reductions and a random
//! generator for class-labelled sparse matrices.
//!
//! # Sparse Formats
//!
//! - **COO** (Coordinate): Stores (row, col, value) triplets. Construction and
//!   format conversion only; every in-place operation rejects it.
//!
//! - **CSR** (Compressed Sparse Row): rows are the *major* axis, partitioned
//!   by `row_ptrs`; columns are the *minor* axis, stored per entry.
//!
//! - **CSC** (Compressed Sparse Column): the same layout with the roles
//!   exchanged. A CSC matrix of shape `[r, c]` shares its buffers with the
//!   CSR matrix of shape `[c, r]` that is its transpose.
//!
//! # Usage
//!
//! ```
//! use sparsefn::sparse::{SparseFormat, SparseTensor};
//!
//! // [[1, 0],
//! //  [0, 2]]
//! let mut x = SparseTensor::from_dense(&[1.0f64, 0.0, 0.0, 2.0], [2, 2], SparseFormat::Csr)?;
//!
//! x.inplace_swap_row(0, 1)?;
//! assert_eq!(x.to_dense(), vec![0.0, 2.0, 1.0, 0.0]);
//!
//! let (mean, var) = x.mean_variance_axis0()?;
//! assert_eq!(mean, vec![0.5, 1.0]);
//! assert_eq!(var, vec![0.25, 1.0]);
//!
//! // COO is refused
//! let mut coo = x.to_coo();
//! assert!(coo.inplace_row_scale(&[1.0, 1.0]).is_err());
//! # Ok::<(), sparsefn::error::Error>(())
//! ```

mod coo;
mod csc;
mod csr;
mod format;
mod inplace;
pub mod kernels;
mod layout;
mod random_choice;
mod tensor;

pub use coo::CooData;
pub use csc::CscData;
pub use csr::CsrData;
pub use format::{Axis, AxisRole, CompressedFormat, SparseFormat, SparseStorage};
pub use inplace::{CompressedMut, CompressedRef, CompressedStorage, IndexArg};
pub use random_choice::random_choice_csc;
pub use tensor::SparseTensor;
