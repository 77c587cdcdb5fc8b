//! # sparsefn
//!
//! **In-place structural operations and reductions for CSR/CSC sparse matrices.**
//!
//! sparsefn mutates compressed sparse matrices in place (scaling rows or
//! columns, swapping rows or columns), computes per-axis statistics that count
//! the implicit zeros, and generates random sparse matrices whose columns
//! follow a given class distribution.
//!
//! ## Features
//!
//! - **Scaling**: multiply every row or column by its own factor
//! - **Swapping**: exchange two rows or columns, negative indices allowed
//! - **Reductions**: per-column mean/variance, per-axis min/max
//! - **Generation**: class-conditional random CSC matrices, seedable
//!
//! Every algorithm is written once against the major/minor view of the
//! compressed buffers; CSR and CSC only decide which matrix axis is which.
//!
//! ## Quick Start
//!
//! ```rust
//! use sparsefn::prelude::*;
//!
//! // [[1, 0, 2],
//! //  [0, 3, 0]]
//! let mut x = CsrData::from_slices(&[0, 2, 3], &[0, 2, 1], &[1.0f64, 2.0, 3.0], [2, 3])?;
//!
//! x.scale_columns(&[2.0, 1.0, 0.5])?;
//! x.swap_rows(0, -1)?;
//! assert_eq!(x.to_dense(), vec![0.0, 3.0, 0.0, 2.0, 0.0, 1.0]);
//! # Ok::<(), sparsefn::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Multi-threaded per-column reduction kernels

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dtype;
pub mod error;
pub mod random;
pub mod sparse;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, ErrorKind, Result};
    pub use crate::random::seeded_rng;
    pub use crate::sparse::{
        Axis, CompressedStorage, CooData, CscData, CsrData, IndexArg, SparseFormat, SparseStorage,
        SparseTensor, random_choice_csc,
    };
}
