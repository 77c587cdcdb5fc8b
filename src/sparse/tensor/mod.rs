//! Sparse tensor wrapper

mod conversion;
mod core;
mod ops;

pub use core::SparseTensor;
