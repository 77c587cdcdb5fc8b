//! CSC (Compressed Sparse Column) format

mod conversion;
mod core;

pub use core::CscData;
