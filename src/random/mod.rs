//! Random sampling primitives
//!
//! Thin, validated wrappers over `rand` used by the sparse generators. All
//! functions take the generator by `&mut` so a single seeded stream can be
//! threaded through a whole computation.

mod sampling;

pub use sampling::{sample_without_replacement, seeded_rng, weighted_choice};
