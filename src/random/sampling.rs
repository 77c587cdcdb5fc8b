//! Uniform sampling without replacement and weighted categorical draws

use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};

/// Deterministic generator for a `random_state` seed
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draw `n_samples` distinct integers from `[0, n_population)`
///
/// The result is in draw order, not sorted. `rand` picks Floyd's algorithm,
/// rejection sampling or a partial shuffle depending on the ratio of
/// `n_samples` to `n_population`.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `n_samples > n_population`.
pub fn sample_without_replacement<R: Rng + ?Sized>(
    n_population: usize,
    n_samples: usize,
    rng: &mut R,
) -> Result<Vec<i64>> {
    if n_samples > n_population {
        return Err(Error::invalid_argument(
            "n_samples",
            format!("cannot draw {n_samples} distinct values from a population of {n_population}"),
        ));
    }
    Ok(rand::seq::index::sample(rng, n_population, n_samples)
        .into_iter()
        .map(|i| i as i64)
        .collect())
}

/// Draw `size` labels with replacement, label `k` with weight `weights[k]`
///
/// Weights need not be normalized.
///
/// # Errors
///
/// - [`Error::ShapeMismatch`] if `labels` and `weights` differ in length
/// - [`Error::InvalidArgument`] if the weights are empty, negative, non-finite
///   or all zero (only checked when `size > 0`)
pub fn weighted_choice<R: Rng + ?Sized>(
    labels: &[i64],
    weights: &[f64],
    size: usize,
    rng: &mut R,
) -> Result<Vec<i64>> {
    if labels.len() != weights.len() {
        return Err(Error::shape_mismatch(&[labels.len()], &[weights.len()]));
    }
    if size == 0 {
        return Ok(Vec::new());
    }

    let dist = WeightedIndex::new(weights)
        .map_err(|e| Error::invalid_argument("weights", e.to_string()))?;
    Ok((0..size).map(|_| labels[dist.sample(rng)]).collect())
}
