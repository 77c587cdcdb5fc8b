//! Random sparse matrices with a prescribed class distribution per column

use rand::Rng;

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::random::{sample_without_replacement, weighted_choice};

use super::CscData;

/// Generate a CSC matrix whose column `j` is drawn from `classes[j]`
///
/// Each column holds `n_samples` draws. Label `0` is stored implicitly: if
/// `classes[j]` lacks a `0` one is added with probability `0.0`, and the
/// number of stored entries is `n_samples * (1 - p0)` rounded half to even,
/// where `p0` is the probability of the first `0` label. Those entries land on rows drawn
/// without replacement; their labels are drawn with replacement from the
/// nonzero labels, weighted by their renormalized probabilities.
///
/// When `class_probability` is `None`, every label gets probability
/// `1 / n_samples`. This is not a uniform distribution over the labels unless
/// `n_samples` equals the number of labels.
///
/// The output has shape `[n_samples, classes.len()]` and is deterministic for
/// a seeded `rng`; columns consume the generator strictly in order.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `n_samples == 0`, a probability is outside
///   `[0, 1]` or not finite, or a column must store entries while its nonzero
///   labels all have probability `0`
/// - [`Error::ShapeMismatch`] if `class_probability` does not match `classes`
///   in length, overall or for any column
///
/// # Example
///
/// ```
/// use sparsefn::random::seeded_rng;
/// use sparsefn::sparse::{SparseStorage, random_choice_csc};
///
/// let mut rng = seeded_rng(0);
/// let classes = vec![vec![0, 1], vec![3]];
/// let probs = vec![vec![0.25, 0.75], vec![1.0]];
/// let x = random_choice_csc::<f64, _>(8, &classes, Some(probs.as_slice()), &mut rng)?;
/// assert_eq!(x.shape(), [8, 2]);
/// assert_eq!(x.col_nnz(0), 6);
/// assert_eq!(x.col_nnz(1), 8);
/// # Ok::<(), sparsefn::error::Error>(())
/// ```
pub fn random_choice_csc<T, R>(
    n_samples: usize,
    classes: &[Vec<i64>],
    class_probability: Option<&[Vec<f64>]>,
    rng: &mut R,
) -> Result<CscData<T>>
where
    T: Element,
    R: Rng + ?Sized,
{
    let columns = column_distributions(n_samples, classes, class_probability)?;

    let mut col_ptrs = Vec::with_capacity(columns.len() + 1);
    let mut row_indices = Vec::new();
    let mut values = Vec::new();
    col_ptrs.push(0i64);

    for (j, column) in columns.iter().enumerate() {
        let nnz = column.nnz(n_samples);
        if nnz > 0 {
            row_indices.extend(sample_without_replacement(n_samples, nnz, rng)?);
            let labels = weighted_choice(&column.labels, &column.weights, nnz, rng)?;
            values.extend(labels.into_iter().map(|l| T::from_f64(l as f64)));
        }
        col_ptrs.push(row_indices.len() as i64);
        tracing::trace!(column = j, nnz, "generated column");
    }

    tracing::debug!(
        n_samples,
        n_columns = columns.len(),
        nnz = values.len(),
        "generated random CSC matrix"
    );

    Ok(CscData {
        col_ptrs,
        row_indices,
        values,
        shape: [n_samples, classes.len()],
    })
}

/// One column's distribution, split into the implicit zero and the rest
struct ColumnDistribution {
    /// Probability of label `0` (the first one, if repeated)
    p_zero: f64,
    /// Nonzero labels in input order
    labels: Vec<i64>,
    /// Probabilities of `labels`, not renormalized
    weights: Vec<f64>,
}

impl ColumnDistribution {
    fn nnz(&self, n_samples: usize) -> usize {
        if self.labels.is_empty() {
            return 0;
        }
        let nnz = (n_samples as f64 * (1.0 - self.p_zero)).round_ties_even() as usize;
        nnz.min(n_samples)
    }
}

/// Validate every column up front so a failure never leaves a half-drawn rng
fn column_distributions(
    n_samples: usize,
    classes: &[Vec<i64>],
    class_probability: Option<&[Vec<f64>]>,
) -> Result<Vec<ColumnDistribution>> {
    if n_samples == 0 {
        return Err(Error::invalid_argument("n_samples", "must be positive"));
    }
    if let Some(probs) = class_probability {
        if probs.len() != classes.len() {
            return Err(Error::shape_mismatch(&[classes.len()], &[probs.len()]));
        }
    }

    let default_p = 1.0 / n_samples as f64;
    classes
        .iter()
        .enumerate()
        .map(|(j, labels)| {
            let probs = match class_probability {
                Some(probs) => {
                    let p = &probs[j];
                    if p.len() != labels.len() {
                        return Err(Error::shape_mismatch(&[labels.len()], &[p.len()]));
                    }
                    p.clone()
                }
                None => vec![default_p; labels.len()],
            };
            if let Some(&bad) = probs.iter().find(|p| !(0.0..=1.0).contains(*p)) {
                return Err(Error::invalid_argument(
                    "class_probability",
                    format!("column {j}: probability {bad} is outside [0, 1]"),
                ));
            }

            // Absent zero label behaves as a zero label with probability 0
            let p_zero = labels
                .iter()
                .position(|&l| l == 0)
                .map_or(0.0, |k| probs[k]);
            let (labels, weights): (Vec<i64>, Vec<f64>) = labels
                .iter()
                .zip(&probs)
                .filter(|&(&l, _)| l != 0)
                .map(|(&l, &p)| (l, p))
                .unzip();

            let column = ColumnDistribution {
                p_zero,
                labels,
                weights,
            };
            if column.nnz(n_samples) > 0 && column.weights.iter().sum::<f64>() <= 0.0 {
                return Err(Error::invalid_argument(
                    "class_probability",
                    format!("column {j}: nonzero labels have total probability 0"),
                ));
            }
            Ok(column)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::random::seeded_rng;
    use crate::sparse::SparseStorage;

    #[test]
    fn test_frequencies_match_distribution() {
        let n = 100_000;
        let classes = vec![vec![0, 1, 2]];
        let probs = vec![vec![0.5, 0.3, 0.2]];
        let x = random_choice_csc::<i64, _>(
            n,
            &classes,
            Some(probs.as_slice()),
            &mut seeded_rng(0),
        )
        .unwrap();

        assert_eq!(x.shape(), [n, 1]);
        assert_eq!(x.nnz(), 50_000);
        let ones = x.values().iter().filter(|&&v| v == 1).count() as f64 / n as f64;
        let twos = x.values().iter().filter(|&&v| v == 2).count() as f64 / n as f64;
        assert!((ones - 0.3).abs() < 0.01, "ones = {ones}");
        assert!((twos - 0.2).abs() < 0.01, "twos = {twos}");

        let mut rows = x.row_indices().to_vec();
        rows.sort_unstable();
        rows.dedup();
        assert_eq!(rows.len(), 50_000);
    }

    #[test]
    fn test_missing_zero_fills_column() {
        let classes = vec![vec![4, 9]];
        let probs = vec![vec![0.5, 0.5]];
        let x = random_choice_csc::<f64, _>(
            10,
            &classes,
            Some(probs.as_slice()),
            &mut seeded_rng(1),
        )
        .unwrap();
        assert_eq!(x.col_nnz(0), 10);
        assert!(x.values().iter().all(|&v| v == 4.0 || v == 9.0));
    }

    #[test]
    fn test_half_count_rounds_to_even() {
        let classes = vec![vec![0, 1]];
        let probs = vec![vec![0.5, 0.5]];
        for (n, nnz) in [(5, 2), (7, 4), (6, 3)] {
            let x = random_choice_csc::<i64, _>(
                n,
                &classes,
                Some(probs.as_slice()),
                &mut seeded_rng(3),
            )
            .unwrap();
            assert_eq!(x.col_nnz(0), nnz, "n_samples = {n}");
        }
    }

    #[test]
    fn test_only_zero_column_is_empty() {
        // A lone zero, no labels at all, and a zero label with probability 1
        let classes = vec![vec![0], vec![], vec![0, 5]];
        let probs = vec![vec![1.0], vec![], vec![1.0, 0.0]];
        let x = random_choice_csc::<f32, _>(
            6,
            &classes,
            Some(probs.as_slice()),
            &mut seeded_rng(2),
        )
        .unwrap();
        assert_eq!(x.shape(), [6, 3]);
        assert_eq!(x.col_ptrs(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_default_probability_per_sample() {
        // Four samples: label 0 gets 1/4, so three entries are stored
        let classes = vec![vec![0, 1, 2]];
        let x = random_choice_csc::<i32, _>(4, &classes, None, &mut seeded_rng(3)).unwrap();
        assert_eq!(x.nnz(), 3);
        assert!(x.values().iter().all(|&v| v == 1 || v == 2));
    }

    #[test]
    fn test_seed_determinism() {
        let classes = vec![vec![0, 1, 2], vec![1, 3]];
        let probs = vec![vec![0.2, 0.4, 0.4], vec![0.7, 0.3]];
        let a = random_choice_csc::<f64, _>(
            50,
            &classes,
            Some(probs.as_slice()),
            &mut seeded_rng(7),
        )
        .unwrap();
        let b = random_choice_csc::<f64, _>(
            50,
            &classes,
            Some(probs.as_slice()),
            &mut seeded_rng(7),
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_validation() {
        let mut rng = seeded_rng(0);
        let classes = vec![vec![0, 1]];

        let err = random_choice_csc::<f64, _>(0, &classes, None, &mut rng).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);

        let err = random_choice_csc::<f64, _>(5, &classes, Some(&[][..]), &mut rng).unwrap_err();
        assert_eq!(err, Error::shape_mismatch(&[1], &[0]));

        let err =
            random_choice_csc::<f64, _>(5, &classes, Some(&[vec![1.0]][..]), &mut rng).unwrap_err();
        assert_eq!(err, Error::shape_mismatch(&[2], &[1]));

        let err = random_choice_csc::<f64, _>(5, &classes, Some(&[vec![0.5, 1.5]][..]), &mut rng)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);

        let nan = [vec![f64::NAN, 0.5]];
        let err = random_choice_csc::<f64, _>(5, &classes, Some(&nan[..]), &mut rng).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);

        // p0 = 0.2 requires four entries but label 1 has probability 0
        let err = random_choice_csc::<f64, _>(5, &classes, Some(&[vec![0.2, 0.0]][..]), &mut rng)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }
}
