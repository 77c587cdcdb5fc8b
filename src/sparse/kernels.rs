//! CPU reduction kernels over compressed buffers
//!
//! These kernels implicitly account for every position that is not stored: an
//! absent entry is a zero for the mean, the variance and the min/max. Entries
//! repeating a minor index inside a segment are summed first, matching
//! `to_dense`.
//!
//! With the `rayon` feature, per-segment reductions (CSC mean/variance, major
//! axis min/max) run across segments in parallel.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::dtype::Element;
use crate::error::{Error, Result};

use super::format::{Axis, AxisRole};
use super::inplace::{CompressedRef, CompressedStorage};
use super::{CscData, CsrData, SparseStorage};

/// Mean and population variance of each column of a CSR matrix
///
/// Both vectors have length `ncols`. Implicit zeros are included, so the
/// divisor is always `nrows`.
pub fn csr_mean_variance_axis0<T: Element>(x: &CsrData<T>) -> Result<(Vec<f64>, Vec<f64>)> {
    let n = reduced_len(x.nrows(), "X")?;
    Ok(with_canonical(x.compressed(), |view| mean_variance_minor(view, n)))
}

/// Mean and population variance of each column of a CSC matrix
pub fn csc_mean_variance_axis0<T: Element>(x: &CscData<T>) -> Result<(Vec<f64>, Vec<f64>)> {
    let n = reduced_len(x.nrows(), "X")?;
    Ok(with_canonical(x.compressed(), |view| mean_variance_major(view, n)))
}

/// Minimum and maximum along `axis` of a CSR or CSC matrix
///
/// `Axis::Rows` reduces across rows and yields one pair per column;
/// `Axis::Columns` yields one pair per row.
pub fn min_max_axis<T, S>(x: &S, axis: Axis) -> Result<(Vec<T>, Vec<T>)>
where
    T: Element,
    S: CompressedStorage<T>,
{
    let n = reduced_len(axis.extent(x.shape()), "X")?;
    let role = S::FORMAT.role_of(axis.other());
    Ok(with_canonical(x.compressed(), |view| match role {
        AxisRole::Major => min_max_major(view, n),
        AxisRole::Minor => min_max_minor(view, n),
    }))
}

fn reduced_len(n: usize, arg: &'static str) -> Result<usize> {
    if n == 0 {
        return Err(Error::invalid_argument(
            arg,
            "cannot reduce across an axis of length 0",
        ));
    }
    Ok(n)
}

/// Owned compressed buffers with at most one entry per position
struct Canonical<T> {
    ptrs: Vec<i64>,
    indices: Vec<i64>,
    values: Vec<T>,
}

/// Run `f` on `view`, or on a merged copy when some segment repeats an index
fn with_canonical<T, R, F>(view: CompressedRef<'_, T>, f: F) -> R
where
    T: Element,
    F: FnOnce(CompressedRef<'_, T>) -> R,
{
    match sum_duplicates(view) {
        Some(merged) => f(CompressedRef {
            major_ptrs: &merged.ptrs,
            minor_indices: &merged.indices,
            values: &merged.values,
            major_dim: view.major_dim,
            minor_dim: view.minor_dim,
        }),
        None => f(view),
    }
}

/// Sum the values of entries sharing a minor index within one segment
///
/// Returns `None` when every segment is already duplicate-free. Merged
/// entries keep the position of their first occurrence.
fn sum_duplicates<T: Element>(view: CompressedRef<'_, T>) -> Option<Canonical<T>> {
    // Last segment that touched each minor position
    let mut seen = vec![usize::MAX; view.minor_dim];
    let mut found = false;
    'scan: for major in 0..view.major_dim {
        let start = view.major_ptrs[major] as usize;
        let end = view.major_ptrs[major + 1] as usize;
        for &idx in &view.minor_indices[start..end] {
            if seen[idx as usize] == major {
                found = true;
                break 'scan;
            }
            seen[idx as usize] = major;
        }
    }
    if !found {
        return None;
    }

    seen.fill(usize::MAX);
    let mut slot = vec![0usize; view.minor_dim];
    let mut ptrs = Vec::with_capacity(view.major_dim + 1);
    let mut indices = Vec::with_capacity(view.values.len());
    let mut values: Vec<T> = Vec::with_capacity(view.values.len());
    ptrs.push(0);
    for major in 0..view.major_dim {
        let start = view.major_ptrs[major] as usize;
        let end = view.major_ptrs[major + 1] as usize;
        for (&idx, &v) in view.minor_indices[start..end]
            .iter()
            .zip(&view.values[start..end])
        {
            let i = idx as usize;
            if seen[i] == major {
                values[slot[i]] = values[slot[i]] + v;
            } else {
                seen[i] = major;
                slot[i] = values.len();
                indices.push(idx);
                values.push(v);
            }
        }
        ptrs.push(values.len() as i64);
    }

    Some(Canonical {
        ptrs,
        indices,
        values,
    })
}

/// Mean/variance of one stored segment padded with `n - len` zeros
fn segment_mean_variance<T: Element>(values: &[T], n: usize) -> (f64, f64) {
    let nf = n as f64;
    let mean = values.iter().map(|v| v.to_f64()).sum::<f64>() / nf;
    let stored: f64 = values
        .iter()
        .map(|v| {
            let d = v.to_f64() - mean;
            d * d
        })
        .sum();
    let implicit = (n - values.len()) as f64 * mean * mean;
    (mean, (stored + implicit) / nf)
}

fn mean_variance_major<T: Element>(view: CompressedRef<'_, T>, n: usize) -> (Vec<f64>, Vec<f64>) {
    let segment = |major: usize| {
        let start = view.major_ptrs[major] as usize;
        let end = view.major_ptrs[major + 1] as usize;
        segment_mean_variance(&view.values[start..end], n)
    };

    #[cfg(feature = "rayon")]
    let pairs: Vec<(f64, f64)> = (0..view.major_dim).into_par_iter().map(segment).collect();
    #[cfg(not(feature = "rayon"))]
    let pairs: Vec<(f64, f64)> = (0..view.major_dim).map(segment).collect();

    pairs.into_iter().unzip()
}

fn mean_variance_minor<T: Element>(view: CompressedRef<'_, T>, n: usize) -> (Vec<f64>, Vec<f64>) {
    let nf = n as f64;
    let mut sums = vec![0.0f64; view.minor_dim];
    let mut counts = vec![0usize; view.minor_dim];
    for (&idx, v) in view.minor_indices.iter().zip(view.values) {
        sums[idx as usize] += v.to_f64();
        counts[idx as usize] += 1;
    }
    let means: Vec<f64> = sums.iter().map(|s| s / nf).collect();

    let mut sq = vec![0.0f64; view.minor_dim];
    for (&idx, v) in view.minor_indices.iter().zip(view.values) {
        let d = v.to_f64() - means[idx as usize];
        sq[idx as usize] += d * d;
    }
    let variances = sq
        .iter()
        .zip(&means)
        .zip(&counts)
        .map(|((s, m), &c)| (s + (n - c) as f64 * m * m) / nf)
        .collect();

    (means, variances)
}

/// Fold a stored segment into `(min, max)`, adding an implicit zero when the
/// segment does not cover all `n` positions
fn segment_min_max<T: Element>(values: &[T], n: usize) -> (T, T) {
    let mut iter = values.iter().copied();
    let first = if values.len() < n {
        T::zero()
    } else {
        // n > 0 and len >= n, so there is at least one value
        iter.next().unwrap_or_else(T::zero)
    };
    iter.fold((first, first), |(lo, hi), v| {
        (if v < lo { v } else { lo }, if v > hi { v } else { hi })
    })
}

fn min_max_major<T: Element>(view: CompressedRef<'_, T>, n: usize) -> (Vec<T>, Vec<T>) {
    let segment = |major: usize| {
        let start = view.major_ptrs[major] as usize;
        let end = view.major_ptrs[major + 1] as usize;
        segment_min_max(&view.values[start..end], n)
    };

    #[cfg(feature = "rayon")]
    let pairs: Vec<(T, T)> = (0..view.major_dim).into_par_iter().map(segment).collect();
    #[cfg(not(feature = "rayon"))]
    let pairs: Vec<(T, T)> = (0..view.major_dim).map(segment).collect();

    pairs.into_iter().unzip()
}

fn min_max_minor<T: Element>(view: CompressedRef<'_, T>, n: usize) -> (Vec<T>, Vec<T>) {
    let mut acc: Vec<Option<(T, T)>> = vec![None; view.minor_dim];
    let mut counts = vec![0usize; view.minor_dim];
    for (&idx, &v) in view.minor_indices.iter().zip(view.values) {
        let slot = &mut acc[idx as usize];
        *slot = Some(match *slot {
            None => (v, v),
            Some((lo, hi)) => (if v < lo { v } else { lo }, if v > hi { v } else { hi }),
        });
        counts[idx as usize] += 1;
    }

    acc.into_iter()
        .zip(counts)
        .map(|(slot, count)| {
            let (lo, hi) = slot.unwrap_or((T::zero(), T::zero()));
            if count < n {
                let zero = T::zero();
                (if zero < lo { zero } else { lo }, if zero > hi { zero } else { hi })
            } else {
                (lo, hi)
            }
        })
        .unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dense() -> Vec<f64> {
        // [ 1, 0, -2]
        // [ 3, 0,  4]
        // [ 5, 6, -1]
        // [ 7, 0,  2]
        vec![1.0, 0.0, -2.0, 3.0, 0.0, 4.0, 5.0, 6.0, -1.0, 7.0, 0.0, 2.0]
    }

    fn reference_mean_var(d: &[f64], nrows: usize, ncols: usize) -> (Vec<f64>, Vec<f64>) {
        let mut means = vec![0.0; ncols];
        let mut vars = vec![0.0; ncols];
        for c in 0..ncols {
            let col: Vec<f64> = (0..nrows).map(|r| d[r * ncols + c]).collect();
            let m = col.iter().sum::<f64>() / nrows as f64;
            means[c] = m;
            vars[c] = col.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / nrows as f64;
        }
        (means, vars)
    }

    fn assert_close(a: &[f64], b: &[f64]) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert!((x - y).abs() < 1e-12, "{x} vs {y}");
        }
    }

    #[test]
    fn test_mean_variance_csr_and_csc_agree_with_dense() {
        let csr = CsrData::from_dense(&dense(), [4, 3]).unwrap();
        let csc = CscData::from_dense(&dense(), [4, 3]).unwrap();
        let (em, ev) = reference_mean_var(&dense(), 4, 3);

        let (m, v) = csr_mean_variance_axis0(&csr).unwrap();
        assert_close(&m, &em);
        assert_close(&v, &ev);

        let (m, v) = csc_mean_variance_axis0(&csc).unwrap();
        assert_close(&m, &em);
        assert_close(&v, &ev);
    }

    #[test]
    fn test_mean_variance_zero_rows() {
        let csr = CsrData::<f64>::empty([0, 3]);
        assert!(csr_mean_variance_axis0(&csr).is_err());
    }

    #[test]
    fn test_min_max_axis0_includes_implicit_zeros() {
        let csr = CsrData::from_dense(&dense(), [4, 3]).unwrap();
        let csc = csr.to_csc();

        for (mins, maxs) in [
            min_max_axis(&csr, Axis::Rows).unwrap(),
            min_max_axis(&csc, Axis::Rows).unwrap(),
        ] {
            // Column 1 only stores 6, the three implicit zeros pull its min to 0
            assert_eq!(mins, vec![1.0, 0.0, -2.0]);
            assert_eq!(maxs, vec![7.0, 6.0, 4.0]);
        }
    }

    #[test]
    fn test_min_max_axis1() {
        let csr = CsrData::from_dense(&dense(), [4, 3]).unwrap();
        let csc = csr.to_csc();

        for (mins, maxs) in [
            min_max_axis(&csr, Axis::Columns).unwrap(),
            min_max_axis(&csc, Axis::Columns).unwrap(),
        ] {
            assert_eq!(mins, vec![-2.0, 0.0, -1.0, 0.0]);
            assert_eq!(maxs, vec![1.0, 4.0, 6.0, 7.0]);
        }
    }

    #[test]
    fn test_min_max_all_negative_dense_column() {
        let csc = CscData::from_dense(&[-3i64, -1], [2, 1]).unwrap();
        let (mins, maxs) = min_max_axis(&csc, Axis::Rows).unwrap();
        assert_eq!(mins, vec![-3]);
        assert_eq!(maxs, vec![-1]);
    }

    #[test]
    fn test_sum_duplicates_only_when_repeated() {
        let csr = CsrData::from_dense(&dense(), [4, 3]).unwrap();
        assert!(sum_duplicates(csr.compressed()).is_none());

        // Row 0 stores column 1 twice, row 1 stores column 0 twice
        let csr =
            CsrData::from_slices(&[0, 3, 5], &[1, 0, 1, 0, 0], &[1.0, 2.0, 3.0, 4.0, 5.0], [2, 2])
                .unwrap();
        let merged = sum_duplicates(csr.compressed()).unwrap();
        assert_eq!(merged.ptrs, vec![0, 2, 3]);
        assert_eq!(merged.indices, vec![1, 0, 0]);
        assert_eq!(merged.values, vec![4.0, 2.0, 9.0]);
    }

    #[test]
    fn test_duplicate_entry_keeps_implicit_zero() {
        // Column 0 stores row 0 twice: dense [[3], [0]]
        let csr = CsrData::from_slices(&[0, 2, 2], &[0, 0], &[1.0, 2.0], [2, 1]).unwrap();
        let csc = CscData::from_slices(&[0, 2], &[0, 0], &[1.0, 2.0], [2, 1]).unwrap();

        for (mins, maxs) in [
            min_max_axis(&csr, Axis::Rows).unwrap(),
            min_max_axis(&csc, Axis::Rows).unwrap(),
        ] {
            assert_eq!(mins, vec![0.0]);
            assert_eq!(maxs, vec![3.0]);
        }
        assert_eq!(
            min_max_axis(&csr, Axis::Columns).unwrap(),
            (vec![3.0, 0.0], vec![3.0, 0.0])
        );

        for (m, v) in [
            csr_mean_variance_axis0(&csr).unwrap(),
            csc_mean_variance_axis0(&csc).unwrap(),
        ] {
            assert_close(&m, &[1.5]);
            assert_close(&v, &[2.25]);
        }
    }

    #[test]
    fn test_min_max_empty_axis() {
        let csr = CsrData::<f32>::empty([3, 0]);
        assert!(min_max_axis(&csr, Axis::Columns).is_err());
        let (mins, maxs) = min_max_axis(&csr, Axis::Rows).unwrap();
        assert!(mins.is_empty() && maxs.is_empty());
    }
}
