//! Buffer-level helpers shared by the storage formats: structural validation,
//! offset expansion and counting-sort compression.

use crate::dtype::Element;
use crate::error::{Error, Result};

/// Check the compressed invariants on raw buffers
///
/// `ptrs_name`/`indices_name` are used in error messages only
/// (`row_ptrs`/`col_indices` for CSR, `col_ptrs`/`row_indices` for CSC).
pub(crate) fn validate_compressed(
    ptrs: &[i64],
    indices: &[i64],
    nnz: usize,
    major_dim: usize,
    minor_dim: usize,
    ptrs_name: &str,
    indices_name: &str,
) -> Result<()> {
    if ptrs.len() != major_dim + 1 {
        return Err(Error::shape_mismatch(&[major_dim + 1], &[ptrs.len()]));
    }
    if indices.len() != nnz {
        return Err(Error::shape_mismatch(&[nnz], &[indices.len()]));
    }

    if ptrs[0] != 0 || ptrs[major_dim] != nnz as i64 {
        return Err(Error::invalid_structure(format!(
            "{ptrs_name}: expected [0]=0 and [{major_dim}]={nnz}, got [0]={} and [{major_dim}]={}",
            ptrs[0], ptrs[major_dim]
        )));
    }
    if let Some(pos) = ptrs.windows(2).position(|w| w[0] > w[1]) {
        return Err(Error::invalid_structure(format!(
            "{ptrs_name} decreases at position {}: {} > {}",
            pos,
            ptrs[pos],
            ptrs[pos + 1]
        )));
    }

    for &idx in indices {
        if idx < 0 {
            return Err(Error::invalid_structure(format!(
                "negative entry in {indices_name}: {idx}"
            )));
        }
        if idx as usize >= minor_dim {
            return Err(Error::IndexOutOfBounds {
                index: idx,
                size: minor_dim,
            });
        }
    }
    Ok(())
}

/// Expand offsets into one major index per stored entry
pub(crate) fn expand_ptrs(ptrs: &[i64]) -> Vec<i64> {
    let nnz = ptrs.last().copied().unwrap_or(0) as usize;
    let mut out = Vec::with_capacity(nnz);
    for (major, bounds) in ptrs.windows(2).enumerate() {
        let len = (bounds[1] - bounds[0]) as usize;
        out.extend(std::iter::repeat_n(major as i64, len));
    }
    out
}

/// Stable counting sort of triplets by `major`, producing compressed buffers
///
/// Entries keep their relative order within each major segment, so input that
/// is sorted by `(minor)` inside each `major` stays sorted.
pub(crate) fn compress<T: Element>(
    major: &[i64],
    minor: &[i64],
    values: &[T],
    major_dim: usize,
) -> (Vec<i64>, Vec<i64>, Vec<T>) {
    let nnz = values.len();

    let mut ptrs = vec![0i64; major_dim + 1];
    for &m in major {
        ptrs[m as usize + 1] += 1;
    }
    for i in 0..major_dim {
        ptrs[i + 1] += ptrs[i];
    }

    let mut next: Vec<usize> = ptrs[..major_dim].iter().map(|&p| p as usize).collect();
    let mut out_minor = vec![0i64; nnz];
    let mut out_values = vec![T::zero(); nnz];
    for ((&m, &idx), &v) in major.iter().zip(minor).zip(values) {
        let slot = &mut next[m as usize];
        out_minor[*slot] = idx;
        out_values[*slot] = v;
        *slot += 1;
    }

    (ptrs, out_minor, out_values)
}
