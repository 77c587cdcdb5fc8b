//! Swap primitives keyed to axis role
//!
//! Exchanging two positions of the minor axis only relabels stored indices.
//! Exchanging two positions of the major axis moves whole segments, so the
//! offsets are patched and the index/value buffers rebuilt.

use crate::dtype::Element;

/// Relabel minor index `m` as `n` and `n` as `m` in a single pass
///
/// Each entry is tested once, so a freshly written `n` is never matched again
/// as `m`. No buffer is reordered.
#[inline]
pub(crate) fn swap_minor(minor_indices: &mut [i64], m: usize, n: usize) {
    if m == n {
        return;
    }
    let (m, n) = (m as i64, n as i64);
    for idx in minor_indices.iter_mut() {
        if *idx == m {
            *idx = n;
        } else if *idx == n {
            *idx = m;
        }
    }
}

/// Exchange major segments `m` and `n`
///
/// The index and value buffers are replaced by freshly built ones; the old
/// allocations are dropped on return, so slices borrowed before the call
/// cannot observe the result.
pub(crate) fn swap_major<T: Element>(
    major_ptrs: &mut [i64],
    minor_indices: &mut Vec<i64>,
    values: &mut Vec<T>,
    m: usize,
    n: usize,
) {
    if m == n {
        return;
    }
    let (m, n) = if m > n { (n, m) } else { (m, n) };

    let m_start = major_ptrs[m] as usize;
    let m_stop = major_ptrs[m + 1] as usize;
    let n_start = major_ptrs[n] as usize;
    let n_stop = major_ptrs[n + 1] as usize;
    let nz_m = m_stop - m_start;
    let nz_n = n_stop - n_start;

    if nz_m != nz_n {
        let delta = nz_n as i64 - nz_m as i64;
        for ptr in major_ptrs.iter_mut().take(n).skip(m + 2) {
            *ptr += delta;
        }
        major_ptrs[m + 1] = (m_start + nz_n) as i64;
        major_ptrs[n] = (n_stop - nz_m) as i64;
    }

    let segments = Segments {
        m_start,
        m_stop,
        n_start,
        n_stop,
    };
    *minor_indices = segments.splice(minor_indices);
    *values = segments.splice(values);

    tracing::debug!(m, n, nz_m, nz_n, "rebuilt compressed buffers for major swap");
}

/// Bounds of the two segments being exchanged, `m` before `n`
struct Segments {
    m_start: usize,
    m_stop: usize,
    n_start: usize,
    n_stop: usize,
}

impl Segments {
    /// before m | n | between | m | after n
    fn splice<U: Copy>(&self, buf: &[U]) -> Vec<U> {
        let mut out = Vec::with_capacity(buf.len());
        out.extend_from_slice(&buf[..self.m_start]);
        out.extend_from_slice(&buf[self.n_start..self.n_stop]);
        out.extend_from_slice(&buf[self.m_stop..self.n_start]);
        out.extend_from_slice(&buf[self.m_start..self.m_stop]);
        out.extend_from_slice(&buf[self.n_stop..]);
        out
    }
}
