//! Scaling primitives keyed to axis role
//!
//! Both kernels work on raw compressed buffers. Which matrix axis they scale
//! depends on the format: `scale_major` scales CSR rows and CSC columns,
//! `scale_minor` scales CSR columns and CSC rows.

use crate::dtype::Element;

/// Multiply every entry of major segment `i` by `scale[i]`
///
/// `major_ptrs.len()` must equal `scale.len() + 1`.
#[inline]
pub(crate) fn scale_major<T: Element>(major_ptrs: &[i64], values: &mut [T], scale: &[T]) {
    debug_assert_eq!(major_ptrs.len(), scale.len() + 1);
    for (bounds, &factor) in major_ptrs.windows(2).zip(scale) {
        let start = bounds[0] as usize;
        let end = bounds[1] as usize;
        for v in &mut values[start..end] {
            *v = *v * factor;
        }
    }
}

/// Multiply entry `k` by `scale[minor_indices[k]]`
///
/// Minor indices outside `[0, scale.len())` are clamped onto the nearest end of
/// `scale` instead of failing. Validated matrices never hit the clamp, but a
/// corrupted index buffer is scaled silently rather than reported.
#[inline]
pub(crate) fn scale_minor<T: Element>(minor_indices: &[i64], values: &mut [T], scale: &[T]) {
    let Some(last) = scale.len().checked_sub(1) else {
        return;
    };
    for (v, &idx) in values.iter_mut().zip(minor_indices) {
        let idx = idx.clamp(0, last as i64) as usize;
        *v = *v * scale[idx];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_major() {
        // [1, 0, 2]
        // [0, 3, 0]
        let ptrs = [0i64, 2, 3];
        let mut values = [1.0f64, 2.0, 3.0];
        scale_major(&ptrs, &mut values, &[10.0, -1.0]);
        assert_eq!(values, [10.0, 20.0, -3.0]);
    }

    #[test]
    fn test_scale_major_empty_segments() {
        let ptrs = [0i64, 0, 2, 2];
        let mut values = [4i64, 5];
        scale_major(&ptrs, &mut values, &[7, 3, 9]);
        assert_eq!(values, [12, 15]);
    }

    #[test]
    fn test_scale_minor() {
        let indices = [0i64, 2, 1];
        let mut values = [1.0f64, 2.0, 3.0];
        scale_minor(&indices, &mut values, &[2.0, 1.0, 0.5]);
        assert_eq!(values, [2.0, 1.0, 3.0]);
    }

    #[test]
    fn test_scale_minor_clamps_out_of_range_indices() {
        let indices = [-4i64, 1, 9];
        let mut values = [1.0f32, 1.0, 1.0];
        scale_minor(&indices, &mut values, &[2.0, 3.0, 5.0]);
        assert_eq!(values, [2.0, 3.0, 5.0]);
    }

    #[test]
    fn test_scale_minor_empty_scale_is_noop() {
        let mut values: [f64; 0] = [];
        scale_minor(&[], &mut values, &[]);
    }
}
