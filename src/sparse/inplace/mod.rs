//! In-place scale and swap operations over compressed storage
//!
//! Every algorithm here is written once against [`CompressedMut`], a view that
//! only knows about a *major* axis (partitioned by the offsets buffer) and a
//! *minor* axis (recorded per stored entry). CSR and CSC differ only in which
//! matrix axis plays which role, see [`CompressedFormat::role_of`].
//!
//! | Operation | CSR | CSC |
//! |-----------|-----|-----|
//! | scale rows | major | minor |
//! | scale columns | minor (clamping) | major |
//! | swap rows | segment splice | index rewrite |
//! | swap columns | index rewrite | segment splice |
//!
//! All preconditions are checked before the first write; an operation that
//! returns an error has not touched the matrix.

mod index;
mod scale;
mod swap;

pub use index::IndexArg;

use crate::dtype::Element;
use crate::error::{Error, Result};

use super::format::{Axis, AxisRole, CompressedFormat, SparseStorage};
use index::wrap_index;

/// Shared, format-agnostic view of the three compressed buffers
#[derive(Debug, Clone, Copy)]
pub struct CompressedRef<'a, T: Element> {
    /// Offsets partitioning the major axis (length `major_dim + 1`)
    pub major_ptrs: &'a [i64],
    /// Minor-axis position of each stored entry
    pub minor_indices: &'a [i64],
    /// Stored values
    pub values: &'a [T],
    /// Extent of the major axis
    pub major_dim: usize,
    /// Extent of the minor axis
    pub minor_dim: usize,
}

impl<T: Element> CompressedRef<'_, T> {
    /// Extent of the axis playing `role`
    #[inline]
    pub fn dim(&self, role: AxisRole) -> usize {
        match role {
            AxisRole::Major => self.major_dim,
            AxisRole::Minor => self.minor_dim,
        }
    }
}

/// Mutable, format-agnostic view of the three compressed buffers
///
/// For a CSC matrix of shape `[r, c]` this is exactly the view of the CSR
/// matrix of shape `[c, r]` that shares its buffers.
pub struct CompressedMut<'a, T: Element> {
    pub(crate) major_ptrs: &'a mut Vec<i64>,
    pub(crate) minor_indices: &'a mut Vec<i64>,
    pub(crate) values: &'a mut Vec<T>,
    pub(crate) major_dim: usize,
    pub(crate) minor_dim: usize,
}

impl<T: Element> CompressedMut<'_, T> {
    /// Extent of the axis playing `role`
    #[inline]
    pub fn dim(&self, role: AxisRole) -> usize {
        match role {
            AxisRole::Major => self.major_dim,
            AxisRole::Minor => self.minor_dim,
        }
    }

    /// Scale the positions of the `role` axis by `scale`
    pub fn scale(&mut self, role: AxisRole, scale: &[T]) -> Result<()> {
        let dim = self.dim(role);
        if scale.len() != dim {
            return Err(Error::shape_mismatch(&[dim], &[scale.len()]));
        }
        match role {
            AxisRole::Major => scale::scale_major(self.major_ptrs, self.values, scale),
            AxisRole::Minor => scale::scale_minor(self.minor_indices, self.values, scale),
        }
        Ok(())
    }

    /// Exchange positions `m` and `n` of the `role` axis
    ///
    /// Negative indices count from the end of the axis.
    pub fn swap(&mut self, role: AxisRole, m: IndexArg, n: IndexArg) -> Result<()> {
        let m = m.scalar("m")?;
        let n = n.scalar("n")?;
        let dim = self.dim(role);
        let m = wrap_index(m, dim)?;
        let n = wrap_index(n, dim)?;
        match role {
            AxisRole::Major => {
                swap::swap_major(self.major_ptrs, self.minor_indices, self.values, m, n)
            }
            AxisRole::Minor => swap::swap_minor(self.minor_indices, m, n),
        }
        Ok(())
    }
}

/// Storage laid out as offsets + minor indices + values
///
/// Implemented by [`CsrData`](super::CsrData) and [`CscData`](super::CscData).
/// The provided methods resolve a matrix axis to its role for `FORMAT` and run
/// the matching primitive, so neither format carries its own copy of the
/// algorithms.
pub trait CompressedStorage<T: Element>: SparseStorage {
    /// Which compressed layout this is
    const FORMAT: CompressedFormat;

    /// Borrow the buffers as a read-only, format-agnostic view
    fn compressed(&self) -> CompressedRef<'_, T>;

    /// Borrow the buffers as a mutable, format-agnostic view
    fn compressed_mut(&mut self) -> CompressedMut<'_, T>;

    /// Scale every stored entry by the factor of its position along `axis`
    fn scale_axis(&mut self, axis: Axis, scale: &[T]) -> Result<()> {
        self.compressed_mut().scale(Self::FORMAT.role_of(axis), scale)
    }

    /// Exchange two positions along `axis`
    fn swap_axis(
        &mut self,
        axis: Axis,
        m: impl Into<IndexArg>,
        n: impl Into<IndexArg>,
    ) -> Result<()> {
        self.compressed_mut()
            .swap(Self::FORMAT.role_of(axis), m.into(), n.into())
    }

    /// Multiply column `j` by `scale[j]`
    ///
    /// On CSR input the factor is looked up through each entry's stored column
    /// index, clamped into `[0, ncols)`; see [`CompressedMut::scale`].
    fn scale_columns(&mut self, scale: &[T]) -> Result<()> {
        self.scale_axis(Axis::Columns, scale)
    }

    /// Multiply row `i` by `scale[i]`
    ///
    /// On CSC input the factor is looked up through each entry's stored row
    /// index, clamped into `[0, nrows)`.
    fn scale_rows(&mut self, scale: &[T]) -> Result<()> {
        self.scale_axis(Axis::Rows, scale)
    }

    /// Exchange rows `m` and `n`
    fn swap_rows(&mut self, m: impl Into<IndexArg>, n: impl Into<IndexArg>) -> Result<()> {
        self.swap_axis(Axis::Rows, m, n)
    }

    /// Exchange columns `m` and `n`
    fn swap_columns(&mut self, m: impl Into<IndexArg>, n: impl Into<IndexArg>) -> Result<()> {
        self.swap_axis(Axis::Columns, m, n)
    }
}
