//! Index arguments for the swap operations

use crate::error::{Error, Result};

/// An index argument as handed to a swap operation
///
/// Swaps take exactly one position per side. Integer arguments convert into
/// [`IndexArg::Scalar`]; slices and vectors convert into [`IndexArg::Sequence`],
/// which every swap rejects rather than broadcasting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexArg {
    /// A single, possibly negative, position
    Scalar(i64),
    /// Several positions; never accepted by a swap
    Sequence(Vec<i64>),
}

impl IndexArg {
    /// Reject sequences, returning the raw scalar
    pub(crate) fn scalar(&self, arg: &'static str) -> Result<i64> {
        match self {
            IndexArg::Scalar(i) => Ok(*i),
            IndexArg::Sequence(v) => Err(Error::NonScalarIndex { arg, len: v.len() }),
        }
    }
}

/// Wrap a negative index once by `size` and bounds-check the result.
pub(crate) fn wrap_index(index: i64, size: usize) -> Result<usize> {
    let wrapped = if index < 0 { index + size as i64 } else { index };
    if wrapped < 0 || wrapped as usize >= size {
        return Err(Error::IndexOutOfBounds {
            index: wrapped,
            size,
        });
    }
    Ok(wrapped as usize)
}

macro_rules! impl_scalar_index {
    (signed: $($ty:ty),*) => {
        $(
            impl From<$ty> for IndexArg {
                #[inline]
                fn from(i: $ty) -> Self {
                    IndexArg::Scalar(i as i64)
                }
            }
        )*
    };
    // Values above i64::MAX saturate so they fail the bounds check
    (unsigned: $($ty:ty),*) => {
        $(
            impl From<$ty> for IndexArg {
                #[inline]
                fn from(i: $ty) -> Self {
                    IndexArg::Scalar(i64::try_from(i).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

impl_scalar_index!(signed: i8, i16, i32, i64, isize);
impl_scalar_index!(unsigned: u8, u16, u32, u64, usize);

impl From<Vec<i64>> for IndexArg {
    fn from(v: Vec<i64>) -> Self {
        IndexArg::Sequence(v)
    }
}

impl From<&[i64]> for IndexArg {
    fn from(v: &[i64]) -> Self {
        IndexArg::Sequence(v.to_vec())
    }
}

impl<const N: usize> From<[i64; N]> for IndexArg {
    fn from(v: [i64; N]) -> Self {
        IndexArg::Sequence(v.to_vec())
    }
}
