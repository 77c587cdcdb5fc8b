//! Element trait for mapping Rust types to DType

use super::DType;
use bytemuck::{Pod, Zeroable};
use std::fmt::Debug;
use std::ops::{Add, Mul};

/// Trait for types that can be stored as sparse matrix values
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Pod + Zeroable` - Plain-old-data, safe to move between buffers byte-wise
/// - `Add + Mul` - Summing duplicates and scaling (Output = Self)
/// - `PartialOrd` - Comparison for min/max reductions
pub trait Element:
    Copy
    + Clone
    + Debug
    + Send
    + Sync
    + Pod
    + Zeroable
    + 'static
    + Add<Output = Self>
    + Mul<Output = Self>
    + PartialOrd
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Convert to f64 for mean/variance accumulation
    fn to_f64(self) -> f64;

    /// Convert from f64 to this type (truncating for integers)
    fn from_f64(v: f64) -> Self;

    /// Zero value
    fn zero() -> Self;
}

macro_rules! impl_element {
    ($ty:ty, $dtype:expr, $zero:expr) => {
        impl Element for $ty {
            const DTYPE: DType = $dtype;

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $ty
            }

            #[inline]
            fn zero() -> Self {
                $zero
            }
        }
    };
}

impl_element!(f64, DType::F64, 0.0);
impl_element!(f32, DType::F32, 0.0);
impl_element!(i64, DType::I64, 0);
impl_element!(i32, DType::I32, 0);
