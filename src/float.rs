//! Floating-point abstraction so the simulation runs in `f32` or `f64`.

use core::cmp::PartialOrd;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Scalar operations the cloth solver needs.
///
/// Implemented for `f32` and `f64`. Transcendentals go through `libm` so the
/// crate stays `no_std`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
    + core::fmt::Display
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Half (0.5).
    fn half() -> Self;
    /// Two (2.0).
    fn two() -> Self;
    /// Pi (~3.14159).
    fn pi() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Sine.
    fn sin(self) -> Self;
    /// Cosine.
    fn cos(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Largest integer value not greater than `self`.
    fn floor(self) -> Self;
    /// Minimum of two values.
    fn min(self, other: Self) -> Self;
    /// Maximum of two values.
    fn max(self, other: Self) -> Self;
    /// False for NaN and the infinities.
    fn is_finite(self) -> bool;
    /// Convert from f32 (for constants and configuration).
    fn from_f32(v: f32) -> Self;
    /// Convert a count or index.
    fn from_usize(v: usize) -> Self;
    /// Truncating conversion to a cell coordinate. Saturates; NaN maps to 0.
    fn to_i64(self) -> i64;

    /// Clamp self to [min, max].
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Check if approximately zero within epsilon.
    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f32::consts::PI }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn sin(self) -> Self { libm::sinf(self) }
    fn cos(self) -> Self { libm::cosf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn floor(self) -> Self { libm::floorf(self) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn is_finite(self) -> bool { f32::is_finite(self) }
    fn from_f32(v: f32) -> Self { v }
    fn from_usize(v: usize) -> Self { v as f32 }
    fn to_i64(self) -> i64 { self as i64 }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f64::consts::PI }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn sin(self) -> Self { libm::sin(self) }
    fn cos(self) -> Self { libm::cos(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn floor(self) -> Self { libm::floor(self) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn is_finite(self) -> bool { f64::is_finite(self) }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn from_usize(v: usize) -> Self { v as f64 }
    fn to_i64(self) -> i64 { self as i64 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_i64_saturates_and_maps_nan_to_zero() {
        assert_eq!(f64::NAN.to_i64(), 0);
        assert_eq!(f64::INFINITY.to_i64(), i64::MAX);
        assert_eq!((-2.5f64).floor().to_i64(), -3);
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(1.5f32.clamp(0.0, 1.0), 1.0);
        assert_eq!((-0.5f32).clamp(0.0, 1.0), 0.0);
    }
}
