//! 3D vector type used for positions, forces and accelerations.

use crate::float::Float;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Below this length a direction is considered undefined.
const NORMALIZE_EPSILON: f32 = 1e-10;

/// 3D vector over a generic float.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Create a new 3D vector.
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }

    /// Zero vector.
    pub fn zero() -> Self { Vec3::new(F::zero(), F::zero(), F::zero()) }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared length.
    pub fn length_sq(self) -> F { self.dot(self) }

    /// Euclidean length.
    pub fn length(self) -> F { self.length_sq().sqrt() }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F { (self - other).length() }

    /// Unit vector in the same direction, or `None` if the length is near zero.
    pub fn try_normalize(self) -> Option<Self> {
        let len = self.length();
        if len.is_near_zero(F::from_f32(NORMALIZE_EPSILON)) || !len.is_finite() {
            None
        } else {
            Some(self / len)
        }
    }

    /// Unit vector, or zero when the direction is undefined.
    pub fn normalize_or_zero(self) -> Self {
        self.try_normalize().unwrap_or_else(Self::zero)
    }

    /// True when no component is NaN or infinite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> AddAssign for Vec3<F> {
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> SubAssign for Vec3<F> {
    fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec3 { x: -self.x, y: -self.y, z: -self.z } }
}

impl<F: Float> Mul<F> for Vec3<F> {
    type Output = Self;
    fn mul(self, s: F) -> Self { Vec3 { x: self.x * s, y: self.y * s, z: self.z * s } }
}

impl<F: Float> Div<F> for Vec3<F> {
    type Output = Self;
    fn div(self, s: F) -> Self { Vec3 { x: self.x / s, y: self.y / s, z: self.z / s } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_length_of_difference() {
        let a = Vec3::new(1.0f64, 2.0, 2.0);
        assert_eq!(a.length_sq(), 9.0);
        assert_eq!(a.length(), 3.0);
        assert_eq!(Vec3::zero().distance(a), 3.0);
        assert_eq!(a.dot(Vec3::new(1.0, 0.0, -1.0)), -1.0);
        assert!(!Vec3::new(f64::NAN, 0.0, 0.0).is_finite());
    }

    #[test]
    fn normalize_zero_vector() {
        let v = Vec3::<f64>::zero();
        assert_eq!(v.try_normalize(), None);
        assert_eq!(v.normalize_or_zero(), Vec3::zero());
    }

    #[test]
    fn normalize_has_unit_length() {
        let n = Vec3::new(3.0f64, 0.0, 4.0).normalize_or_zero();
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert!((n.x - 0.6).abs() < 1e-12);
    }

    #[test]
    fn distance_calculation() {
        let a = Vec3::new(0.0f32, 0.0, 0.0);
        let b = Vec3::new(3.0f32, 4.0, 0.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }
}
