//! Springs connecting pairs of point masses.

use crate::float::Float;
use crate::point_mass::PointMass;

/// Role of a spring in the cloth network.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpringType {
    /// Direct horizontal/vertical neighbours.
    Structural,
    /// Diagonal neighbours; resists in-plane shear.
    Shearing,
    /// Neighbours two cells apart; resists folding.
    Bending,
}

impl SpringType {
    /// Stiffness multiplier relative to the configured spring constant.
    pub fn stiffness_scale<F: Float>(self) -> F {
        match self {
            SpringType::Structural | SpringType::Shearing => F::one(),
            SpringType::Bending => F::from_f32(0.2),
        }
    }
}

/// A spring between point masses `a` and `b`, stored as indices into the
/// point-mass store.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    pub a: usize,
    pub b: usize,
    rest_length: F,
    pub kind: SpringType,
}

impl<F: Float> Spring<F> {
    pub fn new(a: usize, b: usize, rest_length: F, kind: SpringType) -> Self {
        Spring { a, b, rest_length, kind }
    }

    /// Spring whose rest length is the current distance between its endpoints.
    pub fn from_points(a: usize, b: usize, points: &[PointMass<F>], kind: SpringType) -> Self {
        let rest_length = points[a].position.distance(points[b].position);
        Spring { a, b, rest_length, kind }
    }

    pub fn rest_length(&self) -> F { self.rest_length }

    pub fn current_length(&self, points: &[PointMass<F>]) -> F {
        points[self.a].position.distance(points[self.b].position)
    }

    /// Hooke force on the endpoints: `+f` on `a`, `-f` on `b`.
    ///
    /// Coincident endpoints have no defined direction and contribute nothing.
    pub fn apply_force(&self, points: &mut [PointMass<F>], stiffness: F) {
        let delta = points[self.b].position - points[self.a].position;
        let Some(direction) = delta.try_normalize() else {
            return;
        };
        let displacement = delta.length() - self.rest_length;
        let magnitude = stiffness * self.kind.stiffness_scale::<F>() * displacement;
        let force = direction * magnitude;
        points[self.a].apply_force(force);
        points[self.b].apply_force(-force);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec3;
    use alloc::vec;

    #[test]
    fn rest_length_from_initial_positions() {
        let points = vec![
            PointMass::new(Vec3::new(0.0f64, 0.0, 0.0), false),
            PointMass::new(Vec3::new(3.0, 4.0, 0.0), false),
        ];
        let spring = Spring::from_points(0, 1, &points, SpringType::Structural);
        assert!((spring.rest_length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn stretched_spring_pulls_endpoints_together() {
        let mut points = vec![
            PointMass::new(Vec3::new(0.0f64, 0.0, 0.0), false),
            PointMass::new(Vec3::new(2.0, 0.0, 0.0), false),
        ];
        let spring = Spring::new(0, 1, 1.0, SpringType::Structural);
        spring.apply_force(&mut points, 10.0);
        assert!((points[0].forces.x - 10.0).abs() < 1e-12);
        assert!((points[1].forces.x + 10.0).abs() < 1e-12);
        assert_eq!(points[0].forces.y, 0.0);
    }

    #[test]
    fn bending_spring_is_weaker() {
        let mut points = vec![
            PointMass::new(Vec3::new(0.0f64, 0.0, 0.0), false),
            PointMass::new(Vec3::new(0.0, 3.0, 0.0), false),
        ];
        let spring = Spring::new(0, 1, 2.0, SpringType::Bending);
        spring.apply_force(&mut points, 10.0);
        assert!((points[0].forces.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn coincident_endpoints_contribute_nothing() {
        let mut points = vec![
            PointMass::new(Vec3::new(1.0f64, 1.0, 1.0), false),
            PointMass::new(Vec3::new(1.0, 1.0, 1.0), false),
        ];
        let spring = Spring::new(0, 1, 1.0, SpringType::Shearing);
        spring.apply_force(&mut points, 100.0);
        assert_eq!(points[0].forces, Vec3::zero());
        assert_eq!(points[1].forces, Vec3::zero());
    }
}
