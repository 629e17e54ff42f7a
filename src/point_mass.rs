//! Point masses: the simulated particles of the cloth.

use crate::float::Float;
use crate::vec::Vec3;

/// A Verlet point mass. Velocity is implicit in `position - last_position`.
///
/// Mass is not stored per point; the stepper derives one shared mass from the
/// cloth's density and point count.
#[derive(Clone, Debug, PartialEq)]
pub struct PointMass<F: Float> {
    pub position: Vec3<F>,
    pub last_position: Vec3<F>,
    pub start_position: Vec3<F>,
    pub forces: Vec3<F>,
    pub pinned: bool,
}

impl<F: Float> PointMass<F> {
    pub fn new(position: Vec3<F>, pinned: bool) -> Self {
        PointMass {
            position,
            last_position: position,
            start_position: position,
            forces: Vec3::zero(),
            pinned,
        }
    }

    pub fn apply_force(&mut self, force: Vec3<F>) {
        self.forces += force;
    }

    /// Advance one Verlet step.
    ///
    /// `retention` is `1 - damping`. Pinned points are left untouched,
    /// including their force accumulator.
    pub fn integrate(&mut self, dt: F, retention: F, inv_mass: F) {
        if self.pinned {
            return;
        }
        let acceleration = self.forces * inv_mass;
        let new_position = self.position
            + (self.position - self.last_position) * retention
            + acceleration * (dt * dt);
        self.last_position = self.position;
        self.position = new_position;
        self.forces = Vec3::zero();
    }

    pub fn reset(&mut self) {
        self.position = self.start_position;
        self.last_position = self.start_position;
        self.forces = Vec3::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_fall_matches_kinematics() {
        let mut p: PointMass<f64> = PointMass::new(Vec3::new(0.0, 100.0, 0.0), false);
        let g = Vec3::new(0.0, -9.81, 0.0);
        let dt = 1.0 / 60.0;
        for _ in 0..60 {
            p.apply_force(g);
            p.integrate(dt, 1.0, 1.0);
        }
        let expected_y = 100.0 - 0.5 * 9.81 * 1.0;
        assert!((p.position.y - expected_y).abs() < 0.2, "y = {}", p.position.y);
    }

    #[test]
    fn pinned_point_ignores_forces() {
        let mut p: PointMass<f32> = PointMass::new(Vec3::new(5.0, 5.0, 5.0), true);
        p.apply_force(Vec3::new(1000.0, 1000.0, 0.0));
        p.integrate(1.0 / 60.0, 1.0, 1.0);
        assert_eq!(p.position, Vec3::new(5.0, 5.0, 5.0));
        assert_eq!(p.last_position, Vec3::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn integrate_clears_forces() {
        let mut p: PointMass<f32> = PointMass::new(Vec3::zero(), false);
        p.apply_force(Vec3::new(1.0, 0.0, 0.0));
        p.integrate(0.1, 1.0, 1.0);
        assert_eq!(p.forces, Vec3::zero());
        assert!(p.position.x > p.last_position.x);
    }

    #[test]
    fn reset_restores_start() {
        let mut p: PointMass<f32> = PointMass::new(Vec3::new(1.0, 2.0, 3.0), false);
        p.position = Vec3::new(9.0, 9.0, 9.0);
        p.last_position = Vec3::new(8.0, 8.0, 8.0);
        p.reset();
        assert_eq!(p.position, p.start_position);
        assert_eq!(p.last_position, p.start_position);
    }
}
