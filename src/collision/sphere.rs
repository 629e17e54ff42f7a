use super::{apply_friction, Collide};
use crate::float::Float;
use crate::point_mass::PointMass;
use crate::vec::Vec3;

/// Solid sphere; point masses inside are pushed out radially.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere<F: Float> {
    pub origin: Vec3<F>,
    pub radius: F,
    pub friction: F,
}

impl<F: Float> Sphere<F> {
    pub fn new(origin: Vec3<F>, radius: F, friction: F) -> Self {
        Sphere { origin, radius, friction }
    }
}

impl<F: Float> Collide<F> for Sphere<F> {
    fn collide(&self, point: &mut PointMass<F>) {
        let offset = point.position - self.origin;
        if offset.length() >= self.radius {
            return;
        }
        // A point exactly at the origin has no outward direction.
        let Some(direction) = offset.try_normalize() else {
            return;
        };
        let target = self.origin + direction * self.radius;
        apply_friction(point, target, self.friction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_point_projected_to_surface() {
        let sphere = Sphere::new(Vec3::new(0.0f64, 0.0, 0.0), 1.0, 0.0);
        let mut pm = PointMass::new(Vec3::new(0.0, 0.5, 0.0), false);
        sphere.collide(&mut pm);
        assert!((pm.position.length() - 1.0).abs() < 1e-12);
        assert!((pm.position.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn friction_keeps_part_of_last_position() {
        let sphere = Sphere::new(Vec3::new(0.0f64, 0.0, 0.0), 1.0, 0.25);
        let mut pm = PointMass::new(Vec3::new(0.0, 2.0, 0.0), false);
        pm.position = Vec3::new(0.0, 0.5, 0.0);
        sphere.collide(&mut pm);
        // last + 0.75 * (target - last) = 2 + 0.75 * (1 - 2)
        assert!((pm.position.y - 1.25).abs() < 1e-12);
    }

    #[test]
    fn outside_point_untouched() {
        let sphere = Sphere::new(Vec3::new(0.0f64, 0.0, 0.0), 1.0, 0.0);
        let mut pm = PointMass::new(Vec3::new(0.0, 1.5, 0.0), false);
        sphere.collide(&mut pm);
        assert_eq!(pm.position, Vec3::new(0.0, 1.5, 0.0));
    }

    #[test]
    fn point_at_origin_untouched() {
        let sphere = Sphere::new(Vec3::new(1.0f64, 1.0, 1.0), 1.0, 0.0);
        let mut pm = PointMass::new(Vec3::new(1.0, 1.0, 1.0), false);
        sphere.collide(&mut pm);
        assert_eq!(pm.position, Vec3::new(1.0, 1.0, 1.0));
    }
}
