use super::{apply_friction, Collide};
use crate::error::ClothError;
use crate::float::Float;
use crate::point_mass::PointMass;
use crate::vec::Vec3;

/// Distance a corrected point is kept off the plane surface.
pub const SURFACE_OFFSET: f32 = 1e-4;

/// Infinite plane through `point` with unit `normal`.
///
/// Deserialization goes through [`Plane::new`], so a loaded normal is
/// normalized and a zero normal is rejected.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PlaneDef<F>"))]
pub struct Plane<F: Float> {
    point: Vec3<F>,
    normal: Vec3<F>,
    pub friction: F,
}

impl<F: Float> Plane<F> {
    /// The normal is normalized here; a zero normal is rejected.
    pub fn new(point: Vec3<F>, normal: Vec3<F>, friction: F) -> Result<Self, ClothError> {
        let normal = normal.try_normalize().ok_or(ClothError::DegenerateNormal)?;
        Ok(Plane { point, normal, friction })
    }

    pub fn point(&self) -> Vec3<F> { self.point }
    pub fn normal(&self) -> Vec3<F> { self.normal }

    pub fn signed_distance(&self, position: Vec3<F>) -> F {
        (position - self.point).dot(self.normal)
    }
}

/// Unchecked wire form of a [`Plane`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PlaneDef<F: Float> {
    point: Vec3<F>,
    normal: Vec3<F>,
    friction: F,
}

#[cfg(feature = "serde")]
impl<F: Float> TryFrom<PlaneDef<F>> for Plane<F> {
    type Error = ClothError;

    fn try_from(def: PlaneDef<F>) -> Result<Self, ClothError> {
        Plane::new(def.point, def.normal, def.friction)
    }
}

impl<F: Float> Collide<F> for Plane<F> {
    /// Fires when the path from `last_position` to `position` touches or
    /// crosses the plane.
    fn collide(&self, point: &mut PointMass<F>) {
        let dist = self.signed_distance(point.position);
        let last_dist = self.signed_distance(point.last_position);
        if dist * last_dist > F::zero() {
            return;
        }
        let on_plane = point.position - self.normal * dist;
        let offset = self.normal * F::from_f32(SURFACE_OFFSET);
        let target = if last_dist < F::zero() { on_plane - offset } else { on_plane + offset };
        apply_friction(point, target, self.friction);
    }
}
