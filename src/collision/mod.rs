//! Collision response against rigid primitives.
//!
//! A primitive only ever moves `position`. `last_position` is read but left
//! alone, so a correction shows up as a velocity change on the next substep.

mod plane;
mod sphere;

pub use plane::{Plane, SURFACE_OFFSET};
pub use sphere::Sphere;

use crate::float::Float;
use crate::point_mass::PointMass;
use crate::vec::Vec3;
use alloc::boxed::Box;

/// Capability shared by everything a point mass can collide with.
///
/// Implement this for custom primitives; the built-in ones are collected in
/// [`CollisionObject`].
pub trait Collide<F: Float> {
    fn collide(&self, point: &mut PointMass<F>);
}

impl<F: Float, C: Collide<F> + ?Sized> Collide<F> for &C {
    fn collide(&self, point: &mut PointMass<F>) {
        (**self).collide(point)
    }
}

impl<F: Float, C: Collide<F> + ?Sized> Collide<F> for Box<C> {
    fn collide(&self, point: &mut PointMass<F>) {
        (**self).collide(point)
    }
}

/// Closed set of built-in collision primitives.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollisionObject<F: Float> {
    Plane(Plane<F>),
    Sphere(Sphere<F>),
}

impl<F: Float> Collide<F> for CollisionObject<F> {
    fn collide(&self, point: &mut PointMass<F>) {
        match self {
            CollisionObject::Plane(p) => p.collide(point),
            CollisionObject::Sphere(s) => s.collide(point),
        }
    }
}

impl<F: Float> From<Plane<F>> for CollisionObject<F> {
    fn from(plane: Plane<F>) -> Self {
        CollisionObject::Plane(plane)
    }
}

impl<F: Float> From<Sphere<F>> for CollisionObject<F> {
    fn from(sphere: Sphere<F>) -> Self {
        CollisionObject::Sphere(sphere)
    }
}

/// Move `point` `(1 - friction)` of the way from its last position to `target`.
fn apply_friction<F: Float>(point: &mut PointMass<F>, target: Vec3<F>, friction: F) {
    let correction = target - point.last_position;
    point.position = point.last_position + correction * (F::one() - friction);
}
