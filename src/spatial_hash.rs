//! Per-substep spatial hash for self-collision.
//!
//! Space is cut into axis-aligned boxes and every point mass is binned into
//! exactly one of them by the integer index of its box. Only the point's own
//! box is searched, so pairs straddling a box boundary can be missed; that is
//! the price of the linear-time pass.

use crate::float::Float;
use crate::point_mass::PointMass;
use crate::vec::Vec3;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;

/// Integer box coordinates.
pub type CellKey = (i64, i64, i64);

/// Dimensions of one hash box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellSize<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> CellSize<F> {
    /// Boxes three grid spacings wide; depth takes the larger of the two so
    /// boxes stay roughly cubic.
    pub fn for_cloth(width: F, height: F, points_x: usize, points_y: usize) -> Self {
        let three = F::from_f32(3.0);
        let x = three * width / F::from_usize(points_x.max(1));
        let y = three * height / F::from_usize(points_y.max(1));
        CellSize { x, y, z: x.max(y) }
    }

    pub fn key(&self, position: Vec3<F>) -> CellKey {
        (
            (position.x / self.x).floor().to_i64(),
            (position.y / self.y).floor().to_i64(),
            (position.z / self.z).floor().to_i64(),
        )
    }
}

/// Buckets of point-mass indices keyed by box.
///
/// Only obtainable from [`SpatialHash::build`], so every query runs against
/// positions from the current substep and the box size they were binned with.
#[derive(Debug)]
pub struct SpatialHash<F: Float> {
    cell: CellSize<F>,
    buckets: BTreeMap<CellKey, Vec<usize>>,
}

impl<F: Float> SpatialHash<F> {
    pub fn build(points: &[PointMass<F>], cell: CellSize<F>) -> Self {
        let mut buckets: BTreeMap<CellKey, Vec<usize>> = BTreeMap::new();
        for (i, pm) in points.iter().enumerate() {
            buckets.entry(cell.key(pm.position)).or_default().push(i);
        }
        SpatialHash { cell, buckets }
    }

    pub fn cell(&self) -> &CellSize<F> {
        &self.cell
    }

    pub fn cell_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn bucket(&self, key: &CellKey) -> &[usize] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Push point mass `index` away from bucket neighbours closer than
    /// `2 * thickness`.
    ///
    /// The push is averaged over the colliding neighbours and divided by
    /// `substeps`. Only `position` moves. Returns whether the point was moved.
    pub fn self_collide(
        &self,
        points: &mut [PointMass<F>],
        index: usize,
        thickness: F,
        substeps: usize,
    ) -> bool {
        let pm_pos = points[index].position;
        let reach = F::two() * thickness;
        let mut correction = Vec3::zero();
        let mut collisions = 0usize;

        for &other in self.bucket(&self.cell.key(pm_pos)) {
            if other == index {
                continue;
            }
            let away = pm_pos - points[other].position;
            let distance = away.length();
            if distance >= reach {
                continue;
            }
            // Coincident neighbours give no direction to push in.
            let Some(direction) = away.try_normalize() else {
                continue;
            };
            correction += direction * (reach - distance);
            collisions += 1;
        }

        if collisions == 0 {
            return false;
        }
        let scale = F::from_usize(collisions) * F::from_usize(substeps.max(1));
        points[index].position += correction / scale;
        true
    }
}
