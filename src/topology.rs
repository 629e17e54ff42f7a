//! Construction of the point-mass store and spring network.

use crate::config::{ClothConfig, Layout, Orientation, Surface};
use crate::error::ClothError;
use crate::float::Float;
use crate::point_mass::PointMass;
use crate::spring::{Spring, SpringType};
use crate::vec::Vec3;
use alloc::vec::Vec;
use core::cmp::Ordering;

/// Nearest later samples each scattered point is linked to.
const SCATTERED_NEIGHBOURS: usize = 4;

/// Point masses plus the springs connecting them, by index.
#[derive(Clone, Debug, PartialEq)]
pub struct Topology<F: Float> {
    pub points: Vec<PointMass<F>>,
    pub springs: Vec<Spring<F>>,
}

impl<F: Float> Topology<F> {
    /// Build the topology described by `config`.
    ///
    /// The configuration is validated first, so no spring is created for a
    /// grid too small to have the neighbours it references.
    pub fn build(config: &ClothConfig<F>) -> Result<Self, ClothError> {
        config.validate()?;
        let topology = match config.layout {
            Layout::Grid(surface) => Self::grid(config, surface),
            Layout::Scattered => Self::scattered(config),
        };
        log::debug!(
            "built {:?} topology: {} point masses, {} springs, {} pinned",
            config.layout,
            topology.points.len(),
            topology.springs.len(),
            topology.points.iter().filter(|p| p.pinned).count(),
        );
        Ok(topology)
    }

    /// Regular grid; point `(col, row)` has index `row * points_x + col`.
    ///
    /// For every point, in row-major order:
    /// - Structural: right and below neighbours
    /// - Shearing: below-right and below-left neighbours
    /// - Bending: two to the right and two below
    fn grid(config: &ClothConfig<F>, surface: Surface) -> Self {
        let nx = config.points_x;
        let ny = config.points_y;
        let mut points = Vec::with_capacity(nx * ny);

        for row in 0..ny {
            for col in 0..nx {
                let position = grid_position(config, surface, col, row);
                points.push(PointMass::new(position, config.is_pinned(col, row)));
            }
        }

        let mut springs = Vec::new();
        for row in 0..ny {
            for col in 0..nx {
                let i = row * nx + col;
                let mut link = |j: usize, kind: SpringType| {
                    springs.push(Spring::from_points(i, j, &points, kind));
                };

                if col + 1 < nx {
                    link(i + 1, SpringType::Structural);
                }
                if row + 1 < ny {
                    link(i + nx, SpringType::Structural);
                }
                if col + 1 < nx && row + 1 < ny {
                    link(i + nx + 1, SpringType::Shearing);
                }
                if col > 0 && row + 1 < ny {
                    link(i + nx - 1, SpringType::Shearing);
                }
                if col + 2 < nx {
                    link(i + 2, SpringType::Bending);
                }
                if row + 2 < ny {
                    link(i + 2 * nx, SpringType::Bending);
                }
            }
        }

        Topology { points, springs }
    }

    /// Golden-angle samples on a sphere, each joined to its nearest later
    /// samples. Ties in distance go to the earlier sample.
    fn scattered(config: &ClothConfig<F>) -> Self {
        let n = config.point_count();
        let radius = config.width.min(config.height) * F::half();
        let center = Vec3::new(config.width * F::half(), config.height * F::half(), F::zero());
        let golden_angle = F::pi() * (F::from_f32(3.0) - F::from_f32(5.0).sqrt());
        let count = F::from_usize(n);

        let mut points = Vec::with_capacity(n);
        for i in 0..n {
            let y = F::one() - F::two() * (F::from_usize(i) + F::half()) / count;
            let ring = (F::one() - y * y).max(F::zero()).sqrt();
            let theta = golden_angle * F::from_usize(i);
            let offset = Vec3::new(theta.cos() * ring, y, theta.sin() * ring);
            let pinned = config.is_pinned(i % config.points_x, i / config.points_x);
            points.push(PointMass::new(center + offset * radius, pinned));
        }

        let mut springs = Vec::with_capacity(n * SCATTERED_NEIGHBOURS);
        for i in 0..n {
            for j in nearest_later(&points, i, SCATTERED_NEIGHBOURS) {
                springs.push(Spring::from_points(i, j, &points, SpringType::Structural));
            }
        }

        Topology { points, springs }
    }
}

/// Indices of the `k` samples after `i` closest to it, nearest first.
/// Equal distances keep sequence order.
fn nearest_later<F: Float>(points: &[PointMass<F>], i: usize, k: usize) -> Vec<usize> {
    let mut candidates: Vec<(F, usize)> = (i + 1..points.len())
        .map(|j| (points[i].position.distance(points[j].position), j))
        .collect();
    candidates.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    candidates.into_iter().take(k).map(|(_, j)| j).collect()
}

fn grid_position<F: Float>(config: &ClothConfig<F>, surface: Surface, col: usize, row: usize) -> Vec3<F> {
    let u = F::from_usize(col) / F::from_usize(config.points_x - 1);
    let v = F::from_usize(row) / F::from_usize(config.points_y - 1);

    match surface {
        Surface::Lattice(Orientation::Horizontal) => {
            Vec3::new(u * config.width, F::one(), v * config.height)
        }
        Surface::Lattice(Orientation::Vertical) => {
            Vec3::new(u * config.width, v * config.height, F::zero())
        }
        Surface::Sphere => {
            let radius = config.width.min(config.height) * F::half();
            let theta = u * F::two() * F::pi();
            let phi = v * F::pi();
            Vec3::new(
                radius * theta.cos() * phi.sin() + config.width * F::half(),
                radius * theta.sin() * phi.sin() + config.height * F::half(),
                radius * phi.cos(),
            )
        }
    }
}

/// Two counter-clockwise triangles per grid quad, as point-mass indices.
///
/// For the quad with top-left corner `A`, right `B`, below `C` and diagonal
/// `D`, emits `(A, C, B)` and `(B, C, D)`.
pub fn grid_triangles(points_x: usize, points_y: usize) -> Vec<[usize; 3]> {
    let mut triangles = Vec::with_capacity(2 * points_x.saturating_sub(1) * points_y.saturating_sub(1));
    for row in 0..points_y.saturating_sub(1) {
        for col in 0..points_x.saturating_sub(1) {
            let a = row * points_x + col;
            let b = a + 1;
            let c = a + points_x;
            let d = c + 1;
            triangles.push([a, c, b]);
            triangles.push([b, c, d]);
        }
    }
    triangles
}
