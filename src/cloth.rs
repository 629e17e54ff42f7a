//! The cloth: point masses, springs, and the substep that advances them.

use crate::collision::Collide;
use crate::config::{ClothConfig, ClothParameters, InflationCenter, Layout};
use crate::constraint::StrainLimit;
use crate::error::ClothError;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::point_mass::PointMass;
use crate::spatial_hash::{CellSize, SpatialHash};
use crate::spring::{Spring, SpringType};
use crate::topology::{grid_triangles, Topology};
use crate::vec::Vec3;
use alloc::vec::Vec;

/// Floor on the squared distance in the inverse-square inflation force.
const MIN_INFLATION_DISTANCE_SQ: f32 = 1e-4;

/// A mass-spring cloth advanced with Verlet integration.
///
/// Each call to [`Cloth::advance`] runs one substep, in this order:
/// 1. reset and accumulate forces (external, springs, inflation)
/// 2. Verlet-advance every non-pinned point mass
/// 3. rebuild the spatial hash and resolve self-collisions
/// 4. resolve collisions with each primitive
/// 5. strain-limit every spring
///
/// Steps 3 through 5 move `position` without touching `last_position`, so
/// their corrections carry into the next substep as velocity.
#[derive(Clone, Debug)]
pub struct Cloth<F: Float> {
    points: Vec<PointMass<F>>,
    springs: Vec<Spring<F>>,
    width: F,
    height: F,
    points_x: usize,
    points_y: usize,
    thickness: F,
    cell: CellSize<F>,
    strain: StrainLimit<F>,
    /// Set only when the points form a regular `points_x * points_y` grid.
    grid: bool,
    /// Inflation added on top of the configured strength so far.
    inflation_growth: F,
}

impl<F: Float> Cloth<F> {
    /// Build a cloth from its configuration.
    pub fn build(config: &ClothConfig<F>) -> Result<Self, ClothError> {
        let Topology { points, springs } = Topology::build(config)?;
        Ok(Self::assemble(config, points, springs, matches!(config.layout, Layout::Grid(_))))
    }

    /// Assemble a cloth from hand-built point masses and springs.
    ///
    /// `config` supplies the extent, resolution and thickness; its pins and
    /// layout are ignored since the points carry their own pin flags.
    pub fn from_parts(
        config: &ClothConfig<F>,
        points: Vec<PointMass<F>>,
        springs: Vec<Spring<F>>,
    ) -> Result<Self, ClothError> {
        if points.is_empty() {
            return Err(ClothError::EmptyPointStore);
        }
        if !(config.width.is_finite() && config.height.is_finite())
            || config.width <= F::zero()
            || config.height <= F::zero()
        {
            return Err(ClothError::InvalidExtent);
        }
        if !config.thickness.is_finite() || config.thickness < F::zero() {
            return Err(ClothError::InvalidThickness);
        }
        let count = points.len();
        if let Some(index) = springs.iter().flat_map(|s| [s.a, s.b]).find(|&i| i >= count) {
            return Err(ClothError::SpringOutOfBounds { index, count });
        }
        Ok(Self::assemble(config, points, springs, false))
    }

    fn assemble(config: &ClothConfig<F>, points: Vec<PointMass<F>>, springs: Vec<Spring<F>>, grid: bool) -> Self {
        Cloth {
            points,
            springs,
            width: config.width,
            height: config.height,
            points_x: config.points_x.max(1),
            points_y: config.points_y.max(1),
            thickness: config.thickness,
            cell: CellSize::for_cloth(config.width, config.height, config.points_x, config.points_y),
            strain: StrainLimit::provot(),
            grid,
            inflation_growth: F::zero(),
        }
    }

    /// Mass of every point mass: total mass spread evenly over the points.
    pub fn mass(&self, params: &ClothParameters<F>) -> F {
        self.width * self.height * params.density / F::from_usize(self.points.len())
    }

    /// Current inflation level: configured strength plus growth so far.
    pub fn inflation_level(&self, params: &ClothParameters<F>) -> F {
        params.inflation.strength + self.inflation_growth
    }

    /// Reset every force accumulator, then add external, spring and
    /// inflation forces.
    ///
    /// External forces skip pinned points. Springs whose kind is disabled
    /// contribute nothing.
    pub fn accumulate_forces(&mut self, params: &ClothParameters<F>, accelerations: &[Vec3<F>]) {
        let mass = self.mass(params);
        let mut external = Vec3::zero();
        for &a in accelerations {
            external += a * mass;
        }

        for pm in self.points.iter_mut() {
            pm.forces = if pm.pinned { Vec3::zero() } else { external };
        }

        let kinds = params.spring_kinds;
        for spring in &self.springs {
            let enabled = match spring.kind {
                SpringType::Structural => kinds.structural,
                SpringType::Shearing => kinds.shearing,
                SpringType::Bending => kinds.bending,
            };
            if enabled {
                spring.apply_force(&mut self.points, params.stiffness);
            }
        }

        if params.inflation.is_active() {
            self.apply_inflation(params);
        }
    }

    fn apply_inflation(&mut self, params: &ClothParameters<F>) {
        let center = match params.inflation.center {
            InflationCenter::Fixed(c) => c,
            InflationCenter::Centroid => self.centroid(),
        };
        let level = self.inflation_level(params);
        let min_dist_sq = F::from_f32(MIN_INFLATION_DISTANCE_SQ);

        for pm in self.points.iter_mut().filter(|p| !p.pinned) {
            let away = pm.position - center;
            let Some(direction) = away.try_normalize() else {
                continue;
            };
            pm.apply_force(direction * (level / away.length_sq().max(min_dist_sq)));
        }
    }

    /// Advance one substep of `1 / frames_per_sec / substeps` seconds.
    pub fn advance<C: Collide<F>>(
        &mut self,
        frames_per_sec: F,
        substeps: usize,
        params: &ClothParameters<F>,
        accelerations: &[Vec3<F>],
        collision_objects: &[C],
    ) {
        self.advance_with_observer(
            frames_per_sec,
            substeps,
            params,
            accelerations,
            collision_objects,
            &mut NoOpStepObserver,
        );
    }

    /// Run a whole frame: `substeps` substeps back to back.
    pub fn advance_frame<C: Collide<F>>(
        &mut self,
        frames_per_sec: F,
        substeps: usize,
        params: &ClothParameters<F>,
        accelerations: &[Vec3<F>],
        collision_objects: &[C],
    ) {
        for _ in 0..substeps {
            self.advance(frames_per_sec, substeps, params, accelerations, collision_objects);
        }
    }

    /// [`Cloth::advance`] with a hook called after every pass.
    ///
    /// A non-positive frame rate or zero substeps leaves the cloth untouched.
    pub fn advance_with_observer<C: Collide<F>, O: StepObserver>(
        &mut self,
        frames_per_sec: F,
        substeps: usize,
        params: &ClothParameters<F>,
        accelerations: &[Vec3<F>],
        collision_objects: &[C],
        observer: &mut O,
    ) {
        if substeps == 0 || !frames_per_sec.is_finite() || frames_per_sec <= F::zero() {
            log::warn!(
                "skipping substep: frames_per_sec = {}, substeps = {}",
                frames_per_sec,
                substeps
            );
            return;
        }
        let dt = F::one() / frames_per_sec / F::from_usize(substeps);

        self.accumulate_forces(params, accelerations);
        observer.on_forces();

        let mass = self.mass(params);
        let inv_mass = if mass.is_near_zero(F::from_f32(1e-12)) { F::zero() } else { F::one() / mass };
        let retention = params.velocity_retention();
        for pm in self.points.iter_mut() {
            pm.integrate(dt, retention, inv_mass);
        }
        observer.on_integrate();

        let mut pushed = 0;
        if params.self_collision {
            let hash = SpatialHash::build(&self.points, self.cell);
            for i in 0..self.points.len() {
                if self.points[i].pinned {
                    continue;
                }
                if hash.self_collide(&mut self.points, i, self.thickness, substeps) {
                    pushed += 1;
                }
            }
        }
        observer.on_self_collision(pushed);

        for pm in self.points.iter_mut().filter(|p| !p.pinned) {
            for object in collision_objects {
                object.collide(pm);
            }
        }
        observer.on_collisions();

        let mut shortened = 0;
        if params.strain_limit {
            shortened = self.strain.apply(&self.springs, &mut self.points);
        }
        observer.on_strain_limit(shortened);

        self.inflation_growth = self.inflation_growth + params.inflation.growth;

        log::trace!(
            "substep dt = {}: {} self-collisions, {} springs strain-limited",
            dt,
            pushed,
            shortened
        );
        observer.on_step_complete();
    }

    /// Put every point mass back at its start position with zero velocity.
    ///
    /// Springs and pin flags are kept; accumulated inflation is cleared.
    pub fn reset(&mut self) {
        for pm in self.points.iter_mut() {
            pm.reset();
        }
        self.inflation_growth = F::zero();
        log::debug!("cloth reset: {} point masses", self.points.len());
    }

    pub fn point_masses(&self) -> &[PointMass<F>] { &self.points }
    pub fn springs(&self) -> &[Spring<F>] { &self.springs }

    /// Mutable access for hosts that drag or pin points interactively.
    ///
    /// Moving `position` and `last_position` together teleports a point with
    /// no velocity; moving only `position` gives it one. Toggling `pinned`
    /// takes effect on the next substep. `start_position` is only read by
    /// [`Cloth::reset`], and spring rest lengths do not follow it.
    pub fn point_masses_mut(&mut self) -> &mut [PointMass<F>] { &mut self.points }

    pub fn positions(&self) -> Vec<Vec3<F>> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Index of grid point `(col, row)`.
    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.points_x + col
    }

    pub fn point_mass(&self, col: usize, row: usize) -> &PointMass<F> {
        &self.points[self.index(col, row)]
    }

    pub fn points_x(&self) -> usize { self.points_x }
    pub fn points_y(&self) -> usize { self.points_y }
    pub fn thickness(&self) -> F { self.thickness }
    pub fn point_count(&self) -> usize { self.points.len() }
    pub fn spring_count(&self) -> usize { self.springs.len() }

    /// Triangles for rendering, regenerated on each call. Empty unless the
    /// cloth was built as a regular grid.
    pub fn triangles(&self) -> Vec<[usize; 3]> {
        if self.grid {
            grid_triangles(self.points_x, self.points_y)
        } else {
            Vec::new()
        }
    }

    /// Mean position of all point masses.
    pub fn centroid(&self) -> Vec3<F> {
        let mut sum = Vec3::zero();
        for pm in &self.points {
            sum += pm.position;
        }
        sum / F::from_usize(self.points.len().max(1))
    }

    /// Fraction of springs longer than `ratio` times their rest length.
    pub fn overstretched_fraction(&self, ratio: F) -> F {
        if self.springs.is_empty() {
            return F::zero();
        }
        let over = self
            .springs
            .iter()
            .filter(|s| s.current_length(&self.points) > s.rest_length() * ratio)
            .count();
        F::from_usize(over) / F::from_usize(self.springs.len())
    }
}
