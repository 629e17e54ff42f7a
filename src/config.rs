//! Configuration for building and stepping a cloth.

use crate::error::ClothError;
use crate::float::Float;
use crate::vec::Vec3;
use alloc::vec::Vec;

/// Plane a flat lattice is laid out in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Lying flat at `y = 1`, spanning x and z.
    Horizontal,
    /// Hanging in the `z = 0` plane, spanning x and y.
    #[default]
    Vertical,
}

/// Parametrized surface the regular grid is sampled from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Surface {
    Lattice(Orientation),
    /// `(col, row)` maps to `(theta, phi)` on a sphere of radius
    /// `min(width, height) / 2`.
    Sphere,
}

/// How point masses are generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layout {
    /// `points_x * points_y` grid with structural, shearing and bending springs.
    Grid(Surface),
    /// `points_x * points_y` golden-angle samples on a sphere, each linked to
    /// its four nearest later samples.
    Scattered,
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Grid(Surface::Lattice(Orientation::default()))
    }
}

/// Construction parameters for a cloth.
///
/// # Builder Pattern
/// ```
/// use weft::config::{ClothConfig, Layout, Surface, Orientation};
///
/// let config: ClothConfig<f64> = ClothConfig::new(1.0, 1.0, 16, 16)
///     .with_thickness(0.01)
///     .with_pins(vec![(0, 0), (15, 0)])
///     .with_layout(Layout::Grid(Surface::Lattice(Orientation::Vertical)));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClothConfig<F: Float> {
    pub width: F,
    pub height: F,
    pub points_x: usize,
    pub points_y: usize,
    /// Collision radius of each point mass for self-collision.
    pub thickness: F,
    /// Pinned grid coordinates as `(col, row)`.
    pub pins: Vec<(usize, usize)>,
    pub layout: Layout,
}

impl<F: Float> ClothConfig<F> {
    pub fn new(width: F, height: F, points_x: usize, points_y: usize) -> Self {
        ClothConfig {
            width,
            height,
            points_x,
            points_y,
            thickness: F::from_f32(0.01),
            pins: Vec::new(),
            layout: Layout::default(),
        }
    }

    pub fn with_thickness(mut self, thickness: F) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_pins(mut self, pins: Vec<(usize, usize)>) -> Self {
        self.pins = pins;
        self
    }

    pub fn with_pin(mut self, col: usize, row: usize) -> Self {
        self.pins.push((col, row));
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn point_count(&self) -> usize {
        self.points_x * self.points_y
    }

    /// Reject configurations that would produce a corrupt topology.
    pub fn validate(&self) -> Result<(), ClothError> {
        if self.points_x < 2 || self.points_y < 2 {
            return Err(ClothError::InvalidGridDimensions {
                points_x: self.points_x,
                points_y: self.points_y,
            });
        }
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= F::zero()
            || self.height <= F::zero()
        {
            return Err(ClothError::InvalidExtent);
        }
        if !self.thickness.is_finite() || self.thickness < F::zero() {
            return Err(ClothError::InvalidThickness);
        }
        if let Some(&(col, row)) = self
            .pins
            .iter()
            .find(|&&(col, row)| col >= self.points_x || row >= self.points_y)
        {
            return Err(ClothError::PinOutOfRange { col, row });
        }
        Ok(())
    }

    pub(crate) fn is_pinned(&self, col: usize, row: usize) -> bool {
        self.pins.iter().any(|&(c, r)| c == col && r == row)
    }
}

/// Which spring kinds contribute forces.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringKinds {
    pub structural: bool,
    pub shearing: bool,
    pub bending: bool,
}

impl SpringKinds {
    pub const ALL: SpringKinds = SpringKinds { structural: true, shearing: true, bending: true };
    pub const NONE: SpringKinds = SpringKinds { structural: false, shearing: false, bending: false };
}

impl Default for SpringKinds {
    fn default() -> Self {
        Self::ALL
    }
}

/// Point the inflation force pushes away from.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InflationCenter<F: Float> {
    Fixed(Vec3<F>),
    /// Mean position of all point masses, recomputed every substep.
    Centroid,
}

/// Pressure-like body force pushing point masses away from a center.
///
/// The applied level starts at `strength` and grows by `growth` every
/// substep; the running level lives on the cloth, not here.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inflation<F: Float> {
    pub strength: F,
    pub growth: F,
    pub center: InflationCenter<F>,
}

impl<F: Float> Inflation<F> {
    pub fn new(strength: F, center: InflationCenter<F>) -> Self {
        Inflation { strength, growth: F::zero(), center }
    }

    pub fn with_growth(mut self, growth: F) -> Self {
        self.growth = growth;
        self
    }

    pub fn is_active(&self) -> bool {
        self.strength != F::zero() || self.growth != F::zero()
    }
}

impl<F: Float> Default for Inflation<F> {
    fn default() -> Self {
        Inflation::new(F::zero(), InflationCenter::Centroid)
    }
}

/// Per-step simulation parameters.
///
/// # Builder Pattern
/// ```
/// use weft::config::ClothParameters;
///
/// let params: ClothParameters<f64> = ClothParameters::new()
///     .with_density(15.0)
///     .with_stiffness(5000.0)
///     .with_damping_percent(0.2);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClothParameters<F: Float> {
    /// Mass per unit area. Default: 15.
    pub density: F,
    /// Spring constant. Default: 5000.
    pub stiffness: F,
    /// Fraction of velocity removed per substep, in [0, 1). Default: 0.002.
    pub damping: F,
    pub spring_kinds: SpringKinds,
    pub inflation: Inflation<F>,
    /// Default: true.
    pub self_collision: bool,
    /// Default: true.
    pub strain_limit: bool,
}

impl<F: Float> ClothParameters<F> {
    pub fn new() -> Self {
        ClothParameters {
            density: F::from_f32(15.0),
            stiffness: F::from_f32(5000.0),
            damping: F::from_f32(0.002),
            spring_kinds: SpringKinds::ALL,
            inflation: Inflation::default(),
            self_collision: true,
            strain_limit: true,
        }
    }

    pub fn with_density(mut self, density: F) -> Self {
        self.density = density;
        self
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Set damping as a fraction. Values outside [0, 1) are clamped.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = normalize_damping(damping);
        self
    }

    /// Set damping as a percentage, e.g. `0.2` for 0.2%.
    pub fn with_damping_percent(self, percent: F) -> Self {
        self.with_damping(percent / F::from_f32(100.0))
    }

    pub fn with_spring_kinds(mut self, kinds: SpringKinds) -> Self {
        self.spring_kinds = kinds;
        self
    }

    pub fn with_inflation(mut self, inflation: Inflation<F>) -> Self {
        self.inflation = inflation;
        self
    }

    pub fn with_self_collision(mut self, enabled: bool) -> Self {
        self.self_collision = enabled;
        self
    }

    pub fn with_strain_limit(mut self, enabled: bool) -> Self {
        self.strain_limit = enabled;
        self
    }

    /// `1 - damping`, with damping kept inside [0, 1).
    pub(crate) fn velocity_retention(&self) -> F {
        F::one() - normalize_damping(self.damping)
    }
}

impl<F: Float> Default for ClothParameters<F> {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_damping<F: Float>(damping: F) -> F {
    let max = F::one() - F::from_f32(1e-6);
    if !damping.is_finite() {
        log::warn!("non-finite damping {}, using 0", damping);
        return F::zero();
    }
    let clamped = damping.clamp(F::zero(), max);
    if clamped != damping {
        log::warn!("damping {} outside [0, 1), clamped to {}", damping, clamped);
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn damping_percent_is_normalized() {
        let params: ClothParameters<f64> = ClothParameters::new().with_damping_percent(0.2);
        assert!((params.damping - 0.002).abs() < 1e-12);
        assert!((params.velocity_retention() - 0.998).abs() < 1e-12);
    }

    #[test]
    fn damping_is_clamped_below_one() {
        let params: ClothParameters<f64> = ClothParameters::new().with_damping(5.0);
        assert!(params.damping < 1.0);
        let params: ClothParameters<f64> = ClothParameters::new().with_damping(-1.0);
        assert_eq!(params.damping, 0.0);
    }

    #[test]
    fn degenerate_grid_rejected() {
        let config: ClothConfig<f64> = ClothConfig::new(1.0, 1.0, 1, 5);
        assert_eq!(
            config.validate(),
            Err(ClothError::InvalidGridDimensions { points_x: 1, points_y: 5 })
        );
    }

    #[test]
    fn pin_outside_grid_rejected() {
        let config: ClothConfig<f64> = ClothConfig::new(1.0, 1.0, 3, 3).with_pins(vec![(0, 0), (3, 1)]);
        assert_eq!(config.validate(), Err(ClothError::PinOutOfRange { col: 3, row: 1 }));
    }

    #[test]
    fn zero_extent_rejected() {
        let config: ClothConfig<f32> = ClothConfig::new(0.0, 1.0, 3, 3);
        assert_eq!(config.validate(), Err(ClothError::InvalidExtent));
    }

    #[test]
    fn negative_thickness_rejected() {
        let config: ClothConfig<f32> = ClothConfig::new(1.0, 1.0, 3, 3).with_thickness(-0.1);
        assert_eq!(config.validate(), Err(ClothError::InvalidThickness));
    }
}
