//! Provot-style strain limiting.
//!
//! After integration and collision, any spring stretched past its ceiling is
//! pulled back by moving its free endpoints. `last_position` is not touched,
//! so the correction bleeds into the next substep's velocity and overstretch
//! is absorbed over several frames rather than snapped away.

use crate::float::Float;
use crate::point_mass::PointMass;
use crate::spring::Spring;

/// Maximum allowed length as a multiple of rest length.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StrainLimit<F: Float> {
    pub max_ratio: F,
}

impl<F: Float> StrainLimit<F> {
    /// The 10% ceiling from Provot's paper.
    pub fn provot() -> Self {
        StrainLimit { max_ratio: F::from_f32(1.1) }
    }

    /// Correct one spring. Returns whether any endpoint moved.
    pub fn solve(&self, spring: &Spring<F>, points: &mut [PointMass<F>]) -> bool {
        let delta = points[spring.b].position - points[spring.a].position;
        let length = delta.length();
        let ceiling = spring.rest_length() * self.max_ratio;
        if length <= ceiling {
            return false;
        }
        let Some(direction) = delta.try_normalize() else {
            return false;
        };
        let excess = length - ceiling;

        match (points[spring.a].pinned, points[spring.b].pinned) {
            (true, true) => return false,
            (true, false) => points[spring.b].position -= direction * excess,
            (false, true) => points[spring.a].position += direction * excess,
            (false, false) => {
                let half = direction * (excess * F::half());
                points[spring.a].position += half;
                points[spring.b].position -= half;
            }
        }
        true
    }

    /// Correct every spring in order. Later springs see earlier corrections.
    /// Returns how many springs were corrected.
    pub fn apply(&self, springs: &[Spring<F>], points: &mut [PointMass<F>]) -> usize {
        let mut corrected = 0;
        for spring in springs {
            if self.solve(spring, points) {
                corrected += 1;
            }
        }
        corrected
    }
}

impl<F: Float> Default for StrainLimit<F> {
    fn default() -> Self {
        Self::provot()
    }
}
