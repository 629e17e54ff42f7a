//! Error types for cloth construction.

use core::fmt;

/// Errors raised while building a cloth or its collision primitives.
///
/// The stepper itself never fails: numerical degeneracies at runtime are
/// neutralized to a zero contribution instead.
#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// Grid needs at least two points along each axis.
    InvalidGridDimensions { points_x: usize, points_y: usize },
    /// A pin names a grid coordinate outside the grid.
    PinOutOfRange { col: usize, row: usize },
    /// Width and height must be positive and finite.
    InvalidExtent,
    /// Thickness must be non-negative and finite.
    InvalidThickness,
    /// A cloth assembled from parts has no point masses.
    EmptyPointStore,
    /// A spring references a point mass that does not exist.
    SpringOutOfBounds { index: usize, count: usize },
    /// Plane normal has zero length.
    DegenerateNormal,
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidGridDimensions { points_x, points_y } => write!(
                f,
                "grid must be at least 2x2 points, got {}x{}",
                points_x, points_y
            ),
            ClothError::PinOutOfRange { col, row } => {
                write!(f, "pin ({}, {}) lies outside the grid", col, row)
            }
            ClothError::InvalidExtent => write!(f, "width and height must be positive and finite"),
            ClothError::InvalidThickness => write!(f, "thickness must be non-negative and finite"),
            ClothError::EmptyPointStore => write!(f, "cloth needs at least one point mass"),
            ClothError::SpringOutOfBounds { index, count } => {
                write!(f, "spring endpoint {} out of bounds (count: {})", index, count)
            }
            ClothError::DegenerateNormal => write!(f, "plane normal must be non-zero"),
        }
    }
}

impl core::error::Error for ClothError {}
