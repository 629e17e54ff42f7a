//! Mass-spring cloth simulation.
//!
//! `weft` advances a cloth modelled as point masses joined by structural,
//! shearing and bending springs. Each substep accumulates forces, takes an
//! explicit Verlet step, resolves self-collision through a per-substep spatial
//! hash, pushes points out of rigid primitives, and strain-limits the springs
//! after Provot.
//!
//! # Features
//!
//! - **Topologies**: flat lattices, sphere-parametrized grids, or golden-angle
//!   scattered samples
//! - **Verlet integration**: second-order, velocity implicit in position history
//! - **Collisions**: planes and spheres with friction, plus the `Collide` trait
//!   for custom primitives
//! - **Self-collision**: integer-keyed spatial hash rebuilt every substep
//! - **Observable**: watch each pass through the `StepObserver` trait
//! - **`no_std` compatible**: needs only `alloc`
//!
//! ```
//! use weft::{Cloth, ClothConfig, ClothParameters, CollisionObject, Plane, Vec3};
//!
//! let config = ClothConfig::new(1.0, 1.0, 8, 8).with_pin(0, 7).with_pin(7, 7);
//! let mut cloth: Cloth<f64> = Cloth::build(&config).unwrap();
//! let ground = CollisionObject::from(Plane::new(Vec3::zero(), Vec3::new(0.0, 1.0, 0.0), 0.5).unwrap());
//! let gravity = Vec3::new(0.0, -9.8, 0.0);
//!
//! cloth.advance_frame(90.0, 30, &ClothParameters::new(), &[gravity], &[ground]);
//! assert_eq!(cloth.point_mass(0, 7).position, cloth.point_mass(0, 7).start_position);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod point_mass;
pub mod spring;
pub mod topology;
pub mod constraint;
pub mod collision;
pub mod spatial_hash;
pub mod cloth;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec3;
pub use point_mass::PointMass;
pub use spring::{Spring, SpringType};
pub use topology::Topology;
pub use constraint::StrainLimit;
pub use collision::{Collide, CollisionObject, Plane, Sphere};
pub use spatial_hash::{CellSize, SpatialHash};
pub use cloth::Cloth;
pub use config::{ClothConfig, ClothParameters, Inflation, InflationCenter, Layout, Orientation, Surface, SpringKinds};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::ClothError;
