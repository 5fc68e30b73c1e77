//! Core pose types for the Affine3D kernel
//!
//! This crate provides the transform-state component built on the
//! `affine3d_math` primitives:
//!
//! - [`WorldObject`] - a pose (position + facing direction) with chainable
//!   move/rotate/scale operations and an accumulated world transform
//! - [`AngleUnit`] - closed degrees/radians unit for the rotation operations
//! - [`ParseAngleUnitError`] - rejection of unrecognized unit spellings

mod units;
mod world_object;

pub use units::{AngleUnit, ParseAngleUnitError};
pub use world_object::WorldObject;

// Re-export commonly used types from affine3d_math for convenience
pub use affine3d_math::{mat4, CoordError, HomogeneousCoordinate, Mat4, Point, Vector};
