//! Affine math primitives for the Affine3D kernel
//!
//! This crate provides the homogeneous-coordinate types and the matrix
//! support the pose layer builds on.
//!
//! ## Core Types
//!
//! - [`HomogeneousCoordinate`] - a general 4-component (x, y, z, w) value
//! - [`Point`] - a position, w fixed at 1 (moved by translation)
//! - [`Vector`] - a direction, w fixed at 0 (immune to translation)
//! - [`Mat4`] - 4x4 column-major matrix with elementary transform
//!   constructors in [`mat4`]

mod coord;
mod point;
mod vector;
pub mod mat4;

pub use coord::{CoordError, HomogeneousCoordinate};
pub use mat4::Mat4;
pub use point::Point;
pub use vector::Vector;
