//! World object pose component
//!
//! A WorldObject owns a pose (a position and a facing direction) and evolves
//! it through chainable move/rotate/scale operations. Each operation builds
//! an elementary transform matrix, applies it to the stored homogeneous
//! coordinates, and folds it into the accumulated world transform.
//!
//! Composition convention, held as an invariant:
//! - every new elementary matrix premultiplies the accumulated transform
//!   (`world_transform = new * current`), so operations compose in the order
//!   they were invoked;
//! - translation applies to the position only and never changes the facing
//!   direction (w = 0 makes a direction immune to it anyway);
//! - rotation applies to the orientation only and never moves the position;
//! - scale applies to the position only; a direction's heading does not
//!   stretch.

use affine3d_math::{mat4, Mat4, Point, Vector};
use serde::{Serialize, Deserialize};

use crate::AngleUnit;

/// Orientations rotated below this norm are considered degenerate
const MIN_ORIENTATION_NORM: f32 = 1e-7;

/// An object in 3D space with a position and a facing direction
///
/// A fresh object sits at the origin facing +z. All mutators return
/// `&mut Self` so calls chain:
///
/// ```
/// use affine3d_core::{AngleUnit, WorldObject};
///
/// let mut obj = WorldObject::new();
/// obj.move_x(1.0).move_y(2.0).rotate_y(90.0, AngleUnit::Degrees);
/// ```
///
/// The object is a plain value: it is not synchronized, and concurrent
/// mutation from multiple threads requires external serialization.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct WorldObject {
    position: Point,
    orientation: Vector,
    world_transform: Mat4,
}

impl Default for WorldObject {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldObject {
    /// Create an object at the origin, facing +z
    pub fn new() -> Self {
        Self {
            position: Point::ORIGIN,
            orientation: Vector::Z,
            world_transform: mat4::IDENTITY,
        }
    }

    /// Current position
    ///
    /// Returned by value; mutating the copy does not touch the pose.
    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Current facing direction (unit length under rotation-only use)
    #[inline]
    pub fn orientation(&self) -> Vector {
        self.orientation
    }

    /// Accumulated composition of every applied elementary matrix
    #[inline]
    pub fn world_transform(&self) -> Mat4 {
        self.world_transform
    }

    fn append_transform(&mut self, tx: Mat4) {
        self.world_transform = mat4::mul(tx, self.world_transform);
    }

    // Movement operations

    /// Translate the position by `(dx, dy, dz)`
    pub fn move_by(&mut self, dx: f32, dy: f32, dz: f32) -> &mut Self {
        let tx = mat4::translation(dx, dy, dz);
        self.position = mat4::transform_point(tx, self.position);
        self.append_transform(tx);
        self
    }

    /// Translate along x only
    pub fn move_x(&mut self, delta: f32) -> &mut Self {
        self.move_by(delta, 0.0, 0.0)
    }

    /// Translate along y only
    pub fn move_y(&mut self, delta: f32) -> &mut Self {
        self.move_by(0.0, delta, 0.0)
    }

    /// Translate along z only
    pub fn move_z(&mut self, delta: f32) -> &mut Self {
        self.move_by(0.0, 0.0, delta)
    }

    // Rotation operations

    /// Rotate the facing direction about the x axis
    pub fn rotate_x(&mut self, angle: f32, unit: AngleUnit) -> &mut Self {
        self.apply_rotation(mat4::rotation_x(unit.to_radians(angle)))
    }

    /// Rotate the facing direction about the y axis
    pub fn rotate_y(&mut self, angle: f32, unit: AngleUnit) -> &mut Self {
        self.apply_rotation(mat4::rotation_y(unit.to_radians(angle)))
    }

    /// Rotate the facing direction about the z axis
    pub fn rotate_z(&mut self, angle: f32, unit: AngleUnit) -> &mut Self {
        self.apply_rotation(mat4::rotation_z(unit.to_radians(angle)))
    }

    fn apply_rotation(&mut self, tx: Mat4) -> &mut Self {
        // Rotation matrices are orthonormal; renormalizing absorbs float
        // drift over long rotation chains.
        let rotated = mat4::transform_direction(tx, self.orientation);
        let norm = rotated.length();
        if norm < MIN_ORIENTATION_NORM {
            log::warn!(
                "rotated orientation norm {} below tolerance, keeping previous orientation",
                norm
            );
        } else {
            self.orientation = rotated / norm;
        }
        self.append_transform(tx);
        self
    }

    // Scale operations

    /// Scale the position with per-axis factors
    pub fn scale(&mut self, sx: f32, sy: f32, sz: f32) -> &mut Self {
        let tx = mat4::scaling(sx, sy, sz);
        self.position = mat4::transform_point(tx, self.position);
        self.append_transform(tx);
        self
    }

    /// Scale along x only
    pub fn scale_x(&mut self, factor: f32) -> &mut Self {
        self.scale(factor, 1.0, 1.0)
    }

    /// Scale along y only
    pub fn scale_y(&mut self, factor: f32) -> &mut Self {
        self.scale(1.0, factor, 1.0)
    }

    /// Scale along z only
    pub fn scale_z(&mut self, factor: f32) -> &mut Self {
        self.scale(1.0, 1.0, factor)
    }

    /// Scale uniformly on all three axes
    pub fn scale_all(&mut self, factor: f32) -> &mut Self {
        self.scale(factor, factor, factor)
    }
}
