//! Point specialization of the homogeneous coordinate
//!
//! A Point fixes w = 1 at construction: it names a location in space and is
//! affected by translation.

use serde::{Serialize, Deserialize};

use crate::coord::{CoordError, HomogeneousCoordinate};
use crate::Vector;

/// A position in 3D space (homogeneous w = 1)
///
/// The w tag is fixed by every constructor and has no setter; the wrapper
/// exposes the read half of the indexed access contract so the tag cannot be
/// rewritten through an index. No bytemuck impls here: an all-zero Point
/// would carry the wrong tag, so raw uploads go through
/// [`as_homogeneous`](Point::as_homogeneous).
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point(HomogeneousCoordinate);

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Point {
    pub const ORIGIN: Self = Self(HomogeneousCoordinate::new(0.0, 0.0, 0.0, 1.0));

    /// Create a point from its three spatial components
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self(HomogeneousCoordinate::new(x, y, z, 1.0))
    }

    /// Wrap a coordinate produced by an affine transform of a point
    ///
    /// Callers must guarantee the coordinate still carries w = 1.
    #[inline]
    pub(crate) const fn from_homogeneous(coord: HomogeneousCoordinate) -> Self {
        Self(coord)
    }

    /// Component at `index`, failing outside `0..=3`
    #[inline]
    pub fn get(&self, index: usize) -> Result<f32, CoordError> {
        self.0.get(index)
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.0.x()
    }

    #[inline]
    pub fn set_x(&mut self, x: f32) {
        self.0.set_x(x);
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.0.y()
    }

    #[inline]
    pub fn set_y(&mut self, y: f32) {
        self.0.set_y(y);
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.0.z()
    }

    #[inline]
    pub fn set_z(&mut self, z: f32) {
        self.0.set_z(z);
    }

    /// The affine tag (always 1 for a point)
    #[inline]
    pub fn w(&self) -> f32 {
        self.0.w()
    }

    /// Copy out the underlying homogeneous coordinate
    #[inline]
    pub fn as_homogeneous(&self) -> HomogeneousCoordinate {
        self.0
    }
}

impl From<Point> for HomogeneousCoordinate {
    #[inline]
    fn from(p: Point) -> Self {
        p.0
    }
}

impl std::ops::Index<usize> for Point {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.0[index]
    }
}

// Affine arithmetic: displacing a point yields a point (w: 1 + 0 = 1),
// the difference of two points is a displacement (w: 1 - 1 = 0).

impl std::ops::Add<Vector> for Point {
    type Output = Point;
    #[inline]
    fn add(self, displacement: Vector) -> Point {
        Point(self.0 + displacement.as_homogeneous())
    }
}

impl std::ops::Sub<Vector> for Point {
    type Output = Point;
    #[inline]
    fn sub(self, displacement: Vector) -> Point {
        Point(self.0 - displacement.as_homogeneous())
    }
}

impl std::ops::Sub for Point {
    type Output = Vector;
    #[inline]
    fn sub(self, other: Point) -> Vector {
        Vector::from_homogeneous(self.0 - other.0)
    }
}
