//! Vector specialization of the homogeneous coordinate
//!
//! A Vector fixes w = 0 at construction: it names a direction or
//! displacement, so the translation column of an affine matrix never
//! touches it.

use serde::{Serialize, Deserialize};

use crate::coord::{CoordError, HomogeneousCoordinate};

/// A direction or displacement in 3D space (homogeneous w = 0)
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector(HomogeneousCoordinate);

impl Vector {
    pub const ZERO: Self = Self(HomogeneousCoordinate::new(0.0, 0.0, 0.0, 0.0));
    pub const X: Self = Self(HomogeneousCoordinate::new(1.0, 0.0, 0.0, 0.0));
    pub const Y: Self = Self(HomogeneousCoordinate::new(0.0, 1.0, 0.0, 0.0));
    pub const Z: Self = Self(HomogeneousCoordinate::new(0.0, 0.0, 1.0, 0.0));

    /// Create a vector from its three spatial components
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self(HomogeneousCoordinate::new(x, y, z, 0.0))
    }

    /// Wrap a coordinate produced by a linear transform of a vector
    ///
    /// Callers must guarantee the coordinate still carries w = 0.
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

    /// The affine tag (always 0 for a vector)
    #[inline]
    pub fn w(&self) -> f32 {
        self.0.w()
    }

    /// Copy out the underlying homogeneous coordinate
    #[inline]
    pub fn as_homogeneous(&self) -> HomogeneousCoordinate {
        self.0
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.0.dot(other.0)
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.0.length_squared()
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> f32 {
        self.0.length()
    }

    /// Normalize to unit length
    #[inline]
    pub fn normalized(self) -> Self {
        Self(self.0.normalized())
    }
}

impl From<Vector> for HomogeneousCoordinate {
    #[inline]
    fn from(v: Vector) -> Self {
        v.0
    }
}

impl std::ops::Index<usize> for Vector {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.0[index]
    }
}

impl std::ops::Add for Vector {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl std::ops::Sub for Vector {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl std::ops::Mul<f32> for Vector {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self(self.0 * scalar)
    }
}

impl std::ops::Div<f32> for Vector {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self(self.0 / scalar)
    }
}

impl std::ops::Neg for Vector {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}
