//! 4x4 matrix utilities for affine transforms
//!
//! Elementary translation, rotation, and scale matrices plus the products
//! needed to apply and compose them. Matrices are column-major: `m[col][row]`,
//! with the translation living in column 3.

use crate::{HomogeneousCoordinate, Point, Vector};

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Create a translation matrix for the offset `(dx, dy, dz)`
///
/// Only coordinates with w = 1 pick up the offset; the translation column is
/// multiplied by w, so directions (w = 0) pass through unchanged.
pub fn translation(dx: f32, dy: f32, dz: f32) -> Mat4 {
    let mut m = IDENTITY;
    m[3][0] = dx;
    m[3][1] = dy;
    m[3][2] = dz;
    m
}

/// Create a scale matrix with per-axis factors
///
/// The w diagonal entry stays 1 so the affine tag is preserved.
pub fn scaling(sx: f32, sy: f32, sz: f32) -> Mat4 {
    let mut m = IDENTITY;
    m[0][0] = sx;
    m[1][1] = sy;
    m[2][2] = sz;
    m
}

/// Right-handed rotation about the x axis by `angle` radians
pub fn rotation_x(angle: f32) -> Mat4 {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;
    m[1][1] = cs;
    m[2][2] = cs;
    m[1][2] = sn;
    m[2][1] = -sn;
    m
}

/// Right-handed rotation about the y axis by `angle` radians
pub fn rotation_y(angle: f32) -> Mat4 {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;
    m[0][0] = cs;
    m[2][2] = cs;
    m[2][0] = sn;
    m[0][2] = -sn;
    m
}

/// Right-handed rotation about the z axis by `angle` radians
pub fn rotation_z(angle: f32) -> Mat4 {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;
    m[0][0] = cs;
    m[1][1] = cs;
    m[0][1] = sn;
    m[1][0] = -sn;
    m
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a homogeneous coordinate by a 4x4 matrix (column-major)
///
/// result = M * c
pub fn transform(m: Mat4, c: HomogeneousCoordinate) -> HomogeneousCoordinate {
    HomogeneousCoordinate::new(
        m[0][0] * c.x() + m[1][0] * c.y() + m[2][0] * c.z() + m[3][0] * c.w(),
        m[0][1] * c.x() + m[1][1] * c.y() + m[2][1] * c.z() + m[3][1] * c.w(),
        m[0][2] * c.x() + m[1][2] * c.y() + m[2][2] * c.z() + m[3][2] * c.w(),
        m[0][3] * c.x() + m[1][3] * c.y() + m[2][3] * c.z() + m[3][3] * c.w(),
    )
}

/// Transform a point, keeping its point tag
///
/// `m` must be affine (bottom row `0, 0, 0, 1`), which all the elementary
/// matrices in this module are.
pub fn transform_point(m: Mat4, p: Point) -> Point {
    Point::from_homogeneous(transform(m, p.as_homogeneous()))
}

/// Transform a direction, keeping its direction tag
///
/// Directions carry w = 0, so any translation component of `m` is inert.
pub fn transform_direction(m: Mat4, v: Vector) -> Vector {
    Vector::from_homogeneous(transform(m, v.as_homogeneous()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn coord_approx_eq(a: HomogeneousCoordinate, b: HomogeneousCoordinate) -> bool {
        approx_eq(a.x(), b.x()) && approx_eq(a.y(), b.y()) && approx_eq(a.z(), b.z()) && approx_eq(a.w(), b.w())
    }

    #[test]
    fn test_identity() {
        let c = HomogeneousCoordinate::new(1.0, 2.0, 3.0, 4.0);
        assert!(coord_approx_eq(transform(IDENTITY, c), c));
    }

    #[test]
    fn test_translation_moves_points() {
        let m = translation(1.0, 2.0, -5.0);
        let p = transform_point(m, Point::new(10.0, 10.0, 10.0));
        assert_eq!(p, Point::new(11.0, 12.0, 5.0));
        assert_eq!(p.w(), 1.0);
    }

    #[test]
    fn test_translation_ignores_vectors() {
        let m = translation(100.0, 100.0, 100.0);
        let v = transform_direction(m, Vector::new(1.0, 2.0, 3.0));
        assert_eq!(v, Vector::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_scaling() {
        let m = scaling(3.0, 4.0, 5.0);
        let p = transform_point(m, Point::new(1.0, 1.0, 1.0));
        assert_eq!(p, Point::new(3.0, 4.0, 5.0));
        assert_eq!(p.w(), 1.0);
    }

    #[test]
    fn test_rotation_x_basis() {
        use std::f32::consts::FRAC_PI_2;

        let m = rotation_x(FRAC_PI_2);
        // y -> z, z -> -y, x unchanged
        let y = transform_direction(m, Vector::Y);
        assert!(coord_approx_eq(y.as_homogeneous(), Vector::Z.as_homogeneous()), "got {:?}", y);
        let z = transform_direction(m, Vector::Z);
        assert!(coord_approx_eq(z.as_homogeneous(), (-Vector::Y).as_homogeneous()), "got {:?}", z);
        let x = transform_direction(m, Vector::X);
        assert!(coord_approx_eq(x.as_homogeneous(), Vector::X.as_homogeneous()), "got {:?}", x);
    }

    #[test]
    fn test_rotation_y_basis() {
        use std::f32::consts::FRAC_PI_2;

        let m = rotation_y(FRAC_PI_2);
        // z -> x, x -> -z, y unchanged
        let z = transform_direction(m, Vector::Z);
        assert!(coord_approx_eq(z.as_homogeneous(), Vector::X.as_homogeneous()), "got {:?}", z);
        let x = transform_direction(m, Vector::X);
        assert!(coord_approx_eq(x.as_homogeneous(), (-Vector::Z).as_homogeneous()), "got {:?}", x);
        let y = transform_direction(m, Vector::Y);
        assert!(coord_approx_eq(y.as_homogeneous(), Vector::Y.as_homogeneous()), "got {:?}", y);
    }

    #[test]
    fn test_rotation_z_basis() {
        use std::f32::consts::FRAC_PI_2;

        let m = rotation_z(FRAC_PI_2);
        // x -> y, y -> -x, z unchanged
        let x = transform_direction(m, Vector::X);
        assert!(coord_approx_eq(x.as_homogeneous(), Vector::Y.as_homogeneous()), "got {:?}", x);
        let y = transform_direction(m, Vector::Y);
        assert!(coord_approx_eq(y.as_homogeneous(), (-Vector::X).as_homogeneous()), "got {:?}", y);
        let z = transform_direction(m, Vector::Z);
        assert!(coord_approx_eq(z.as_homogeneous(), Vector::Z.as_homogeneous()), "got {:?}", z);
    }

    #[test]
    fn test_mul_identity() {
        let a = rotation_z(0.5);
        let left = mul(IDENTITY, a);
        let right = mul(a, IDENTITY);
        for i in 0..4 {
            for j in 0..4 {
                assert!(approx_eq(left[i][j], a[i][j]));
                assert!(approx_eq(right[i][j], a[i][j]));
            }
        }
    }

    #[test]
    fn test_mul_composition() {
        use std::f32::consts::FRAC_PI_4;

        // Two 45 degree rotations equal one 90 degree rotation
        let r45 = rotation_z(FRAC_PI_4);
        let r90 = rotation_z(FRAC_PI_4 * 2.0);
        let composed = mul(r45, r45);

        let v = Vector::X;
        let result1 = transform_direction(composed, v);
        let result2 = transform_direction(r90, v);
        assert!(
            coord_approx_eq(result1.as_homogeneous(), result2.as_homogeneous()),
            "composed {:?}, direct {:?}",
            result1,
            result2
        );
    }

    #[test]
    fn test_mul_applies_right_operand_first() {
        use std::f32::consts::FRAC_PI_2;

        // rotate-then-translate and translate-then-rotate disagree away
        // from the origin
        let t = translation(1.0, 0.0, 0.0);
        let r = rotation_z(FRAC_PI_2);
        let p = Point::ORIGIN;

        let rotate_first = transform_point(mul(t, r), p);
        assert!(coord_approx_eq(
            rotate_first.as_homogeneous(),
            Point::new(1.0, 0.0, 0.0).as_homogeneous()
        ));

        let translate_first = transform_point(mul(r, t), p);
        assert!(coord_approx_eq(
            translate_first.as_homogeneous(),
            Point::new(0.0, 1.0, 0.0).as_homogeneous()
        ));
    }
}
