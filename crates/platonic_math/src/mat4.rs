//! 4x4 matrix utilities for 3D transformations
//!
//! Matrices are stored column-major (`m[column][row]`), which is the layout
//! WGSL expects for `mat4x4<f32>` uniforms.

use crate::Vec3;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Rotation of `degrees` about `axis`, counter-clockwise when looking down
/// the axis towards the origin (right-handed).
///
/// The axis does not need to be normalized. A zero axis yields the identity.
pub fn axis_angle_rotation(axis: Vec3, degrees: f32) -> Mat4 {
    let a = axis.normalized();
    if a == Vec3::ZERO {
        return IDENTITY;
    }

    let (s, c) = degrees.to_radians().sin_cos();
    let t = 1.0 - c;
    let (x, y, z) = (a.x, a.y, a.z);

    [
        [c + x * x * t, y * x * t + z * s, z * x * t - y * s, 0.0],
        [x * y * t - z * s, c + y * y * t, z * y * t + x * s, 0.0],
        [x * z * t + y * s, y * z * t - x * s, c + z * z * t, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Matrix product `a * b` (apply `b` first, then `a`)
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];
    for (col, out) in result.iter_mut().enumerate() {
        for (row, value) in out.iter_mut().enumerate() {
            *value = (0..4).map(|k| a[k][row] * b[col][k]).sum();
        }
    }
    result
}

/// Transform a point (w = 1) and drop the homogeneous coordinate
pub fn transform_point(m: &Mat4, p: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0],
        m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1],
        m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_quarter_turn_about_z() {
        let r = axis_angle_rotation(Vec3::Z, 90.0);
        assert!(approx_eq(transform_point(&r, Vec3::X), Vec3::Y));
        assert!(approx_eq(transform_point(&r, Vec3::Y), -Vec3::X));
    }

    #[test]
    fn test_rotation_fixes_its_axis() {
        let axis = Vec3::new(1.0, 1.0, 1.0);
        let r = axis_angle_rotation(axis, 37.0);
        let p = axis.normalized() * 1.5;
        assert!(approx_eq(transform_point(&r, p), p));
    }

    #[test]
    fn test_rotation_preserves_length() {
        let r = axis_angle_rotation(Vec3::new(1.0, 1.0, 1.0), 123.0);
        let p = Vec3::new(0.3, -0.7, 0.2);
        assert!((transform_point(&r, p).length() - p.length()).abs() < EPSILON);
    }

    #[test]
    fn test_zero_axis_is_identity() {
        assert_eq!(axis_angle_rotation(Vec3::ZERO, 45.0), IDENTITY);
    }

    #[test]
    fn test_accumulated_steps_match_single_rotation() {
        // 120° about (1,1,1) cycles the coordinate axes
        let axis = Vec3::new(1.0, 1.0, 1.0);
        let step = axis_angle_rotation(axis, 1.0);
        let mut acc = IDENTITY;
        for _ in 0..120 {
            acc = mul(acc, step);
        }
        // Looser tolerance: f32 error accumulates over the steps
        assert!((transform_point(&acc, Vec3::X) - Vec3::Y).length() < 1e-3);
        assert!((transform_point(&acc, Vec3::Y) - Vec3::Z).length() < 1e-3);
    }

    #[test]
    fn test_mul_identity() {
        let r = axis_angle_rotation(Vec3::Y, 30.0);
        assert_eq!(mul(IDENTITY, r), r);
        assert_eq!(mul(r, IDENTITY), r);
    }

    #[test]
    fn test_mul_order() {
        // Rotate about Z then translate along X
        let rz = axis_angle_rotation(Vec3::Z, 90.0);
        let mut tx = IDENTITY;
        tx[3][0] = 2.0;
        let m = mul(tx, rz);
        assert!(approx_eq(transform_point(&m, Vec3::X), Vec3::new(2.0, 1.0, 0.0)));
    }
}
