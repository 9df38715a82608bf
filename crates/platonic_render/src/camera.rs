//! Fixed orthographic camera
//!
//! The view volume is the cube [-extent, extent]³ centred on the origin,
//! looking down -Z. There is no perspective: parallel edges stay parallel.

use platonic_math::Mat4;

/// Orthographic camera over a symmetric box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrthoCamera {
    /// Half the side length of the visible box
    pub extent: f32,
}

impl Default for OrthoCamera {
    fn default() -> Self {
        Self { extent: 2.0 }
    }
}

impl OrthoCamera {
    pub fn new(extent: f32) -> Self {
        Self { extent }
    }

    /// Projection from the view box to clip space
    pub fn projection_matrix(&self) -> Mat4 {
        let e = self.extent;
        orthographic_matrix(-e, e, -e, e, -e, e)
    }
}

/// Right-handed orthographic projection with depth mapped to [0, 1]
///
/// `near` and `far` are distances along -Z, as with `glOrtho`.
pub fn orthographic_matrix(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let rl = 1.0 / (right - left);
    let tb = 1.0 / (top - bottom);
    let fn_ = 1.0 / (far - near);

    [
        [2.0 * rl, 0.0, 0.0, 0.0],
        [0.0, 2.0 * tb, 0.0, 0.0],
        [0.0, 0.0, -fn_, 0.0],
        [-(right + left) * rl, -(top + bottom) * tb, -near * fn_, 1.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use platonic_math::{mat4::transform_point, Vec3};

    #[test]
    fn test_box_corners_map_to_clip_bounds() {
        let proj = OrthoCamera::default().projection_matrix();

        let near_corner = transform_point(&proj, Vec3::new(-2.0, -2.0, 2.0));
        assert_eq!(near_corner, Vec3::new(-1.0, -1.0, 0.0));

        let far_corner = transform_point(&proj, Vec3::new(2.0, 2.0, -2.0));
        assert_eq!(far_corner, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_origin_maps_to_centre() {
        let proj = OrthoCamera::default().projection_matrix();
        assert_eq!(transform_point(&proj, Vec3::ZERO), Vec3::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn test_unit_sphere_fits() {
        // Anything within radius 2 stays inside clip space
        let proj = OrthoCamera::default().projection_matrix();
        let p = transform_point(&proj, Vec3::new(1.5, 0.0, -1.5));
        assert!(p.x.abs() <= 1.0 && p.y.abs() <= 1.0);
        assert!((0.0..=1.0).contains(&p.z));
    }
}
