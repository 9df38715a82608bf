//! GPU-compatible data types for the line pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use platonic_math::{mat4, Mat4, Vec3};

/// One endpoint of a line segment
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// Position in model space (x, y, z)
    pub position: [f32; 3],
    /// Padding so color starts on a 16-byte boundary
    pub _padding: f32,
    /// RGBA color
    pub color: [f32; 4],
}

impl LineVertex {
    /// Create a new line vertex
    pub fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            _padding: 0.0,
            color,
        }
    }
}

/// Per-draw uniforms: the full model-view-projection transform
/// Layout: 64 bytes (must match line.wgsl LineUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct LineUniforms {
    pub transform: Mat4,
}

impl Default for LineUniforms {
    fn default() -> Self {
        Self {
            transform: mat4::IDENTITY,
        }
    }
}

/// Capacity of the line vertex buffer
///
/// The largest frame (dodecahedron) needs 6 + 60 + 72 vertices.
pub const MAX_LINE_VERTICES: usize = 1024;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_line_vertex_size() {
        // 3 floats position + 1 padding + 4 floats color = 32 bytes
        assert_eq!(size_of::<LineVertex>(), 32);
    }

    #[test]
    fn test_line_uniforms_size() {
        assert_eq!(size_of::<LineUniforms>(), 64);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<LineVertex>(), 4);
        assert_eq!(std::mem::align_of::<LineUniforms>(), 4);
    }

    #[test]
    fn test_line_vertex_new() {
        let v = LineVertex::new(Vec3::new(1.0, 2.0, 3.0), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(v.position, [1.0, 2.0, 3.0]);
        assert_eq!(v.color, [1.0, 0.0, 0.0, 1.0]);
    }
}
