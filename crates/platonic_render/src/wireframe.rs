//! Wireframe geometry - turns a frame's content into GPU line vertices
//!
//! Lines are collected into two lists:
//! - `scene`: coordinate axes and the selected solid, which follow the
//!   model rotation
//! - `overlay`: the reference circle, drawn without the model rotation

use platonic_math::{Solid, Vec3};
use crate::pipeline::LineVertex;

/// Axis colors: red X, green Y, blue Z
pub const AXIS_COLORS: [[f32; 4]; 3] = [
    [1.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
];

/// Colors and sizes for the frame's line work
#[derive(Clone, Debug, PartialEq)]
pub struct WireframeStyle {
    /// Color of the solid's edges
    pub solid_color: [f32; 4],
    /// Color of the reference circle
    pub circle_color: [f32; 4],
    /// Length of each axis line from the origin
    pub axis_length: f32,
    /// Radius of the reference circle
    pub circle_radius: f32,
    /// Number of straight segments approximating the circle
    pub circle_segments: u32,
}

impl Default for WireframeStyle {
    fn default() -> Self {
        Self {
            solid_color: [1.0, 1.0, 1.0, 1.0],
            circle_color: [1.0, 0.0, 1.0, 1.0],
            axis_length: 1.5,
            circle_radius: 1.0,
            circle_segments: 36,
        }
    }
}

/// Line-list vertices for one frame
#[derive(Clone, Debug, Default)]
pub struct WireframeGeometry {
    /// Rotating lines (pairs of vertices)
    pub scene: Vec<LineVertex>,
    /// Screen-stable lines (pairs of vertices)
    pub overlay: Vec<LineVertex>,
}

impl WireframeGeometry {
    /// Create an empty geometry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a full frame: axes, then the solid, then the reference circle
    pub fn for_frame(solid: &Solid, style: &WireframeStyle) -> Self {
        let mut geometry = Self::new();
        geometry.add_axes(style.axis_length);
        geometry.add_solid(solid, style.solid_color);
        geometry.add_overlay_circle(style.circle_radius, style.circle_segments, style.circle_color);
        geometry
    }

    /// Add a single scene line
    pub fn add_line(&mut self, from: Vec3, to: Vec3, color: [f32; 4]) {
        self.scene.push(LineVertex::new(from, color));
        self.scene.push(LineVertex::new(to, color));
    }

    /// Add the three coordinate axes from the origin
    pub fn add_axes(&mut self, length: f32) {
        let axes = [Vec3::X, Vec3::Y, Vec3::Z];
        for (axis, color) in axes.into_iter().zip(AXIS_COLORS) {
            self.add_line(Vec3::ZERO, axis * length, color);
        }
    }

    /// Add one line per edge of the solid
    pub fn add_solid(&mut self, solid: &Solid, color: [f32; 4]) {
        for (from, to) in solid.segments() {
            self.add_line(from, to, color);
        }
    }

    /// Add a closed polygon approximating a circle in the XY plane
    pub fn add_overlay_circle(&mut self, radius: f32, segments: u32, color: [f32; 4]) {
        if segments < 3 {
            log::warn!("Circle needs at least 3 segments, got {}", segments);
            return;
        }

        let point = |i: u32| {
            let angle = std::f32::consts::TAU * i as f32 / segments as f32;
            Vec3::new(angle.cos() * radius, angle.sin() * radius, 0.0)
        };

        for i in 0..segments {
            self.overlay.push(LineVertex::new(point(i), color));
            self.overlay.push(LineVertex::new(point((i + 1) % segments), color));
        }
    }

    /// Clear all geometry
    pub fn clear(&mut self) {
        self.scene.clear();
        self.overlay.clear();
    }

    /// Get the number of rotating vertices
    pub fn scene_vertex_count(&self) -> usize {
        self.scene.len()
    }

    /// Get the number of screen-stable vertices
    pub fn overlay_vertex_count(&self) -> usize {
        self.overlay.len()
    }

    /// Get the total number of vertices
    pub fn vertex_count(&self) -> usize {
        self.scene.len() + self.overlay.len()
    }

    /// Get the total number of line segments
    pub fn line_count(&self) -> usize {
        self.vertex_count() / 2
    }
}
