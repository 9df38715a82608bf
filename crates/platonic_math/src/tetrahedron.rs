//! Regular tetrahedron
//!
//! Four alternate corners of the cube (±1, ±1, ±1), scaled by 1/√3 onto the
//! unit sphere. Every pair of vertices is joined by an edge.

use crate::{shape::{Edge, WireframeShape}, Vec3};

/// A regular tetrahedron inscribed in the unit sphere
#[derive(Clone, Debug)]
pub struct Tetrahedron {
    vertices: [Vec3; 4],
    edges: [Edge; 6],
}

impl Tetrahedron {
    /// Create the tetrahedron
    pub fn new() -> Self {
        let d = 1.0 / 3.0_f32.sqrt();

        let vertices = [
            Vec3::new( d,  d,  d), // 0
            Vec3::new(-d, -d,  d), // 1
            Vec3::new(-d,  d, -d), // 2
            Vec3::new( d, -d, -d), // 3
        ];

        let edges = [
            Edge::new(0, 1), Edge::new(0, 2), Edge::new(0, 3),
            Edge::new(1, 2), Edge::new(1, 3), Edge::new(2, 3),
        ];

        Self { vertices, edges }
    }

    /// Edge length at unit circumradius: 2√2/√3
    pub fn edge_length() -> f32 {
        2.0 * 2.0_f32.sqrt() / 3.0_f32.sqrt()
    }
}

impl Default for Tetrahedron {
    fn default() -> Self {
        Self::new()
    }
}

impl WireframeShape for Tetrahedron {
    fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
