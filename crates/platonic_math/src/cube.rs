//! Cube (hexahedron)
//!
//! Corners (±1, ±1, ±1) scaled by 1/√3 so they sit on the unit sphere.
//! Edges join corners that differ in exactly one coordinate.

use crate::{shape::{Edge, WireframeShape}, Vec3};

/// A cube inscribed in the unit sphere
#[derive(Clone, Debug)]
pub struct Cube {
    vertices: [Vec3; 8],
    edges: [Edge; 12],
}

impl Cube {
    /// Create the cube
    pub fn new() -> Self {
        let d = 1.0 / 3.0_f32.sqrt();

        let vertices = [
            Vec3::new( d, -d, -d), // 0
            Vec3::new( d,  d, -d), // 1
            Vec3::new(-d,  d, -d), // 2
            Vec3::new(-d, -d, -d), // 3
            Vec3::new( d, -d,  d), // 4
            Vec3::new( d,  d,  d), // 5
            Vec3::new(-d, -d,  d), // 6
            Vec3::new(-d,  d,  d), // 7
        ];

        let edges = [
            Edge::new(0, 1), Edge::new(0, 3), Edge::new(0, 4),
            Edge::new(2, 1), Edge::new(2, 3), Edge::new(2, 7),
            Edge::new(6, 3), Edge::new(6, 4), Edge::new(6, 7),
            Edge::new(5, 1), Edge::new(5, 4), Edge::new(5, 7),
        ];

        Self { vertices, edges }
    }

    /// Edge length at unit circumradius: 2/√3
    pub fn edge_length() -> f32 {
        2.0 / 3.0_f32.sqrt()
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl WireframeShape for Cube {
    fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
