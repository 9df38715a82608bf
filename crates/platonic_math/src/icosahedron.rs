//! Regular icosahedron
//!
//! Built from three mutually perpendicular golden rectangles:
//! (0, ±1, ±φ), (±1, ±φ, 0), (±φ, 0, ±1).
//!
//! The raw radius is √(1 + φ²) and the raw edge length is 2, so at unit
//! circumradius the edge is 2/√(1 + φ²) ≈ 1.0515 and the next-nearest
//! distance is φ times that ≈ 1.7013. Edges are inferred against
//! [`Icosahedron::EDGE_THRESHOLD_RATIO`] × edge ≈ 1.1566.

use crate::{
    shape::{infer_edges, normalize_to_unit_sphere, Edge, WireframeShape},
    Vec3, PHI,
};

/// A regular icosahedron inscribed in the unit sphere
#[derive(Clone, Debug)]
pub struct Icosahedron {
    vertices: Vec<Vec3>,
    edges: Vec<Edge>,
}

impl Icosahedron {
    /// Pairs closer than this multiple of the edge length are connected
    pub const EDGE_THRESHOLD_RATIO: f32 = 1.1;

    /// Create the icosahedron
    pub fn new() -> Self {
        let mut vertices = vec![
            Vec3::new(0.0, 1.0, PHI),
            Vec3::new(0.0, 1.0, -PHI),
            Vec3::new(0.0, -1.0, PHI),
            Vec3::new(0.0, -1.0, -PHI),
            Vec3::new(1.0, PHI, 0.0),
            Vec3::new(1.0, -PHI, 0.0),
            Vec3::new(-1.0, PHI, 0.0),
            Vec3::new(-1.0, -PHI, 0.0),
            Vec3::new(PHI, 0.0, 1.0),
            Vec3::new(-PHI, 0.0, 1.0),
            Vec3::new(PHI, 0.0, -1.0),
            Vec3::new(-PHI, 0.0, -1.0),
        ];

        normalize_to_unit_sphere(&mut vertices);
        let edges = infer_edges(&vertices, Self::edge_threshold());

        Self { vertices, edges }
    }

    /// Edge length at unit circumradius: 2/√(1 + φ²)
    pub fn edge_length() -> f32 {
        2.0 / (1.0 + PHI * PHI).sqrt()
    }

    /// Shortest non-edge distance at unit circumradius
    pub fn diagonal_length() -> f32 {
        PHI * Self::edge_length()
    }

    /// Distance cut-off used for edge inference
    pub fn edge_threshold() -> f32 {
        Self::EDGE_THRESHOLD_RATIO * Self::edge_length()
    }
}

impl Default for Icosahedron {
    fn default() -> Self {
        Self::new()
    }
}

impl WireframeShape for Icosahedron {
    fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
