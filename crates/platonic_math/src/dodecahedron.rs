//! Regular dodecahedron
//!
//! Built from the golden-ratio construction:
//! - (±1, ±1, ±1)
//! - (0, ±φ, ±1/φ)
//! - (±1/φ, 0, ±φ)
//! - (±φ, ±1/φ, 0)
//!
//! All 20 raw points have radius √3 (φ² + 1/φ² = 3) and the raw edge length
//! is 2/φ. After dividing by the radius the edge is 2/(φ√3) ≈ 0.7136 and the
//! next-nearest distance (a pentagon diagonal) is φ times that, 2/√3 ≈ 1.1547.
//! Edges are inferred from pairwise distances against a threshold of
//! [`Dodecahedron::EDGE_THRESHOLD_RATIO`] × edge ≈ 0.9277, which sits well
//! inside that gap.

use crate::{
    shape::{infer_edges, normalize_to_unit_sphere, Edge, WireframeShape},
    Vec3, PHI,
};

/// A regular dodecahedron inscribed in the unit sphere
#[derive(Clone, Debug)]
pub struct Dodecahedron {
    vertices: Vec<Vec3>,
    edges: Vec<Edge>,
}

impl Dodecahedron {
    /// Pairs closer than this multiple of the edge length are connected
    pub const EDGE_THRESHOLD_RATIO: f32 = 1.3;

    /// Create the dodecahedron
    pub fn new() -> Self {
        let inv_phi = 1.0 / PHI;
        let mut vertices = Vec::with_capacity(20);

        for x in [-1.0, 1.0] {
            for y in [-1.0, 1.0] {
                for z in [-1.0, 1.0] {
                    vertices.push(Vec3::new(x, y, z));
                }
            }
        }
        for y in [-PHI, PHI] {
            for z in [-inv_phi, inv_phi] {
                vertices.push(Vec3::new(0.0, y, z));
            }
        }
        for x in [-inv_phi, inv_phi] {
            for z in [-PHI, PHI] {
                vertices.push(Vec3::new(x, 0.0, z));
            }
        }
        for x in [-PHI, PHI] {
            for y in [-inv_phi, inv_phi] {
                vertices.push(Vec3::new(x, y, 0.0));
            }
        }

        normalize_to_unit_sphere(&mut vertices);
        let edges = infer_edges(&vertices, Self::edge_threshold());

        Self { vertices, edges }
    }

    /// Edge length at unit circumradius: 2/(φ√3)
    pub fn edge_length() -> f32 {
        2.0 / (PHI * 3.0_f32.sqrt())
    }

    /// Shortest non-edge distance at unit circumradius (pentagon diagonal)
    pub fn diagonal_length() -> f32 {
        PHI * Self::edge_length()
    }

    /// Distance cut-off used for edge inference
    pub fn edge_threshold() -> f32 {
        Self::EDGE_THRESHOLD_RATIO * Self::edge_length()
    }
}

impl Default for Dodecahedron {
    fn default() -> Self {
        Self::new()
    }
}

impl WireframeShape for Dodecahedron {
    fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::checks::*;

    #[test]
    fn test_counts() {
        let d = Dodecahedron::new();
        assert_eq!(d.vertex_count(), 20);
        assert_eq!(d.edge_count(), 30);
    }

    #[test]
    fn test_vertices_on_unit_sphere() {
        assert_on_unit_sphere(&Dodecahedron::new());
    }

    #[test]
    fn test_edges() {
        let d = Dodecahedron::new();
        assert_edges_well_formed(&d);
        assert_edges_are_nearest_neighbours(&d);
        assert_vertex_degree(&d, 3);
    }

    #[test]
    fn test_edge_length_matches_theory() {
        let d = Dodecahedron::new();
        for e in d.edges() {
            assert!((e.length(d.vertices()) - Dodecahedron::edge_length()).abs() < EPSILON);
        }
    }

    #[test]
    fn test_threshold_separates_edges_from_diagonals() {
        let edge = Dodecahedron::edge_length();
        let threshold = Dodecahedron::edge_threshold();
        // At least 10% of an edge of slack on both sides
        assert!(threshold - edge > 0.1 * edge);
        assert!(Dodecahedron::diagonal_length() - threshold > 0.1 * edge);
    }

    #[test]
    fn test_no_pair_between_edge_and_diagonal() {
        let d = Dodecahedron::new();
        let verts = d.vertices();
        for i in 0..verts.len() {
            for j in (i + 1)..verts.len() {
                let dist = verts[i].distance(verts[j]);
                let is_edge = (dist - Dodecahedron::edge_length()).abs() < EPSILON;
                assert!(is_edge || dist > Dodecahedron::diagonal_length() - EPSILON);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let a = Dodecahedron::new();
        let b = Dodecahedron::new();
        assert_eq!(a.vertices(), b.vertices());
        assert_eq!(a.edges(), b.edges());
    }
}
