//! Regular octahedron: the six unit axis vectors

use crate::{shape::{Edge, WireframeShape}, Vec3};

/// A regular octahedron inscribed in the unit sphere
#[derive(Clone, Debug)]
pub struct Octahedron {
    vertices: [Vec3; 6],
    edges: [Edge; 12],
}

impl Octahedron {
    /// Create the octahedron
    pub fn new() -> Self {
        let vertices = [
            Vec3::X,  // 0
            -Vec3::X, // 1
            Vec3::Y,  // 2
            -Vec3::Y, // 3
            Vec3::Z,  // 4
            -Vec3::Z, // 5
        ];

        // Each vertex connects to every other vertex except its antipode
        let edges = [
            Edge::new(0, 2), Edge::new(0, 3), Edge::new(0, 4), Edge::new(0, 5),
            Edge::new(1, 2), Edge::new(1, 3), Edge::new(1, 4), Edge::new(1, 5),
            Edge::new(2, 4), Edge::new(2, 5), Edge::new(3, 4), Edge::new(3, 5),
        ];

        Self { vertices, edges }
    }

    /// Edge length at unit circumradius: √2
    pub fn edge_length() -> f32 {
        std::f32::consts::SQRT_2
    }
}

impl Default for Octahedron {
    fn default() -> Self {
        Self::new()
    }
}

impl WireframeShape for Octahedron {
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
        let o = Octahedron::new();
        assert_eq!(o.vertex_count(), 6);
        assert_eq!(o.edge_count(), 12);
    }

    #[test]
    fn test_vertices_on_unit_sphere() {
        assert_on_unit_sphere(&Octahedron::new());
    }

    #[test]
    fn test_edges() {
        let o = Octahedron::new();
        assert_edges_well_formed(&o);
        assert_edges_are_nearest_neighbours(&o);
        assert_vertex_degree(&o, 4);
    }

    #[test]
    fn test_no_antipodal_edges() {
        let o = Octahedron::new();
        for e in o.edges() {
            let (p, q) = (o.vertices()[e.a], o.vertices()[e.b]);
            assert_ne!(p, -q, "edge {:?} passes through the centre", e);
        }
    }

    #[test]
    fn test_edge_length() {
        let o = Octahedron::new();
        for e in o.edges() {
            assert!((e.length(o.vertices()) - Octahedron::edge_length()).abs() < EPSILON);
        }
    }
}
