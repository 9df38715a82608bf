//! Shape traits and primitives for wireframe geometry
//!
//! Shapes are pure geometric data - no colors or rendering info.

use crate::Vec3;

/// An unordered edge between two vertices, stored in canonical form
///
/// The smaller index is always `a`, so two edges connecting the same pair
/// of vertices compare equal regardless of construction order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    /// Smaller vertex index
    pub a: usize,
    /// Larger vertex index
    pub b: usize,
}

impl Edge {
    /// Create an edge between two distinct vertices
    #[inline]
    pub fn new(i: usize, j: usize) -> Self {
        debug_assert_ne!(i, j, "edge endpoints must be distinct");
        Self {
            a: i.min(j),
            b: i.max(j),
        }
    }

    /// Both endpoints as an array
    #[inline]
    pub fn indices(&self) -> [usize; 2] {
        [self.a, self.b]
    }

    /// Euclidean length of this edge within the given vertex set
    pub fn length(&self, vertices: &[Vec3]) -> f32 {
        vertices[self.a].distance(vertices[self.b])
    }
}

impl From<(usize, usize)> for Edge {
    fn from((i, j): (usize, usize)) -> Self {
        Self::new(i, j)
    }
}

/// Trait for shapes that can be drawn as a wireframe
///
/// A WireframeShape provides:
/// - Vertices: points on (or inside) the unit sphere
/// - Edges: pairs of vertex indices to connect with a line
pub trait WireframeShape {
    /// Get the vertices of this shape
    fn vertices(&self) -> &[Vec3];

    /// Get the edges of this shape
    fn edges(&self) -> &[Edge];

    /// Get the number of vertices
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Get the number of edges
    #[inline]
    fn edge_count(&self) -> usize {
        self.edges().len()
    }
}

/// Connect every unordered vertex pair closer than `threshold`
///
/// Brute-force O(n²) scan; the solids using it have at most 20 vertices.
pub fn infer_edges(vertices: &[Vec3], threshold: f32) -> Vec<Edge> {
    let mut edges = Vec::new();
    for (i, &vi) in vertices.iter().enumerate() {
        for (j, &vj) in vertices.iter().enumerate().skip(i + 1) {
            if vi.distance(vj) < threshold {
                edges.push(Edge::new(i, j));
            }
        }
    }
    edges
}

/// Largest distance from the origin over a vertex set
pub fn max_radius(vertices: &[Vec3]) -> f32 {
    vertices.iter().map(|v| v.length()).fold(0.0, f32::max)
}

/// Scale vertices so the farthest one lies on the unit sphere
pub fn normalize_to_unit_sphere(vertices: &mut [Vec3]) {
    let radius = max_radius(vertices);
    if radius > 0.0 {
        for v in vertices.iter_mut() {
            *v = *v / radius;
        }
    }
}
