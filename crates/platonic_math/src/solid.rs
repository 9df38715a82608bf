//! Solid selection
//!
//! [`SolidKind`] enumerates the five Platonic solids and [`SolidKind::generate`]
//! is the single place that maps a kind to its geometry.

use serde::{Deserialize, Serialize};

use crate::{
    shape::{Edge, WireframeShape},
    Cube, Dodecahedron, Icosahedron, Octahedron, Tetrahedron, Vec3,
};

/// The five Platonic solids
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolidKind {
    Tetrahedron,
    #[default]
    Cube,
    Octahedron,
    Dodecahedron,
    Icosahedron,
}

impl SolidKind {
    /// All kinds, ordered by their selector digit
    pub const ALL: [SolidKind; 5] = [
        SolidKind::Tetrahedron,
        SolidKind::Cube,
        SolidKind::Octahedron,
        SolidKind::Dodecahedron,
        SolidKind::Icosahedron,
    ];

    /// Map a selector digit (1-5) to a solid
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            1..=5 => Some(Self::ALL[usize::from(digit - 1)]),
            _ => None,
        }
    }

    /// Selector digit for this solid (1-5)
    pub fn digit(self) -> u8 {
        match self {
            SolidKind::Tetrahedron => 1,
            SolidKind::Cube => 2,
            SolidKind::Octahedron => 3,
            SolidKind::Dodecahedron => 4,
            SolidKind::Icosahedron => 5,
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            SolidKind::Tetrahedron => "Tetrahedron",
            SolidKind::Cube => "Cube",
            SolidKind::Octahedron => "Octahedron",
            SolidKind::Dodecahedron => "Dodecahedron",
            SolidKind::Icosahedron => "Icosahedron",
        }
    }

    /// Number of vertices of this solid
    pub fn expected_vertex_count(self) -> usize {
        match self {
            SolidKind::Tetrahedron => 4,
            SolidKind::Cube => 8,
            SolidKind::Octahedron => 6,
            SolidKind::Dodecahedron => 20,
            SolidKind::Icosahedron => 12,
        }
    }

    /// Number of edges of this solid
    pub fn expected_edge_count(self) -> usize {
        match self {
            SolidKind::Tetrahedron => 6,
            SolidKind::Cube | SolidKind::Octahedron => 12,
            SolidKind::Dodecahedron | SolidKind::Icosahedron => 30,
        }
    }

    /// Generate fresh geometry for this solid
    pub fn generate(self) -> Solid {
        let solid = match self {
            SolidKind::Tetrahedron => Solid::from_shape(self, &Tetrahedron::new()),
            SolidKind::Cube => Solid::from_shape(self, &Cube::new()),
            SolidKind::Octahedron => Solid::from_shape(self, &Octahedron::new()),
            SolidKind::Dodecahedron => Solid::from_shape(self, &Dodecahedron::new()),
            SolidKind::Icosahedron => Solid::from_shape(self, &Icosahedron::new()),
        };
        log::debug!(
            "Generated {}: {} vertices, {} edges",
            self,
            solid.vertex_count(),
            solid.edge_count()
        );
        solid
    }
}

impl std::fmt::Display for SolidKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Owned geometry of one solid: vertices plus the edges joining them
#[derive(Clone, Debug, PartialEq)]
pub struct Solid {
    kind: SolidKind,
    vertices: Vec<Vec3>,
    edges: Vec<Edge>,
}

impl Solid {
    /// Copy the geometry out of any wireframe shape
    pub fn from_shape(kind: SolidKind, shape: &impl WireframeShape) -> Self {
        Self {
            kind,
            vertices: shape.vertices().to_vec(),
            edges: shape.edges().to_vec(),
        }
    }

    /// Which solid this is
    pub fn kind(&self) -> SolidKind {
        self.kind
    }

    /// Endpoints of every edge, in edge order
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.edges
            .iter()
            .map(|e| (self.vertices[e.a], self.vertices[e.b]))
    }
}

impl WireframeShape for Solid {
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
    fn test_digit_round_trip() {
        for (i, kind) in SolidKind::ALL.iter().enumerate() {
            assert_eq!(kind.digit() as usize, i + 1);
            assert_eq!(SolidKind::from_digit(kind.digit()), Some(*kind));
        }
    }

    #[test]
    fn test_invalid_digits() {
        assert_eq!(SolidKind::from_digit(0), None);
        assert_eq!(SolidKind::from_digit(6), None);
        assert_eq!(SolidKind::from_digit(9), None);
    }

    #[test]
    fn test_default_is_cube() {
        assert_eq!(SolidKind::default(), SolidKind::Cube);
    }

    #[test]
    fn test_generated_counts() {
        for kind in SolidKind::ALL {
            let solid = kind.generate();
            assert_eq!(solid.kind(), kind);
            assert_eq!(solid.vertex_count(), kind.expected_vertex_count(), "{}", kind);
            assert_eq!(solid.edge_count(), kind.expected_edge_count(), "{}", kind);
        }
    }

    #[test]
    fn test_generated_geometry_is_regular() {
        for kind in SolidKind::ALL {
            let solid = kind.generate();
            assert_on_unit_sphere(&solid);
            assert_edges_well_formed(&solid);
            assert_edges_are_nearest_neighbours(&solid);
        }
    }

    #[test]
    fn test_euler_characteristic() {
        // V - E + F = 2 with F = 4, 6, 8, 12, 20
        let faces = [4, 6, 8, 12, 20];
        for (kind, f) in SolidKind::ALL.iter().zip(faces) {
            let solid = kind.generate();
            let chi = solid.vertex_count() as i64 - solid.edge_count() as i64 + f;
            assert_eq!(chi, 2, "{}", kind);
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        for kind in SolidKind::ALL {
            assert_eq!(kind.generate(), kind.generate());
        }
    }

    #[test]
    fn test_segments_follow_edges() {
        let solid = SolidKind::Octahedron.generate();
        let segments: Vec<_> = solid.segments().collect();
        assert_eq!(segments.len(), 12);
        let first = solid.edges()[0];
        assert_eq!(segments[0], (solid.vertices()[first.a], solid.vertices()[first.b]));
    }

    #[test]
    fn test_display_and_serde_names() {
        use serde::de::{value::{Error, StrDeserializer}, IntoDeserializer};

        assert_eq!(SolidKind::Icosahedron.to_string(), "Icosahedron");

        let de: StrDeserializer<'_, Error> = "dodecahedron".into_deserializer();
        assert_eq!(SolidKind::deserialize(de).unwrap(), SolidKind::Dodecahedron);
    }
}
