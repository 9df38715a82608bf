//! Geometry Library
//!
//! This crate provides the 3D vector and matrix types plus the vertex/edge
//! generators for the five Platonic solids.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Mat4`] - 4x4 column-major matrix for transformations
//!
//! ## Shape Types
//!
//! - [`WireframeShape`] - Trait for shapes drawn as a set of edges
//! - [`Edge`] - An unordered pair of vertex indices
//! - [`Tetrahedron`], [`Cube`], [`Octahedron`], [`Dodecahedron`], [`Icosahedron`]
//! - [`SolidKind`] / [`Solid`] - Enumerated selection and owned geometry
//!
//! Every solid is normalized so its vertices lie on the unit sphere.

mod vec3;
pub mod mat4;
pub mod shape;
pub mod tetrahedron;
pub mod cube;
pub mod octahedron;
pub mod dodecahedron;
pub mod icosahedron;
pub mod solid;

pub use vec3::Vec3;
pub use mat4::Mat4;
pub use shape::{Edge, WireframeShape, infer_edges};
pub use tetrahedron::Tetrahedron;
pub use cube::Cube;
pub use octahedron::Octahedron;
pub use dodecahedron::Dodecahedron;
pub use icosahedron::Icosahedron;
pub use solid::{Solid, SolidKind};

/// The golden ratio φ = (1 + √5) / 2
pub const PHI: f32 = 1.618_034;
