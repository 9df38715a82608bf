//! Wireframe Rendering Library
//!
//! This crate provides the wgpu-based line renderer for displaying the
//! rotating Platonic solids.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::OrthoCamera`] - Fixed orthographic projection
//! - [`pipeline::LinePipeline`] - Line-list rendering with a scene and an overlay range
//! - [`wireframe::WireframeGeometry`] - Builds a frame's axes, solid and circle lines

pub mod context;
pub mod camera;
pub mod pipeline;
pub mod wireframe;

pub use context::{RenderContext, RenderError};
pub use camera::{OrthoCamera, orthographic_matrix};

// Re-export core types for convenience
pub use platonic_math::{Mat4, Solid, SolidKind, Vec3};

pub use wireframe::{WireframeGeometry, WireframeStyle, AXIS_COLORS};
