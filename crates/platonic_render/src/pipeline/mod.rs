//! Rendering pipeline components
//!
//! A single line-list pipeline draws both the rotating scene and the
//! screen-stable overlay, each with its own transform.

pub mod types;
pub mod line_pipeline;

// Re-export types
pub use types::{LineVertex, LineUniforms, MAX_LINE_VERTICES};

// Re-export pipelines
pub use line_pipeline::LinePipeline;
