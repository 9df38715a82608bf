//! Platonic Viewer - rotating wireframes of the five Platonic solids
//!
//! The binary wires these modules into a winit event loop; they are exposed
//! as a library so integration tests can drive them without a window.

pub mod config;
pub mod input;
pub mod systems;
