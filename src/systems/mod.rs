//! Application systems
//!
//! Window, rendering and per-frame stepping, kept out of main.rs so each
//! piece can be tested on its own.

mod frame;
mod render;
mod window;

pub use frame::{FrameResult, FrameSystem, LoopState};
pub use render::RenderSystem;
pub use window::{WindowError, WindowSystem};
