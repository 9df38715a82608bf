//! View Input Handling
//!
//! This crate turns keyboard input into the viewer's [`ViewState`]:
//! number keys select the displayed solid, and the controller advances the
//! continuous rotation once per frame.

mod view_controller;

pub use view_controller::{solid_for_key, ViewController, ViewState};
