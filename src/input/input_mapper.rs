//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to high-level actions like Exit.
//! Solid selector keys (1-5) are NOT mapped here - they go directly to the
//! ViewController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by special input (not solid selection)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Reset the rotation to its starting angle (R key)
    ResetView,
}

/// Maps raw input events to semantic actions
///
/// Selector keys are NOT mapped here - they go directly to the
/// ViewController. This mapper handles "special" keys only.
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for special keys, `None` otherwise
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyR => Some(InputAction::ResetView),
            _ => None,
        }
    }
}
