//! View controller for solid selection and rotation
//!
//! Controls:
//! - 1-5 (top row or numpad): select tetrahedron, cube, octahedron,
//!   dodecahedron, icosahedron
//!
//! Rotation is not user-driven: every frame the model turns by a fixed step
//! about a fixed axis.

use platonic_math::{mat4, Mat4, SolidKind, Vec3};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Map a key to the solid it selects, if any
pub fn solid_for_key(key: KeyCode) -> Option<SolidKind> {
    let digit = match key {
        KeyCode::Digit1 | KeyCode::Numpad1 => 1,
        KeyCode::Digit2 | KeyCode::Numpad2 => 2,
        KeyCode::Digit3 | KeyCode::Numpad3 => 3,
        KeyCode::Digit4 | KeyCode::Numpad4 => 4,
        KeyCode::Digit5 | KeyCode::Numpad5 => 5,
        _ => return None,
    };
    SolidKind::from_digit(digit)
}

/// Everything that persists between frames
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Solid currently on screen
    pub selected: SolidKind,
    /// Accumulated rotation angle, kept in [0, 360)
    pub rotation_degrees: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selected: SolidKind::default(),
            rotation_degrees: 0.0,
        }
    }
}

/// Owns the [`ViewState`] and applies input and per-frame rotation to it
pub struct ViewController {
    state: ViewState,

    // Configuration
    pub step_degrees: f32,
    pub axis: Vec3,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewController {
    pub fn new() -> Self {
        Self {
            state: ViewState::default(),
            step_degrees: 1.0,
            axis: Vec3::new(1.0, 1.0, 1.0),
        }
    }

    /// Builder: set the solid shown before any key is pressed
    pub fn with_initial_solid(mut self, kind: SolidKind) -> Self {
        self.state.selected = kind;
        self
    }

    /// Builder: set the rotation applied each frame, in degrees
    pub fn with_step_degrees(mut self, degrees: f32) -> Self {
        self.step_degrees = degrees;
        self
    }

    /// Builder: set the rotation axis (normalized when the matrix is built)
    pub fn with_axis(mut self, axis: Vec3) -> Self {
        self.axis = axis;
        self
    }

    /// Current view state
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Solid currently selected
    pub fn selected(&self) -> SolidKind {
        self.state.selected
    }

    /// Process keyboard input
    ///
    /// Returns true when the key was a solid selector. Only presses change
    /// the selection.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let Some(kind) = solid_for_key(key) else {
            return false;
        };

        if state == ElementState::Pressed && kind != self.state.selected {
            log::info!("Selected {} (key {})", kind, kind.digit());
            self.state.selected = kind;
        }
        true
    }

    /// Apply one frame's worth of rotation
    pub fn advance(&mut self) {
        self.state.rotation_degrees = (self.state.rotation_degrees + self.step_degrees).rem_euclid(360.0);
    }

    /// Return the rotation to its starting angle, keeping the selection
    pub fn reset_rotation(&mut self) {
        self.state.rotation_degrees = 0.0;
    }

    /// Model rotation for the current state
    pub fn model_matrix(&self) -> Mat4 {
        mat4::axis_angle_rotation(self.axis, self.state.rotation_degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = ViewController::new();
        assert_eq!(c.selected(), SolidKind::Cube);
        assert_eq!(c.state().rotation_degrees, 0.0);
        assert_eq!(c.step_degrees, 1.0);
    }

    #[test]
    fn test_digit_keys_select_solids() {
        let mut c = ViewController::new();
        let keys = [
            (KeyCode::Digit1, SolidKind::Tetrahedron),
            (KeyCode::Digit2, SolidKind::Cube),
            (KeyCode::Digit3, SolidKind::Octahedron),
            (KeyCode::Digit4, SolidKind::Dodecahedron),
            (KeyCode::Digit5, SolidKind::Icosahedron),
        ];
        for (key, kind) in keys {
            assert!(c.process_keyboard(key, ElementState::Pressed));
            assert_eq!(c.selected(), kind);
        }
    }

    #[test]
    fn test_numpad_keys_select_solids() {
        let mut c = ViewController::new();
        assert!(c.process_keyboard(KeyCode::Numpad4, ElementState::Pressed));
        assert_eq!(c.selected(), SolidKind::Dodecahedron);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut c = ViewController::new();
        assert!(c.process_keyboard(KeyCode::Digit5, ElementState::Released));
        assert_eq!(c.selected(), SolidKind::Cube);
    }

    #[test]
    fn test_other_keys_not_consumed() {
        let mut c = ViewController::new().with_initial_solid(SolidKind::Octahedron);
        for key in [KeyCode::Digit0, KeyCode::Digit6, KeyCode::KeyW, KeyCode::Escape] {
            assert!(!c.process_keyboard(key, ElementState::Pressed), "{:?}", key);
        }
        assert_eq!(c.selected(), SolidKind::Octahedron);
    }

    #[test]
    fn test_selection_keeps_rotation() {
        let mut c = ViewController::new();
        c.advance();
        c.advance();
        c.process_keyboard(KeyCode::Digit1, ElementState::Pressed);
        assert_eq!(c.state().rotation_degrees, 2.0);
    }

    #[test]
    fn test_advance_accumulates_and_wraps() {
        let mut c = ViewController::new().with_step_degrees(100.0);
        c.advance();
        c.advance();
        c.advance();
        assert_eq!(c.state().rotation_degrees, 300.0);
        c.advance();
        assert!((c.state().rotation_degrees - 40.0).abs() < 1e-4);
    }

    #[test]
    fn test_reset_rotation() {
        let mut c = ViewController::new().with_initial_solid(SolidKind::Icosahedron);
        c.advance();
        c.reset_rotation();
        assert_eq!(c.state().rotation_degrees, 0.0);
        assert_eq!(c.selected(), SolidKind::Icosahedron);
    }

    #[test]
    fn test_model_matrix_follows_rotation() {
        let mut c = ViewController::new().with_axis(Vec3::Z).with_step_degrees(90.0);
        assert_eq!(c.model_matrix(), mat4::IDENTITY);
        c.advance();
        let p = mat4::transform_point(&c.model_matrix(), Vec3::X);
        assert!((p - Vec3::Y).length() < 1e-5);
    }
}
