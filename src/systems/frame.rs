//! Per-frame stepping
//!
//! Owns the loop state machine (Running → Terminated) and the frame pacing.
//! Each frame:
//! - Advances the rotation
//! - Regenerates the selected solid
//! - Builds the line geometry for the renderer

use std::time::{Duration, Instant};
use platonic_input::ViewController;
use platonic_math::{Mat4, SolidKind};
use platonic_render::{WireframeGeometry, WireframeStyle};

/// Lifecycle of the render loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Frames are being produced
    Running,
    /// A quit was requested; no further frames
    Terminated,
}

/// Everything the renderer needs for one frame
pub struct FrameResult {
    /// Solid drawn this frame
    pub solid: SolidKind,
    /// Model rotation for the scene lines
    pub model: Mat4,
    /// Line vertices for the scene and overlay
    pub geometry: WireframeGeometry,
}

/// Drives the frame loop
pub struct FrameSystem {
    state: LoopState,
    idle: Duration,
    next_frame: Instant,
    frames: u64,
}

impl FrameSystem {
    /// Create a running frame system that idles `idle` after each frame
    pub fn new(idle: Duration) -> Self {
        Self {
            state: LoopState::Running,
            idle,
            next_frame: Instant::now(),
            frames: 0,
        }
    }

    /// Current loop state
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Whether frames are still being produced
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Stop producing frames
    pub fn terminate(&mut self) {
        if self.state == LoopState::Running {
            log::info!("Terminating after {} frames", self.frames);
            self.state = LoopState::Terminated;
        }
    }

    /// Run one frame step
    ///
    /// Returns `None` once the loop has terminated.
    pub fn update(
        &mut self,
        controller: &mut ViewController,
        style: &WireframeStyle,
    ) -> Option<FrameResult> {
        if !self.is_running() {
            return None;
        }

        controller.advance();

        let kind = controller.selected();
        let solid = kind.generate();
        let geometry = WireframeGeometry::for_frame(&solid, style);

        Some(FrameResult {
            solid: kind,
            model: controller.model_matrix(),
            geometry,
        })
    }

    /// Record that a frame finished (presented or skipped) and schedule the next one
    pub fn end_frame(&mut self) {
        self.frames += 1;
        self.next_frame = Instant::now() + self.idle;
    }

    /// Earliest time the next frame should start
    pub fn next_frame(&self) -> Instant {
        self.next_frame
    }

    /// Whether the idle period has elapsed at `now`
    pub fn frame_due(&self, now: Instant) -> bool {
        self.is_running() && now >= self.next_frame
    }

    /// Number of frames finished so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platonic_math::WireframeShape;

    #[test]
    fn test_starts_running() {
        let frames = FrameSystem::new(Duration::from_millis(10));
        assert_eq!(frames.state(), LoopState::Running);
        assert!(frames.frame_due(Instant::now()));
    }

    #[test]
    fn test_update_advances_rotation() {
        let mut frames = FrameSystem::new(Duration::ZERO);
        let mut controller = ViewController::new();
        let style = WireframeStyle::default();

        frames.update(&mut controller, &style);
        frames.update(&mut controller, &style);
        assert_eq!(controller.state().rotation_degrees, 2.0);
    }

    #[test]
    fn test_update_draws_selected_solid() {
        let mut frames = FrameSystem::new(Duration::ZERO);
        let mut controller = ViewController::new().with_initial_solid(SolidKind::Dodecahedron);
        let style = WireframeStyle::default();

        let result = frames.update(&mut controller, &style).unwrap();
        assert_eq!(result.solid, SolidKind::Dodecahedron);
        let solid = SolidKind::Dodecahedron.generate();
        assert_eq!(result.geometry.scene_vertex_count(), 6 + 2 * solid.edge_count());
        assert_eq!(result.model, controller.model_matrix());
    }

    #[test]
    fn test_terminated_produces_no_frames() {
        let mut frames = FrameSystem::new(Duration::ZERO);
        let mut controller = ViewController::new();
        frames.terminate();

        assert_eq!(frames.state(), LoopState::Terminated);
        assert!(frames.update(&mut controller, &WireframeStyle::default()).is_none());
        assert!(!frames.frame_due(Instant::now()));
        // Rotation is untouched once terminated
        assert_eq!(controller.state().rotation_degrees, 0.0);
    }

    #[test]
    fn test_idle_schedules_next_frame() {
        let mut frames = FrameSystem::new(Duration::from_millis(50));
        let before = Instant::now();
        frames.end_frame();
        assert_eq!(frames.frame_count(), 1);
        assert!(frames.next_frame() >= before + Duration::from_millis(50));
        assert!(!frames.frame_due(before));
    }
}
