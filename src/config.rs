//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`PV_SECTION__KEY`)
//!
//! Every field has a default, so a missing file or section leaves the
//! viewer at 800×800, starting on the cube, turning 1° per frame.

use figment::{Figment, providers::{Format, Toml, Env}};
use platonic_input::ViewController;
use platonic_math::{SolidKind, Vec3};
use platonic_render::{OrthoCamera, WireframeStyle};
use serde::{Serialize, Deserialize};
use std::path::Path;
use std::time::Duration;

/// Upper bound on the idle time between frames
pub const MAX_FRAME_IDLE_MS: u64 = 1000;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Solid selection and rotation
    #[serde(default)]
    pub view: ViewConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`PV_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // PV_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("PV_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title (the selected solid's name is appended)
    pub title: String,
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Platonic Solids".to_string(),
            width: 800,
            height: 800,
            vsync: true,
        }
    }
}

/// Solid selection and rotation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Solid shown before any key is pressed
    pub initial_solid: SolidKind,
    /// Rotation applied every frame, in degrees
    pub rotation_step_degrees: f32,
    /// Rotation axis [x, y, z]
    pub rotation_axis: [f32; 3],
    /// Idle time after each presented frame, in milliseconds
    pub frame_idle_ms: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            initial_solid: SolidKind::Cube,
            rotation_step_degrees: 1.0,
            rotation_axis: [1.0, 1.0, 1.0],
            frame_idle_ms: 10,
        }
    }
}

impl ViewConfig {
    /// Build a controller starting from this configuration
    pub fn to_controller(&self) -> ViewController {
        ViewController::new()
            .with_initial_solid(self.initial_solid)
            .with_step_degrees(self.rotation_step_degrees)
            .with_axis(Vec3::from_array(self.rotation_axis))
    }

    /// Idle time between frames, capped at [`MAX_FRAME_IDLE_MS`]
    pub fn frame_idle(&self) -> Duration {
        Duration::from_millis(self.frame_idle_ms.min(MAX_FRAME_IDLE_MS))
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Color of the solid's edges
    pub solid_color: [f32; 4],
    /// Color of the reference circle
    pub circle_color: [f32; 4],
    /// Length of each coordinate axis
    pub axis_length: f32,
    /// Radius of the reference circle
    pub circle_radius: f32,
    /// Segments approximating the reference circle
    pub circle_segments: u32,
    /// Half-size of the orthographic view box
    pub view_extent: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            solid_color: [1.0, 1.0, 1.0, 1.0],
            circle_color: [1.0, 0.0, 1.0, 1.0],
            axis_length: 1.5,
            circle_radius: 1.0,
            circle_segments: 36,
            view_extent: 2.0,
        }
    }
}

impl RenderingConfig {
    /// Line colors and sizes for the wireframe builder
    pub fn to_wireframe_style(&self) -> WireframeStyle {
        WireframeStyle {
            solid_color: self.solid_color,
            circle_color: self.circle_color,
            axis_length: self.axis_length,
            circle_radius: self.circle_radius,
            circle_segments: self.circle_segments,
        }
    }

    /// Camera covering the configured view box
    pub fn to_camera(&self) -> OrthoCamera {
        OrthoCamera::new(self.view_extent)
    }

    /// Background as a wgpu clear color
    pub fn clear_color(&self) -> wgpu::Color {
        let bg = &self.background_color;
        wgpu::Color {
            r: bg[0] as f64,
            g: bg[1] as f64,
            b: bg[2] as f64,
            a: bg[3] as f64,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace); `RUST_LOG` takes precedence
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
