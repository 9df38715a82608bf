//! Platonic Viewer
//!
//! Shows one Platonic solid at a time as a continuously rotating wireframe,
//! together with the coordinate axes and a fixed reference circle.
//! Keys 1-5 switch the solid; closing the window or Escape quits.

use std::process::ExitCode;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use platonic_input::ViewController;
use platonic_math::SolidKind;
use platonic_render::{RenderError, WireframeStyle};

use platonic_viewer::config::AppConfig;
use platonic_viewer::input::{InputAction, InputMapper};
use platonic_viewer::systems::{FrameSystem, RenderSystem, WindowSystem};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window_system: Option<WindowSystem>,
    render_system: Option<RenderSystem>,
    /// Selected solid and rotation
    controller: ViewController,
    frame_system: FrameSystem,
    style: WireframeStyle,
    /// Solid currently named in the window title
    titled_solid: Option<SolidKind>,
    /// Set when the window or GPU could not be initialized
    startup_error: Option<String>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let controller = config.view.to_controller();
        let frame_system = FrameSystem::new(config.view.frame_idle());
        let style = config.rendering.to_wireframe_style();

        log::info!(
            "Initial solid: {}, rotating {}° per frame",
            controller.selected(),
            controller.step_degrees
        );

        Self {
            config,
            window_system: None,
            render_system: None,
            controller,
            frame_system,
            style,
            titled_solid: None,
            startup_error: None,
        }
    }

    /// Record a fatal startup failure and leave the event loop
    fn fail_startup(&mut self, event_loop: &ActiveEventLoop, message: String) {
        log::error!("{}", message);
        self.startup_error = Some(message);
        self.quit(event_loop);
    }

    /// Stop producing frames and leave the event loop
    fn quit(&mut self, event_loop: &ActiveEventLoop) {
        self.frame_system.terminate();
        event_loop.exit();
    }

    /// Step, draw and present one frame
    fn draw_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(frame) = self.frame_system.update(&mut self.controller, &self.style) else {
            return;
        };

        if self.titled_solid != Some(frame.solid) {
            if let Some(window_system) = &self.window_system {
                window_system.update_title(frame.solid);
            }
            log::info!(
                "Drawing {}: {} lines",
                frame.solid,
                frame.geometry.line_count()
            );
            self.titled_solid = Some(frame.solid);
        }

        if let Some(render_system) = &mut self.render_system {
            match render_system.render_frame(frame.model, &frame.geometry) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => {
                    log::debug!("Surface lost, reconfigured");
                }
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory, exiting");
                    self.quit(event_loop);
                    return;
                }
                Err(e) => {
                    log::warn!("Skipping frame: {}", e);
                }
            }
        }

        self.frame_system.end_frame();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window_system.is_some() {
            return;
        }

        let window_system = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window_system) => window_system,
            Err(e) => return self.fail_startup(event_loop, e.to_string()),
        };

        let render_system = match RenderSystem::new(
            window_system.window().clone(),
            &self.config.rendering,
            self.config.window.vsync,
        ) {
            Ok(render_system) => render_system,
            Err(e) => return self.fail_startup(event_loop, format!("Graphics initialization failed: {}", e)),
        };

        let (width, height) = render_system.size();
        log::info!("Render surface ready at {}x{}", width, height);

        window_system.request_redraw();
        self.window_system = Some(window_system);
        self.render_system = Some(render_system);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.quit(event_loop);
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match InputMapper::map_keyboard(key, event.state) {
                        Some(InputAction::Exit) => self.quit(event_loop),
                        Some(InputAction::ResetView) => {
                            self.controller.reset_rotation();
                            log::info!("Rotation reset");
                        }
                        None => {
                            self.controller.process_keyboard(key, event.state);
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.draw_frame(event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.frame_system.is_running() {
            return;
        }

        if self.frame_system.frame_due(Instant::now()) {
            if let Some(window_system) = &self.window_system {
                window_system.request_redraw();
            }
        }

        // Sleep until the next frame unless input arrives first
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.frame_system.next_frame()));
    }
}

fn main() -> ExitCode {
    // Load configuration before logging so the configured level applies
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Platonic Viewer");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        return ExitCode::FAILURE;
    }

    match app.startup_error {
        Some(_) => ExitCode::FAILURE,
        None => {
            log::info!("Exited after {} frames", app.frame_system.frame_count());
            ExitCode::SUCCESS
        }
    }
}
