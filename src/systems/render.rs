//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Line pipeline
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use platonic_math::{mat4, Mat4};
use platonic_render::{
    context::RenderContext,
    pipeline::LinePipeline,
    OrthoCamera, RenderError, WireframeGeometry,
};
use crate::config::RenderingConfig;

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    line_pipeline: LinePipeline,
    camera: OrthoCamera,
    clear_color: wgpu::Color,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: &RenderingConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let mut line_pipeline = LinePipeline::new(&context.device, context.config.format);
        line_pipeline.ensure_depth_texture(
            &context.device,
            context.size.width,
            context.size.height,
        );

        Ok(Self {
            context,
            line_pipeline,
            camera: render_config.to_camera(),
            clear_color: render_config.clear_color(),
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.line_pipeline
            .ensure_depth_texture(&self.context.device, width, height);
    }

    /// Render a single frame
    ///
    /// `model` rotates the scene lines; the overlay only gets the projection.
    pub fn render_frame(
        &mut self,
        model: Mat4,
        geometry: &WireframeGeometry,
    ) -> Result<(), RenderError> {
        let projection = self.camera.projection_matrix();
        self.line_pipeline.update_transforms(
            &self.context.queue,
            mat4::mul(projection, model),
            projection,
        );
        self.line_pipeline.upload_lines(&self.context.queue, geometry);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.context.reconfigure();
                return Err(RenderError::SurfaceLost);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        if !self.line_pipeline.render(&mut encoder, &view, self.clear_color) {
            return Err(RenderError::Other("depth texture missing".to_string()));
        }

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}
