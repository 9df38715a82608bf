//! Line pipeline for wireframe display
//!
//! Draws a line list in two ranges: the scene (axes and solid), transformed
//! by projection * model, followed by the overlay (reference circle),
//! transformed by projection alone so it does not follow the rotation.

use platonic_math::Mat4;
use wgpu::util::DeviceExt;

use super::types::{LineUniforms, LineVertex, MAX_LINE_VERTICES};
use crate::wireframe::WireframeGeometry;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Render pipeline for line lists
pub struct LinePipeline {
    /// The render pipeline
    pipeline: wgpu::RenderPipeline,
    /// Uniform buffer for the rotating scene
    scene_uniform_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    /// Uniform buffer for the stabilized overlay
    overlay_uniform_buffer: wgpu::Buffer,
    overlay_bind_group: wgpu::BindGroup,
    /// Vertex buffer, rewritten every frame
    vertex_buffer: wgpu::Buffer,
    scene_vertex_count: u32,
    overlay_vertex_count: u32,
    /// Depth texture
    depth_texture: Option<wgpu::TextureView>,
    depth_size: (u32, u32),
}

impl LinePipeline {
    /// Create a new line pipeline
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Line Bind Group Layout"),
            entries: &[
                // Uniforms
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Line Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader_source = include_str!("../shaders/line.wgsl");
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Line Shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Line Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Self::vertex_buffer_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let (scene_uniform_buffer, scene_bind_group) =
            Self::create_uniforms(device, &bind_group_layout, "Scene");
        let (overlay_uniform_buffer, overlay_bind_group) =
            Self::create_uniforms(device, &bind_group_layout, "Overlay");

        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Line Vertex Buffer"),
            size: (MAX_LINE_VERTICES * std::mem::size_of::<LineVertex>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            pipeline,
            scene_uniform_buffer,
            scene_bind_group,
            overlay_uniform_buffer,
            overlay_bind_group,
            vertex_buffer,
            scene_vertex_count: 0,
            overlay_vertex_count: 0,
            depth_texture: None,
            depth_size: (0, 0),
        }
    }

    fn create_uniforms(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        name: &str,
    ) -> (wgpu::Buffer, wgpu::BindGroup) {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Uniform Buffer", name)),
            contents: bytemuck::bytes_of(&LineUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{} Bind Group", name)),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        (buffer, bind_group)
    }

    /// Get the vertex buffer layout for LineVertex
    fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position: vec3<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                // color: vec4<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 16,
                    shader_location: 1,
                },
            ],
        }
    }

    /// Update the scene and overlay transforms
    pub fn update_transforms(&self, queue: &wgpu::Queue, scene: Mat4, overlay: Mat4) {
        queue.write_buffer(
            &self.scene_uniform_buffer,
            0,
            bytemuck::bytes_of(&LineUniforms { transform: scene }),
        );
        queue.write_buffer(
            &self.overlay_uniform_buffer,
            0,
            bytemuck::bytes_of(&LineUniforms { transform: overlay }),
        );
    }

    /// Upload this frame's lines
    ///
    /// Anything past the buffer capacity is dropped with a warning.
    pub fn upload_lines(&mut self, queue: &wgpu::Queue, geometry: &WireframeGeometry) {
        let (scene, overlay) = Self::fit_to_capacity(
            geometry.scene_vertex_count(),
            geometry.overlay_vertex_count(),
        );
        if scene + overlay < geometry.vertex_count() {
            log::warn!(
                "Line buffer holds {} vertices, dropping {}",
                MAX_LINE_VERTICES,
                geometry.vertex_count() - scene - overlay
            );
        }

        let vertices: Vec<LineVertex> = geometry.scene[..scene]
            .iter()
            .chain(&geometry.overlay[..overlay])
            .copied()
            .collect();
        if !vertices.is_empty() {
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        }

        self.scene_vertex_count = scene as u32;
        self.overlay_vertex_count = overlay as u32;
    }

    /// Clamp the two ranges to the buffer, scene first, whole lines only
    fn fit_to_capacity(scene: usize, overlay: usize) -> (usize, usize) {
        let scene = scene.min(MAX_LINE_VERTICES) & !1;
        let overlay = overlay.min(MAX_LINE_VERTICES - scene) & !1;
        (scene, overlay)
    }

    /// Ensure depth texture exists and is the right size
    pub fn ensure_depth_texture(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if self.depth_texture.is_none() || self.depth_size != (width, height) {
            let depth_texture = device.create_texture(&wgpu::TextureDescriptor {
                label: Some("Depth Texture"),
                size: wgpu::Extent3d {
                    width: width.max(1),
                    height: height.max(1),
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: DEPTH_FORMAT,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            });

            self.depth_texture = Some(depth_texture.create_view(&wgpu::TextureViewDescriptor::default()));
            self.depth_size = (width, height);
        }
    }

    /// Clear color and depth, then draw the scene and overlay ranges
    ///
    /// Returns false without recording anything if no depth texture exists.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        clear_color: wgpu::Color,
    ) -> bool {
        let Some(depth_view) = self.depth_texture.as_ref() else {
            log::warn!("Depth texture not created; call ensure_depth_texture first");
            return false;
        };

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Line Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));

        let scene_end = self.scene_vertex_count;
        if scene_end > 0 {
            render_pass.set_bind_group(0, &self.scene_bind_group, &[]);
            render_pass.draw(0..scene_end, 0..1);
        }

        let overlay_end = scene_end + self.overlay_vertex_count;
        if overlay_end > scene_end {
            render_pass.set_bind_group(0, &self.overlay_bind_group, &[]);
            render_pass.draw(scene_end..overlay_end, 0..1);
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_buffer_layout_stride() {
        let layout = LinePipeline::vertex_buffer_layout();
        assert_eq!(layout.array_stride, std::mem::size_of::<LineVertex>() as u64);
        assert_eq!(layout.attributes[1].offset, 16);
    }

    #[test]
    fn test_fit_within_capacity() {
        assert_eq!(LinePipeline::fit_to_capacity(66, 72), (66, 72));
    }

    #[test]
    fn test_fit_truncates_overlay_first() {
        let (scene, overlay) = LinePipeline::fit_to_capacity(MAX_LINE_VERTICES - 10, 72);
        assert_eq!(scene, MAX_LINE_VERTICES - 10);
        assert_eq!(overlay, 10);
    }

    #[test]
    fn test_fit_keeps_whole_lines() {
        let (scene, overlay) = LinePipeline::fit_to_capacity(MAX_LINE_VERTICES + 5, 4);
        assert_eq!(scene % 2, 0);
        assert_eq!(overlay, 0);
    }
}
