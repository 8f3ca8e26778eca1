//! Flat-colour wgpu renderer
//!
//! Implements [`RendererBackend`] on top of [`GpuContext`]. One pipeline,
//! one uniform buffer holding a slot per queued draw; each draw selects its
//! slot with a dynamic offset.

use std::sync::Arc;

use glam::Mat4;
use winit::window::Window;

use super::backend::{DrawUniforms, MAX_DRAWS_PER_FRAME, RendererBackend};
use super::error::{RenderError, RenderResult};
use super::gpu_context::{DEPTH_FORMAT, GpuContext, GpuContextConfig};
use super::mesh::{FillMode, FlatVertex, MeshData, MeshHandle};
use super::shader::SHADER_SOURCE;

/// Renderer settings.
#[derive(Clone, Debug)]
pub struct RendererConfig {
    pub gpu: GpuContextConfig,
    /// Background colour (RGBA)
    pub clear_color: [f64; 4],
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            gpu: GpuContextConfig::default(),
            clear_color: [0.8, 0.023, 0.3, 0.38431],
        }
    }
}

/// GPU buffers for one uploaded mesh
struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    fill: FillMode,
}

/// A queued draw: which mesh, and which uniform slot holds its transform.
#[derive(Clone, Copy)]
struct QueuedDraw {
    mesh: MeshHandle,
    slot: usize,
}

pub struct FlatRenderer {
    gpu: GpuContext,
    clear_color: wgpu::Color,
    fill_pipeline: wgpu::RenderPipeline,
    line_pipeline: Option<wgpu::RenderPipeline>,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    /// Distance between uniform slots, respecting the device alignment
    uniform_stride: u64,
    meshes: Vec<GpuMesh>,
    uniforms: Vec<DrawUniforms>,
    draws: Vec<QueuedDraw>,
    overflow_reported: bool,
}

impl FlatRenderer {
    pub fn new(window: Arc<Window>, config: &RendererConfig) -> RenderResult<Self> {
        let gpu = GpuContext::new(window, &config.gpu)?;
        let shader = gpu.create_shader_module("Flat Shader", SHADER_SOURCE)?;

        let uniform_size = std::mem::size_of::<DrawUniforms>() as u64;
        let alignment = u64::from(gpu.device.limits().min_uniform_buffer_offset_alignment);
        let uniform_stride = uniform_size.div_ceil(alignment) * alignment;
        let uniform_buffer = gpu.create_dynamic_uniform_buffer(
            "Draw Uniform Buffer",
            uniform_stride * MAX_DRAWS_PER_FRAME as u64,
        );

        let bind_group_layout =
            gpu.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("Draw Bind Group Layout"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: true,
                            min_binding_size: wgpu::BufferSize::new(uniform_size),
                        },
                        count: None,
                    }],
                });

        let bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Draw Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &uniform_buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(uniform_size),
                }),
            }],
        });

        let pipeline_layout = gpu
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Flat Pipeline Layout"),
                bind_group_layouts: &[&bind_group_layout],
                push_constant_ranges: &[],
            });

        let fill_pipeline = create_pipeline(
            &gpu,
            &shader,
            &pipeline_layout,
            "Flat Fill Pipeline",
            wgpu::PolygonMode::Fill,
        );
        let line_pipeline = gpu.line_mode_supported.then(|| {
            create_pipeline(
                &gpu,
                &shader,
                &pipeline_layout,
                "Flat Line Pipeline",
                wgpu::PolygonMode::Line,
            )
        });

        let [r, g, b, a] = config.clear_color;
        tracing::info!(
            format = ?gpu.format(),
            uniform_stride,
            wireframe = line_pipeline.is_some(),
            "[Render] flat pipeline initialized"
        );

        Ok(Self {
            gpu,
            clear_color: wgpu::Color { r, g, b, a },
            fill_pipeline,
            line_pipeline,
            uniform_buffer,
            bind_group,
            uniform_stride,
            meshes: Vec::new(),
            uniforms: Vec::with_capacity(MAX_DRAWS_PER_FRAME),
            draws: Vec::with_capacity(MAX_DRAWS_PER_FRAME),
            overflow_reported: false,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.gpu.dimensions()
    }

    fn pipeline_for(&self, fill: FillMode) -> &wgpu::RenderPipeline {
        match (fill, &self.line_pipeline) {
            (FillMode::Line, Some(line)) => line,
            _ => &self.fill_pipeline,
        }
    }

    fn upload_uniforms(&self) {
        if self.uniforms.is_empty() {
            return;
        }
        let stride = self.uniform_stride as usize;
        let mut bytes = vec![0u8; stride * self.uniforms.len()];
        for (i, uniforms) in self.uniforms.iter().enumerate() {
            let start = i * stride;
            let block = bytemuck::bytes_of(uniforms);
            bytes[start..start + block.len()].copy_from_slice(block);
        }
        self.gpu.queue.write_buffer(&self.uniform_buffer, 0, &bytes);
    }
}

impl RendererBackend for FlatRenderer {
    fn create_mesh(&mut self, mesh: &MeshData) -> RenderResult<MeshHandle> {
        let vertices = mesh.vertices();
        let indices = mesh.triangle_indices();
        if mesh.fill == FillMode::Line && self.line_pipeline.is_none() {
            tracing::warn!(mesh = mesh.label, "[Render] wireframe unsupported on this adapter, drawing filled");
        }

        let vertex_buffer = self
            .gpu
            .create_vertex_buffer(&format!("{} Vertex Buffer", mesh.label), &vertices);
        let index_buffer = self
            .gpu
            .create_index_buffer(&format!("{} Index Buffer", mesh.label), &indices);

        let handle = MeshHandle(self.meshes.len() as u32);
        self.meshes.push(GpuMesh {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            fill: mesh.fill,
        });
        tracing::debug!(
            mesh = mesh.label,
            vertices = vertices.len(),
            indices = indices.len(),
            "[Render] mesh uploaded"
        );
        Ok(handle)
    }

    fn clear_frame(&mut self) {
        self.uniforms.clear();
        self.draws.clear();
    }

    fn draw(&mut self, mesh: MeshHandle, transform: Mat4) {
        if self.draws.len() >= MAX_DRAWS_PER_FRAME {
            if !self.overflow_reported {
                tracing::warn!(limit = MAX_DRAWS_PER_FRAME, "[Render] draw queue full, dropping draws");
                self.overflow_reported = true;
            }
            return;
        }
        let slot = self.uniforms.len();
        self.uniforms.push(DrawUniforms::new(transform));
        self.draws.push(QueuedDraw { mesh, slot });
    }

    fn present(&mut self) -> RenderResult<()> {
        let output = match self.gpu.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("[Render] surface lost, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                tracing::warn!("[Render] surface timeout, skipping frame");
                return Ok(());
            }
            Err(error) => return Err(RenderError::Surface(error)),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.upload_uniforms();

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Flat Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.gpu.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            for draw in &self.draws {
                let Some(mesh) = self.meshes.get(draw.mesh.0 as usize) else {
                    tracing::warn!(handle = draw.mesh.0, "[Render] unknown mesh handle");
                    continue;
                };
                if mesh.index_count == 0 {
                    continue;
                }
                let offset = (draw.slot as u64 * self.uniform_stride) as u32;
                pass.set_pipeline(self.pipeline_for(mesh.fill));
                pass.set_bind_group(0, &self.bind_group, &[offset]);
                pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

fn create_pipeline(
    gpu: &GpuContext,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    label: &str,
    polygon_mode: wgpu::PolygonMode,
) -> wgpu::RenderPipeline {
    gpu.device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[FlatVertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: gpu.format(),
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Shapes are authored with mixed winding
                cull_mode: None,
                polygon_mode,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
}
