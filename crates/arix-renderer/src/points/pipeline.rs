//! wgpu render pipeline for the foliage point cloud.
//!
//! Per-point attributes live in one static instance buffer written at
//! creation. Per frame only the 8-byte head of the uniform block (time,
//! progress) is rewritten.

use arix_config::schema::FoliageConfig;
use arix_morph::{PointDistribution, PointFrame, PointProgramBinding};

use super::types::{PointFrameUniforms, PointInstance, PointUniforms};
use crate::program::ValidatedProgram;
use crate::DEPTH_FORMAT;

/// Vertices per point quad (triangle strip).
const QUAD_VERTICES: u32 = 4;

/// Additive color, destination alpha untouched.
const ADDITIVE: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::Zero,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

/// Device half of the point population.
///
/// Mounted into a [`arix_morph::PointMorphEngine`]; the engine's frame
/// writes are staged and flushed by [`PointPipeline::prepare`].
pub struct PointPipeline {
    pipeline: wgpu::RenderPipeline,
    instance_buffer: wgpu::Buffer,
    point_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    pending: Option<PointFrameUniforms>,
}

impl PointPipeline {
    /// Create the pipeline and upload the static attributes.
    ///
    /// - `camera_layout`: layout for bind group 0 (shared `CameraUniforms`)
    /// - `program`: the validated point program
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        camera_layout: &wgpu::BindGroupLayout,
        program: &ValidatedProgram,
        distribution: &PointDistribution,
        config: &FoliageConfig,
    ) -> Self {
        use wgpu::util::DeviceExt;

        let shader = program.create_shader_module(device);

        let instances = PointInstance::from_distribution(distribution);
        let point_count = instances.len() as u32;
        let instance_buffer = if instances.is_empty() {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("point instances (empty)"),
                size: std::mem::size_of::<PointInstance>() as u64,
                usage: wgpu::BufferUsages::VERTEX,
                mapped_at_creation: false,
            })
        } else {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("point instances"),
                contents: bytemuck::cast_slice(&instances),
                usage: wgpu::BufferUsages::VERTEX,
            })
        };

        let uniforms = PointUniforms::from_config(config);
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("point uniforms"),
            contents: bytemuck::bytes_of(&uniforms),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("point bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(
                        std::mem::size_of::<PointUniforms>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("point bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("point pipeline layout"),
            bind_group_layouts: &[camera_layout, &bind_group_layout],
            push_constant_ranges: &[],
        });

        let layout = program.layout();
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("point pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some(layout.vertex_entry),
                buffers: &[PointInstance::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some(layout.fragment_entry),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(ADDITIVE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        tracing::debug!(
            "point pipeline ready: {} points, program '{}' v{}",
            point_count,
            program.name(),
            program.version(),
        );

        Self {
            pipeline,
            instance_buffer,
            point_count,
            uniform_buffer,
            bind_group,
            pending: None,
        }
    }

    pub fn point_count(&self) -> u32 {
        self.point_count
    }

    /// Flush the last staged frame to the uniform buffer.
    pub fn prepare(&mut self, queue: &wgpu::Queue) {
        if let Some(frame) = self.pending.take() {
            queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&frame));
        }
    }

    /// Draw every point. Bind group 0 must already hold the camera.
    pub fn render<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>) {
        if self.point_count == 0 {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(1, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        pass.draw(0..QUAD_VERTICES, 0..self.point_count);
    }
}

impl PointProgramBinding for PointPipeline {
    fn write_frame(&mut self, frame: PointFrame) {
        self.pending = Some(PointFrameUniforms {
            time: frame.elapsed_time,
            progress: frame.progress,
        });
    }
}
