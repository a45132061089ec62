//! wgpu render pipeline for the ornament layers.
//!
//! One pipeline serves every layer. Each layer owns its mesh, a transform
//! buffer rewritten whenever the morph core marks it dirty, a color buffer
//! written once, and a material bind group.

use arix_config::schema::OrnamentLayerConfig;
use arix_morph::InstanceMorphEngine;

use super::mesh::mesh_for;
use super::types::{MaterialUniforms, MeshVertex, COLOR_LAYOUT, TRANSFORM_LAYOUT};
use crate::program::ValidatedProgram;
use crate::DEPTH_FORMAT;

const MAT4_BYTES: u64 = 64;
const COLOR_BYTES: u64 = 12;

struct InstanceLayer {
    name: String,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    transform_buffer: wgpu::Buffer,
    color_buffer: wgpu::Buffer,
    instance_count: u32,
    material_bind_group: wgpu::BindGroup,
}

pub struct InstancePipeline {
    pipeline: wgpu::RenderPipeline,
    material_layout: wgpu::BindGroupLayout,
    layers: Vec<InstanceLayer>,
}

impl InstancePipeline {
    /// Create the shared pipeline with no layers attached.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        camera_layout: &wgpu::BindGroupLayout,
        program: &ValidatedProgram,
    ) -> Self {
        let shader = program.create_shader_module(device);

        let material_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("ornament material layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(
                        std::mem::size_of::<MaterialUniforms>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("ornament pipeline layout"),
            bind_group_layouts: &[camera_layout, &material_layout],
            push_constant_ranges: &[],
        });

        let layout = program.layout();
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("ornament pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some(layout.vertex_entry),
                buffers: &[MeshVertex::LAYOUT, TRANSFORM_LAYOUT, COLOR_LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some(layout.fragment_entry),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                // the UV sphere is wound inward
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            material_layout,
            layers: Vec::new(),
        }
    }

    /// Allocate device buffers for one layer and upload its colors.
    pub fn add_layer(
        &mut self,
        device: &wgpu::Device,
        config: &OrnamentLayerConfig,
        engine: &InstanceMorphEngine,
        eye: [f32; 3],
    ) {
        use wgpu::util::DeviceExt;

        let mesh = mesh_for(config.shape);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("ornament mesh"),
            contents: bytemuck::cast_slice(&mesh),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let instance_count = engine.len() as u32;
        let transform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("ornament transforms"),
            size: MAT4_BYTES * u64::from(instance_count.max(1)),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let colors = engine.colors();
        let color_buffer = if colors.is_empty() {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("ornament colors (empty)"),
                size: COLOR_BYTES,
                usage: wgpu::BufferUsages::VERTEX,
                mapped_at_creation: false,
            })
        } else {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("ornament colors"),
                contents: bytemuck::cast_slice(&colors),
                usage: wgpu::BufferUsages::VERTEX,
            })
        };

        let material = MaterialUniforms::new(&config.material, eye);
        let material_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("ornament material"),
            contents: bytemuck::bytes_of(&material),
            usage: wgpu::BufferUsages::UNIFORM,
        });
        let material_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("ornament material bind group"),
            layout: &self.material_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: material_buffer.as_entire_binding(),
            }],
        });

        tracing::debug!(
            "ornament layer '{}': {} x {:?} ({} vertices)",
            engine.name(),
            instance_count,
            config.shape,
            mesh.len(),
        );

        self.layers.push(InstanceLayer {
            name: engine.name().to_string(),
            vertex_buffer,
            vertex_count: mesh.len() as u32,
            transform_buffer,
            color_buffer,
            instance_count,
            material_bind_group,
        });
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Upload every transform buffer the morph core refilled this frame.
    ///
    /// Layers are matched to engines by position.
    pub fn prepare(&self, queue: &wgpu::Queue, engines: &mut [InstanceMorphEngine]) {
        for (layer, engine) in self.layers.iter().zip(engines.iter_mut()) {
            if let Some(transforms) = engine.take_upload() {
                queue.write_buffer(&layer.transform_buffer, 0, bytemuck::cast_slice(transforms));
                tracing::trace!("{}: uploaded {} transforms", layer.name, transforms.len());
            }
        }
    }

    /// Draw every non-empty layer. Bind group 0 must already hold the camera.
    pub fn render<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>) {
        pass.set_pipeline(&self.pipeline);
        for layer in self.layers.iter().filter(|l| l.instance_count > 0) {
            pass.set_bind_group(1, &layer.material_bind_group, &[]);
            pass.set_vertex_buffer(0, layer.vertex_buffer.slice(..));
            pass.set_vertex_buffer(1, layer.transform_buffer.slice(..));
            pass.set_vertex_buffer(2, layer.color_buffer.slice(..));
            pass.draw(0..layer.vertex_count, 0..layer.instance_count);
        }
    }
}
