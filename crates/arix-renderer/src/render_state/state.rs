use std::sync::Arc;

use winit::window::Window;

use arix_config::ArixConfig;
use arix_morph::MorphScene;

use super::helpers::{clear_color, create_depth_view};
use crate::camera::{Camera, CameraUniforms};
use crate::gpu::{GpuContext, RendererError};
use crate::instances::InstancePipeline;
use crate::points::PointPipeline;
use crate::program::{instances_program, points_program, validate_program};

/// Core rendering state: device context, camera, depth, and the ornament
/// pipeline. The point pipeline is mounted into the scene's foliage engine.
pub struct RenderState {
    pub gpu: GpuContext,
    pub camera: Camera,
    pub clear_color: wgpu::Color,
    pub(super) camera_buffer: wgpu::Buffer,
    pub(super) camera_bind_group: wgpu::BindGroup,
    pub(super) depth_view: wgpu::TextureView,
    pub(super) instances: InstancePipeline,
}

impl RenderState {
    /// Create a fully initialized render state and mount the point
    /// pipeline into `scene`.
    ///
    /// Both programs are validated before any pipeline is built.
    pub async fn new(
        window: Arc<Window>,
        config: &ArixConfig,
        scene: &mut MorphScene<PointPipeline>,
    ) -> Result<Self, RendererError> {
        use wgpu::util::DeviceExt;

        let points_program = validate_program(&points_program())?;
        let instances_program = validate_program(&instances_program())?;

        let gpu = GpuContext::new(window).await?;
        let camera = Camera::from_config(&config.camera);

        let camera_uniforms = camera.uniforms(gpu.size, 0.0);
        let camera_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("camera uniforms"),
                contents: bytemuck::bytes_of(&camera_uniforms),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let camera_layout = gpu
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("camera bind group layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: std::num::NonZeroU64::new(
                            std::mem::size_of::<CameraUniforms>() as u64,
                        ),
                    },
                    count: None,
                }],
            });

        let camera_bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera bind group"),
            layout: &camera_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let points = PointPipeline::new(
            &gpu.device,
            gpu.format(),
            &camera_layout,
            &points_program,
            scene.foliage().distribution(),
            &config.foliage,
        );
        scene.foliage_mut().mount(points);

        let mut instances =
            InstancePipeline::new(&gpu.device, gpu.format(), &camera_layout, &instances_program);
        for (layer, engine) in config.ornaments.iter().zip(scene.ornaments()) {
            instances.add_layer(&gpu.device, layer, engine, camera.eye());
        }

        let depth_view = create_depth_view(&gpu.device, gpu.size.width, gpu.size.height);

        tracing::info!(
            "renderer ready: {}x{}, {} ornament layers",
            gpu.size.width,
            gpu.size.height,
            instances.layer_count(),
        );

        Ok(Self {
            gpu,
            camera,
            clear_color: clear_color(&config.window.clear_color),
            camera_buffer,
            camera_bind_group,
            depth_view,
            instances,
        })
    }

    /// Handle a window resize: surface and depth. The projection follows
    /// on the next [`RenderState::render`].
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        self.depth_view = create_depth_view(&self.gpu.device, self.gpu.size.width, self.gpu.size.height);
    }
}
