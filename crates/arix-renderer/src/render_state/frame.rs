use arix_morph::MorphScene;

use crate::gpu::RendererError;
use crate::points::PointPipeline;

use super::helpers::log_first_frame;
use super::state::RenderState;

impl RenderState {
    /// Upload this frame's morph output and draw it.
    ///
    /// Call after `scene.tick`. `elapsed` drives the group sway. Ornaments
    /// are drawn first so the additive points test against their depth.
    pub fn render(
        &mut self,
        scene: &mut MorphScene<PointPipeline>,
        elapsed: f32,
    ) -> Result<(), RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(RendererError::SurfaceError(e.to_string()));
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let camera = self.camera.uniforms(self.gpu.size, elapsed);
        self.gpu
            .queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&camera));
        if let Some(points) = scene.foliage_mut().binding_mut() {
            points.prepare(&self.gpu.queue);
        }
        self.instances.prepare(&self.gpu.queue, scene.ornaments_mut());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("arix frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("arix main pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_bind_group(0, &self.camera_bind_group, &[]);
            self.instances.render(&mut pass);
            if let Some(points) = scene.foliage().binding() {
                points.render(&mut pass);
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(())
    }
}
