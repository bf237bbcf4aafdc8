use crate::gpu::RendererError;
use crate::layer::Layer;

use super::helpers::log_first_frame;
use super::state::RenderState;

impl RenderState {
    /// Render a complete frame: batch every layer, clear, replay, present.
    ///
    /// Layers are drawn in slice order. A layer that fails to batch still
    /// presents whatever it flushed; the first error is returned after the
    /// frame is submitted.
    pub fn render_frame(&mut self, layers: &[&Layer]) -> Result<(), RendererError> {
        self.batch.reset_stats();
        let mut batch_result = Ok(());
        for layer in layers {
            if let Err(e) = layer.render(&mut self.batch) {
                if batch_result.is_ok() {
                    batch_result = Err(e);
                }
            }
        }
        self.batch.backend_mut().prepare();

        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::warn!("Surface lost, reconfiguring");
                self.gpu.reconfigure();
                self.batch.backend_mut().finish_frame();
                return Ok(());
            }
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                self.batch.backend_mut().finish_frame();
                return Err(RendererError::SurfaceError(e.to_string()));
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("kiln frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("kiln batch pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.batch.backend().render(&mut pass);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        self.batch.backend_mut().finish_frame();

        let stats = self.batch.stats();
        tracing::trace!(
            draw_calls = stats.draw_calls,
            quads = stats.quads,
            auto_flushes = stats.auto_flushes,
            "Frame presented"
        );
        log_first_frame(
            &mut self.first_frame_logged,
            self.gpu.size,
            self.gpu.format(),
            stats.draw_calls,
        );

        batch_result.map_err(RendererError::from)
    }
}
