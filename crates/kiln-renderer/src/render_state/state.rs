use std::sync::Arc;

use kiln_common::Color;
use kiln_config::KilnConfig;
use winit::window::Window;

use crate::batch::BatchRenderer;
use crate::gpu::{GpuContext, RendererError};
use crate::wgpu_backend::WgpuBackend;

/// GPU context plus a batch renderer drawing through wgpu.
pub struct RenderState {
    pub gpu: GpuContext,
    pub batch: BatchRenderer<WgpuBackend>,
    pub clear_color: wgpu::Color,
    pub(super) first_frame_logged: bool,
}

impl RenderState {
    /// Create a fully initialized render state from a window and config.
    pub async fn new(window: Arc<Window>, config: &KilnConfig) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, config.window.vsync).await?;
        let backend = WgpuBackend::new(
            gpu.device.clone(),
            gpu.queue.clone(),
            gpu.format(),
            config.renderer.projection,
            gpu.size.width,
            gpu.size.height,
        );
        let batch = BatchRenderer::new(backend, config.renderer.max_quads)?;

        let clear = Color::from_hex(&config.window.clear_color).unwrap_or(Color::BLACK);
        let [r, g, b, a] = clear.to_f64();

        Ok(Self {
            gpu,
            batch,
            clear_color: wgpu::Color { r, g, b, a },
            first_frame_logged: false,
        })
    }

    /// Handle a window resize: reconfigure the surface and the projection.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.gpu.resize(width, height);
        self.batch.backend_mut().set_viewport(width, height);
    }

    /// Set the background clear color for frame rendering.
    pub fn set_clear_color(&mut self, color: Color) {
        let [r, g, b, a] = color.to_f64();
        self.clear_color = wgpu::Color { r, g, b, a };
    }
}
