//! Window creation and renderer initialization.

use std::sync::Arc;

use glam::Vec2;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use kiln_renderer::RenderState;

use crate::scene::DemoScene;

use super::core::KilnApp;

impl KilnApp {
    /// Create the window, the GPU renderer and the demo scene.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let mut rs = match pollster::block_on(RenderState::new(window.clone(), &self.config)) {
            Ok(rs) => rs,
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                return false;
            }
        };

        let size = Vec2::new(rs.gpu.size.width as f32, rs.gpu.size.height as f32);
        let textures = rs.batch.backend_mut().textures_mut();
        match DemoScene::new(textures, &self.config, size) {
            Ok(scene) => self.scene = Some(scene),
            Err(e) => {
                tracing::error!("Failed to build demo scene: {e}");
                return false;
            }
        }

        self.render_state = Some(rs);
        self.window = Some(window);
        true
    }
}
