//! KilnApp struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use kiln_config::schema::KilnConfig;
use kiln_renderer::RenderState;

use crate::scene::DemoScene;

/// Top-level application state.
pub struct KilnApp {
    pub(super) config: KilnConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    pub(super) scene: Option<DemoScene>,
    pub(super) frames: u64,
}

impl KilnApp {
    pub fn new(config: KilnConfig) -> Self {
        Self {
            config,
            window: None,
            render_state: None,
            scene: None,
            frames: 0,
        }
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
