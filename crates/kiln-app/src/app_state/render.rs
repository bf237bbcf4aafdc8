//! Frame rendering logic.

use super::core::KilnApp;

/// Frames between stats log lines.
const STATS_INTERVAL: u64 = 600;

impl KilnApp {
    /// Render a single frame of the demo scene.
    pub(super) fn render_frame(&mut self) {
        let (Some(rs), Some(scene)) = (self.render_state.as_mut(), self.scene.as_ref()) else {
            return;
        };

        if let Err(e) = rs.render_frame(&[scene.layer()]) {
            tracing::error!("Render error: {e}");
        }

        self.frames += 1;
        if self.frames % STATS_INTERVAL == 1 {
            let stats = rs.batch.stats();
            tracing::debug!(
                frame = self.frames,
                draw_calls = stats.draw_calls,
                flushes = stats.flushes,
                auto_flushes = stats.auto_flushes,
                quads = stats.quads,
                "Batch stats"
            );
        }
    }
}
