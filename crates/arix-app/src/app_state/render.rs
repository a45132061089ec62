//! Per-frame tick and draw.

use super::core::ArixApp;

/// Frames between FPS reports.
const FPS_REPORT_INTERVAL: u32 = 300;

impl ArixApp {
    /// Tick the scene with this frame's time and draw it.
    pub(super) fn render_frame(&mut self) {
        let frame = self.clock.tick();
        self.scene.tick(self.signal, frame);

        if let Some(ref mut rs) = self.render_state {
            if let Err(e) = rs.render(&mut self.scene, frame.elapsed) {
                tracing::error!("Render error: {e}");
            }
        }

        self.frames_since_report += 1;
        if self.frames_since_report >= FPS_REPORT_INTERVAL {
            self.frames_since_report = 0;
            tracing::debug!(
                "{:.1} fps ({:.2} ms), foliage p={:.3}",
                self.clock.fps(),
                self.clock.frame_time_ms(),
                self.scene.foliage_progress(),
            );
        }
    }
}
