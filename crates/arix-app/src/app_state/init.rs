//! Window creation and renderer initialization.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use arix_common::ArixError;
use arix_renderer::{RenderState, RendererError};

use super::core::ArixApp;

/// Lift a renderer failure into the application error.
pub(super) fn renderer_error(err: RendererError) -> ArixError {
    ArixError::Renderer(err.to_string())
}

impl ArixApp {
    /// Create the window and initialize the GPU renderer.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ArixError> {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(self.config.window.width),
                f64::from(self.config.window.height),
            ));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| ArixError::Window(e.to_string()))?;

        let render_state = pollster::block_on(RenderState::new(
            window.clone(),
            &self.config,
            &mut self.scene,
        ))
        .map_err(renderer_error)?;

        self.render_state = Some(render_state);
        self.window = Some(window);
        self.clock.reset_delta();
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
