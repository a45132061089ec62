//! ArixApp struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use arix_common::{ArixError, StateSignal};
use arix_config::ArixConfig;
use arix_morph::MorphScene;
use arix_renderer::{PointPipeline, RenderState};

use crate::clock::FrameClock;

/// Top-level application state.
pub struct ArixApp {
    pub(super) config: ArixConfig,
    pub(super) signal: StateSignal,
    pub(super) clock: FrameClock,
    pub(super) scene: MorphScene<PointPipeline>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    pub(super) should_exit: bool,
    /// Why startup failed, reported once the event loop returns.
    pub(super) init_error: Option<ArixError>,
    /// Frames rendered since the last FPS report.
    pub(super) frames_since_report: u32,
}

impl ArixApp {
    pub fn new(config: ArixConfig) -> Self {
        let scene = MorphScene::from_config(&config);
        Self {
            signal: config.morph.initial_state,
            config,
            clock: FrameClock::new(),
            scene,
            window: None,
            render_state: None,
            should_exit: false,
            init_error: None,
            frames_since_report: 0,
        }
    }

    /// The window or renderer failure that ended the event loop, if any.
    pub fn take_init_error(&mut self) -> Option<ArixError> {
        self.init_error.take()
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
