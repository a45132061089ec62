//! Windowless simulation at a fixed step.
//!
//! The foliage engine is mounted on a host-side binding that records the
//! uniforms the device program would receive, so the run exercises the
//! same per-frame path as the renderer without a GPU.

use arix_common::StateSignal;
use arix_config::ArixConfig;
use arix_morph::{MorphScene, PointFrame, PointProgramBinding};

use crate::clock::FrameClock;

/// Fixed simulation step.
pub const STEP: f32 = 1.0 / 60.0;

/// Frames between progress reports.
const REPORT_EVERY: u64 = 60;

/// Records every uniform write instead of uploading it.
#[derive(Debug, Default)]
pub struct HostBinding {
    pub last: Option<PointFrame>,
    pub writes: u64,
}

impl PointProgramBinding for HostBinding {
    fn write_frame(&mut self, frame: PointFrame) {
        self.last = Some(frame);
        self.writes += 1;
    }
}

/// Summary of a headless run.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessReport {
    pub frames: u64,
    pub signal: StateSignal,
    pub foliage_progress: f32,
    /// Per-layer `(name, progress)`.
    pub layer_progress: Vec<(String, f32)>,
    /// Foliage axis-aligned extent at the final frame, if any points exist.
    pub foliage_extent: Option<[f32; 3]>,
    pub uniform_writes: u64,
}

fn extent(scene: &MorphScene<HostBinding>) -> Option<[f32; 3]> {
    let (lo, hi) = scene.foliage().bounds(scene.foliage_progress())?;
    Some([hi[0] - lo[0], hi[1] - lo[1], hi[2] - lo[2]])
}

/// Run `frames` fixed steps, toggling the signal once before the first.
pub fn run(config: &ArixConfig, frames: u64) -> HeadlessReport {
    let mut scene: MorphScene<HostBinding> = MorphScene::from_config(config);
    scene.foliage_mut().mount(HostBinding::default());

    let mut signal = config.morph.initial_state;
    signal.toggle();
    tracing::info!("headless: {frames} frames at {STEP:.4}s, signal -> {signal:?}");

    let mut clock = FrameClock::new();
    for frame in 1..=frames {
        scene.tick(signal, clock.advance(STEP));

        if frame % REPORT_EVERY == 0 || frame == frames {
            tracing::info!(
                "frame {frame}: t={:.2}s foliage p={:.4}",
                clock.elapsed(),
                scene.foliage_progress(),
            );
            for layer in scene.ornaments() {
                tracing::debug!(
                    "  {}: p={:.4}",
                    layer.name(),
                    scene.progress(layer.id()).unwrap_or(0.0),
                );
            }
        }
    }

    let foliage_extent = extent(&scene);
    if let Some([x, y, z]) = foliage_extent {
        tracing::info!("foliage extent: {x:.2} x {y:.2} x {z:.2}");
    }

    HeadlessReport {
        frames,
        signal,
        foliage_progress: scene.foliage_progress(),
        layer_progress: scene
            .ornaments()
            .iter()
            .map(|l| (l.name().to_string(), scene.progress(l.id()).unwrap_or(0.0)))
            .collect(),
        foliage_extent,
        uniform_writes: scene.foliage().binding().map_or(0, |b| b.writes),
    }
}

// =============================================================================
// Tests
// =============================================================================
