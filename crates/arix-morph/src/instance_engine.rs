//! Host-side morph for the ornament layers.
//!
//! Every frame each instance gets a full transform, written into one
//! batched buffer that the renderer uploads once. The cost is O(N) on the
//! render thread, which keeps these layers in the low hundreds; anything
//! larger belongs on the device like the point population.

use arix_common::FrameTime;
use arix_config::schema::{InstanceMotionConfig, OrnamentLayerConfig};

use crate::distribution::OrnamentDistribution;
use crate::easing::{ease, lerp3, EasingKind};
use crate::matrix::{compose_trs, Mat4, IDENTITY};
use crate::progress::PopulationId;

/// Per-frame motion layered over the morph.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionParams {
    pub float_amplitude: f32,
    pub spin_x: f32,
    pub spin_y: f32,
    pub pulsate_base: f32,
    pub pulsate_amplitude: f32,
    pub pulsate_frequency: f32,
}

impl MotionParams {
    pub fn from_config(config: &InstanceMotionConfig) -> Self {
        Self {
            float_amplitude: config.float_amplitude as f32,
            spin_x: config.spin_x as f32,
            spin_y: config.spin_y as f32,
            pulsate_base: config.pulsate_base as f32,
            pulsate_amplitude: config.pulsate_amplitude as f32,
            pulsate_frequency: config.pulsate_frequency as f32,
        }
    }

    /// No float, spin, or pulse: instances sit exactly on their eased pose.
    pub fn still() -> Self {
        Self {
            float_amplitude: 0.0,
            spin_x: 0.0,
            spin_y: 0.0,
            pulsate_base: 1.0,
            pulsate_amplitude: 0.0,
            pulsate_frequency: 0.0,
        }
    }
}

impl Default for MotionParams {
    fn default() -> Self {
        Self::from_config(&InstanceMotionConfig::default())
    }
}

/// Transform of instance `i` at `progress` and `elapsed` seconds.
///
/// Returns `None` when `i` is out of range.
pub fn instance_transform(
    dist: &OrnamentDistribution,
    i: usize,
    progress: f32,
    elapsed: f32,
    easing: EasingKind,
    motion: &MotionParams,
) -> Option<Mat4> {
    let scatter = *dist.scatter.get(i)?;
    let target = *dist.target.get(i)?;
    let aux = dist.aux.get(i)?;

    let phase = elapsed + i as f32;
    let float_noise = phase.sin() * motion.float_amplitude * (1.0 - progress);

    let mut position = lerp3(scatter, target, ease(easing, progress));
    position[1] += float_noise;

    let rotation = [
        aux.rotation[0] + elapsed * motion.spin_x,
        aux.rotation[1] + elapsed * motion.spin_y,
        aux.rotation[2],
    ];

    let pulse = (elapsed * motion.pulsate_frequency + i as f32).sin();
    let scale = aux.scale * (motion.pulsate_base + motion.pulsate_amplitude * pulse);

    Some(compose_trs(position, rotation, scale))
}

/// One ornament layer and its batched transform buffer.
pub struct InstanceMorphEngine {
    id: PopulationId,
    name: String,
    distribution: OrnamentDistribution,
    easing: EasingKind,
    motion: MotionParams,
    transforms: Vec<Mat4>,
    dirty: bool,
}

impl InstanceMorphEngine {
    pub fn new(
        id: PopulationId,
        name: impl Into<String>,
        distribution: OrnamentDistribution,
        easing: EasingKind,
        motion: MotionParams,
    ) -> Self {
        let transforms = vec![IDENTITY; distribution.len()];
        Self {
            id,
            name: name.into(),
            distribution,
            easing,
            motion,
            transforms,
            dirty: false,
        }
    }

    pub fn from_config(id: PopulationId, layer: &OrnamentLayerConfig, seed: Option<u64>) -> Self {
        Self::new(
            id,
            layer.name.clone(),
            OrnamentDistribution::from_config(layer, seed),
            layer.easing,
            MotionParams::from_config(&layer.motion),
        )
    }

    pub fn id(&self) -> PopulationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    pub fn distribution(&self) -> &OrnamentDistribution {
        &self.distribution
    }

    pub fn easing(&self) -> EasingKind {
        self.easing
    }

    /// Recompute every transform and mark the buffer dirty once.
    pub fn tick(&mut self, frame: FrameTime, progress: f32) {
        if self.transforms.is_empty() {
            return;
        }

        for (i, slot) in self.transforms.iter_mut().enumerate() {
            if let Some(m) = instance_transform(
                &self.distribution,
                i,
                progress,
                frame.elapsed,
                self.easing,
                &self.motion,
            ) {
                *slot = m;
            }
        }
        self.dirty = true;
    }

    pub fn transform(&self, i: usize) -> Option<&Mat4> {
        self.transforms.get(i)
    }

    pub fn transforms(&self) -> &[Mat4] {
        &self.transforms
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The transform buffer if it changed since the last upload.
    pub fn take_upload(&mut self) -> Option<&[Mat4]> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        Some(&self.transforms)
    }

    /// Instance colors, uploaded once when the layer is mounted.
    pub fn colors(&self) -> Vec<[f32; 3]> {
        self.distribution.colors()
    }
}

// =============================================================================
// Tests
// =============================================================================
