//! Scene director: the foliage, every ornament layer, and their progress.

use arix_common::{FrameTime, StateSignal};
use arix_config::ArixConfig;

use crate::distribution::PointDistribution;
use crate::instance_engine::InstanceMorphEngine;
use crate::point_engine::{PointMorphEngine, PointParams, PointProgramBinding};
use crate::progress::{MorphRegistry, MorphState, PopulationId};

/// All populations of one scene, ticked in a fixed order.
pub struct MorphScene<B> {
    registry: MorphRegistry,
    foliage: PointMorphEngine<B>,
    ornaments: Vec<InstanceMorphEngine>,
    frames: u64,
}

impl<B: PointProgramBinding> MorphScene<B> {
    /// Generate every population from config.
    ///
    /// With a fixed seed the foliage uses it directly and layer `k` uses
    /// `seed + k + 1`, so layers never share a random stream.
    pub fn from_config(config: &ArixConfig) -> Self {
        let seed = config.morph.seed;
        let initial = config.morph.initial_state;
        let policy = config.morph.overshoot;
        let mut registry = MorphRegistry::new();

        let foliage_id = registry.register(MorphState::new(
            initial,
            config.foliage.speed as f32,
            policy,
        ));
        let foliage = PointMorphEngine::new(
            foliage_id,
            PointDistribution::from_config(&config.foliage, seed),
            PointParams::from_config(&config.foliage),
        );

        let ornaments: Vec<InstanceMorphEngine> = config
            .ornaments
            .iter()
            .enumerate()
            .map(|(k, layer)| {
                let id = registry.register(MorphState::new(initial, layer.speed as f32, policy));
                let layer_seed = seed.map(|s| s.wrapping_add(k as u64 + 1));
                InstanceMorphEngine::from_config(id, layer, layer_seed)
            })
            .collect();

        tracing::info!(
            "scene ready: {} foliage points, {} ornament layers ({} instances), initial state {:?}",
            foliage.distribution().len(),
            ornaments.len(),
            ornaments.iter().map(InstanceMorphEngine::len).sum::<usize>(),
            initial,
        );

        Self {
            registry,
            foliage,
            ornaments,
            frames: 0,
        }
    }

    /// Advance one frame.
    ///
    /// Every integrator is stepped before either engine reads its progress,
    /// so both morph paths see the same frame.
    pub fn tick(&mut self, signal: StateSignal, frame: FrameTime) {
        self.registry.advance(signal, frame.delta);

        if let Some(p) = self.registry.progress(self.foliage.id()) {
            self.foliage.tick(frame.delta, p);
        }

        for layer in &mut self.ornaments {
            if let Some(p) = self.registry.progress(layer.id()) {
                layer.tick(frame, p);
            }
        }

        self.frames += 1;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn registry(&self) -> &MorphRegistry {
        &self.registry
    }

    pub fn progress(&self, id: PopulationId) -> Option<f32> {
        self.registry.progress(id)
    }

    pub fn foliage(&self) -> &PointMorphEngine<B> {
        &self.foliage
    }

    pub fn foliage_mut(&mut self) -> &mut PointMorphEngine<B> {
        &mut self.foliage
    }

    pub fn foliage_progress(&self) -> f32 {
        self.registry.progress(self.foliage.id()).unwrap_or(0.0)
    }

    pub fn ornaments(&self) -> &[InstanceMorphEngine] {
        &self.ornaments
    }

    pub fn ornaments_mut(&mut self) -> &mut [InstanceMorphEngine] {
        &mut self.ornaments
    }
}

// =============================================================================
// Tests
// =============================================================================
