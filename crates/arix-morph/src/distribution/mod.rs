//! Static pose generation.
//!
//! Every population gets its two endpoint poses and per-instance attributes
//! exactly once, when it is constructed. Nothing here is touched again per
//! frame.

mod shell;
mod tree;

pub use shell::sample_shell;
pub use tree::{cone_point, disc_radius, edge_radius, spiral_point};

use std::f32::consts::PI;

use arix_config::colors::linear_rgb_or;
use arix_config::schema::{FoliageConfig, OrnamentLayerConfig, ScatterShellConfig, SpiralTreeConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Color used when a layer has no usable palette entries.
const FALLBACK_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Deterministic generator for a fixed seed, fresh entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Both poses and the random factor of every foliage point.
#[derive(Debug, Clone, Default)]
pub struct PointDistribution {
    pub scatter: Vec<[f32; 3]>,
    pub target: Vec<[f32; 3]>,
    /// Uniform in `[0, 1)`; drives highlight mixing and size variety.
    pub random: Vec<f32>,
}

impl PointDistribution {
    pub fn generate<R: Rng + ?Sized>(
        count: usize,
        tree: &SpiralTreeConfig,
        shell: &ScatterShellConfig,
        rng: &mut R,
    ) -> Self {
        let mut dist = Self {
            scatter: Vec::with_capacity(count),
            target: Vec::with_capacity(count),
            random: Vec::with_capacity(count),
        };

        for i in 0..count {
            dist.target.push(spiral_point(i, count, tree, rng));
            dist.scatter.push(sample_shell(shell, rng));
            dist.random.push(rng.gen::<f32>());
        }

        dist
    }

    pub fn from_config(config: &FoliageConfig, seed: Option<u64>) -> Self {
        let mut rng = seeded_rng(seed);
        let dist = Self::generate(
            config.count as usize,
            &config.tree,
            &config.scatter,
            &mut rng,
        );
        tracing::debug!("generated {} foliage points", dist.len());
        dist
    }

    pub fn len(&self) -> usize {
        self.target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }
}

/// Per-instance attributes of an ornament, fixed at generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrnamentAux {
    /// Euler angles (XYZ order) before the continuous spin is added.
    pub rotation: [f32; 3],
    pub scale: f32,
    /// Linear RGB.
    pub color: [f32; 3],
}

/// Both poses and the auxiliary attributes of every instance in one layer.
#[derive(Debug, Clone, Default)]
pub struct OrnamentDistribution {
    pub scatter: Vec<[f32; 3]>,
    pub target: Vec<[f32; 3]>,
    pub aux: Vec<OrnamentAux>,
}

impl OrnamentDistribution {
    pub fn generate<R: Rng + ?Sized>(layer: &OrnamentLayerConfig, rng: &mut R) -> Self {
        let count = layer.count as usize;
        let palette: Vec<[f32; 3]> = layer
            .palette
            .iter()
            .map(|c| linear_rgb_or(c, FALLBACK_COLOR))
            .collect();

        let scale_min = layer.scale_min as f32;
        let scale_span = (layer.scale_max - layer.scale_min) as f32;

        let mut dist = Self {
            scatter: Vec::with_capacity(count),
            target: Vec::with_capacity(count),
            aux: Vec::with_capacity(count),
        };

        for _ in 0..count {
            dist.target
                .push(cone_point(&layer.tree, layer.placement, rng));
            dist.scatter.push(sample_shell(&layer.scatter, rng));

            let rotation = [rng.gen::<f32>() * PI, rng.gen::<f32>() * PI, 0.0];
            let scale = scale_min + rng.gen::<f32>() * scale_span;
            let color = if palette.is_empty() {
                FALLBACK_COLOR
            } else {
                palette[rng.gen_range(0..palette.len())]
            };

            dist.aux.push(OrnamentAux {
                rotation,
                scale,
                color,
            });
        }

        dist
    }

    pub fn from_config(layer: &OrnamentLayerConfig, seed: Option<u64>) -> Self {
        let mut rng = seeded_rng(seed);
        let dist = Self::generate(layer, &mut rng);
        tracing::debug!("generated {} instances for layer '{}'", dist.len(), layer.name);
        dist
    }

    pub fn len(&self) -> usize {
        self.target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    /// Instance colors in slot order, for the one-time color upload.
    pub fn colors(&self) -> Vec<[f32; 3]> {
        self.aux.iter().map(|a| a.color).collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_seed_is_deterministic() {
        let config = FoliageConfig {
            count: 64,
            ..Default::default()
        };
        let a = PointDistribution::from_config(&config, Some(42));
        let b = PointDistribution::from_config(&config, Some(42));
        assert_eq!(a.scatter, b.scatter);
        assert_eq!(a.target, b.target);
        assert_eq!(a.random, b.random);
    }

    #[test]
    fn different_seeds_differ() {
        let config = FoliageConfig {
            count: 64,
            ..Default::default()
        };
        let a = PointDistribution::from_config(&config, Some(1));
        let b = PointDistribution::from_config(&config, Some(2));
        assert_ne!(a.scatter, b.scatter);
    }

    #[test]
    fn zero_count_is_empty() {
        let config = FoliageConfig {
            count: 0,
            ..Default::default()
        };
        let dist = PointDistribution::from_config(&config, Some(0));
        assert!(dist.is_empty());

        let layer = OrnamentLayerConfig {
            count: 0,
            ..OrnamentLayerConfig::baubles()
        };
        assert!(OrnamentDistribution::from_config(&layer, Some(0)).is_empty());
    }

    #[test]
    fn ornament_scales_stay_in_range() {
        let layer = OrnamentLayerConfig::gifts();
        let dist = OrnamentDistribution::from_config(&layer, Some(5));
        assert_eq!(dist.len(), 150);
        for aux in &dist.aux {
            assert!((0.25..=0.5).contains(&aux.scale), "scale {}", aux.scale);
        }
    }

    #[test]
    fn ornament_rotation_has_no_z_component() {
        let dist = OrnamentDistribution::from_config(&OrnamentLayerConfig::baubles(), Some(9));
        for aux in &dist.aux {
            assert_eq!(aux.rotation[2], 0.0);
            assert!((0.0..=PI).contains(&aux.rotation[0]));
            assert!((0.0..=PI).contains(&aux.rotation[1]));
        }
    }

    #[test]
    fn ornament_colors_come_from_the_palette() {
        let layer = OrnamentLayerConfig::baubles();
        let palette: Vec<[f32; 3]> = layer
            .palette
            .iter()
            .map(|c| linear_rgb_or(c, FALLBACK_COLOR))
            .collect();
        let dist = OrnamentDistribution::from_config(&layer, Some(3));
        for color in dist.colors() {
            assert!(palette.contains(&color));
        }
    }

    #[test]
    fn empty_palette_falls_back_to_white() {
        let layer = OrnamentLayerConfig {
            count: 4,
            palette: Vec::new(),
            ..Default::default()
        };
        let dist = OrnamentDistribution::from_config(&layer, Some(3));
        assert!(dist.colors().iter().all(|c| *c == FALLBACK_COLOR));
    }
}
