//! Foliage point-cloud configuration.

use serde::{Deserialize, Serialize};

use super::shapes::{EasingKind, ScatterShellConfig, SpiralTreeConfig};

/// The large GPU-morphed point population.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FoliageConfig {
    pub count: u32,
    pub tree: SpiralTreeConfig,
    pub scatter: ScatterShellConfig,
    /// Integrator speed (per second).
    pub speed: f64,
    pub easing: EasingKind,

    // Vertex program
    pub noise_frequency: f64,
    pub noise_time_rate: f64,
    pub noise_amplitude: f64,
    /// Fraction of the noise removed at full assembly.
    pub noise_damping: f64,
    pub size_random: f64,
    pub size_base: f64,
    pub size_attenuation: f64,

    // Fragment program
    pub color_base: String,
    pub color_highlight: String,
    pub highlight_weight: f64,
    pub core_color: String,
    pub core_threshold: f64,
    pub core_mix: f64,
    pub alpha_scale: f64,
}

impl Default for FoliageConfig {
    fn default() -> Self {
        Self {
            count: 12_000,
            tree: SpiralTreeConfig::default(),
            scatter: ScatterShellConfig::new(15.0, 15.0),
            speed: 2.0,
            easing: EasingKind::Smoothstep,
            noise_frequency: 0.5,
            noise_time_rate: 0.5,
            noise_amplitude: 0.2,
            noise_damping: 0.8,
            size_random: 15.0,
            size_base: 5.0,
            size_attenuation: 10.0,
            color_base: "#023825".into(),
            color_highlight: "#D4AF37".into(),
            highlight_weight: 0.3,
            core_color: "#FFFFF3".into(),
            core_threshold: 0.2,
            core_mix: 0.5,
            alpha_scale: 0.9,
        }
    }
}
