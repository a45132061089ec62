//! Shape parameters shared by the point and ornament populations.

use serde::{Deserialize, Serialize};

/// Easing curve applied to progress before interpolating positions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum EasingKind {
    Linear,
    #[default]
    Smoothstep,
    CubicInOut,
}

/// Spiral cone the foliage points assemble into.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralTreeConfig {
    pub height: f64,
    pub base_radius: f64,
    /// Full turns swept from base to tip.
    pub spiral_turns: f64,
    /// Width of the uniform jitter box applied to every assembled point.
    pub fuzz: f64,
}

impl Default for SpiralTreeConfig {
    fn default() -> Self {
        Self {
            height: 14.0,
            base_radius: 5.0,
            spiral_turns: 120.0 / std::f64::consts::TAU,
            fuzz: 0.5,
        }
    }
}

/// Solid cone the ornaments are placed on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConeConfig {
    pub height: f64,
    pub base_radius: f64,
}

impl Default for ConeConfig {
    fn default() -> Self {
        Self {
            height: 14.0,
            base_radius: 5.5,
        }
    }
}

/// Spherical shell the scattered cloud is sampled from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterShellConfig {
    pub inner_radius: f64,
    pub span: f64,
}

impl Default for ScatterShellConfig {
    fn default() -> Self {
        Self {
            inner_radius: 15.0,
            span: 15.0,
        }
    }
}

impl ScatterShellConfig {
    pub fn new(inner_radius: f64, span: f64) -> Self {
        Self { inner_radius, span }
    }
}
