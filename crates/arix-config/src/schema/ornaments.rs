//! Ornament layer configuration.

use serde::{Deserialize, Serialize};

use super::shapes::{ConeConfig, EasingKind, ScatterShellConfig};

/// Mesh every instance of a layer is drawn with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum OrnamentShape {
    #[default]
    Sphere,
    Cube,
}

/// How assembled radii are drawn at a given height.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum OrnamentPlacement {
    /// Concentrated near the cone's silhouette.
    #[default]
    Edge,
    /// Area-uniform over the disc at that height.
    Disc,
}

/// Per-frame motion layered over the morph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceMotionConfig {
    pub float_amplitude: f64,
    pub spin_x: f64,
    pub spin_y: f64,
    pub pulsate_base: f64,
    pub pulsate_amplitude: f64,
    pub pulsate_frequency: f64,
}

impl Default for InstanceMotionConfig {
    fn default() -> Self {
        Self {
            float_amplitude: 0.2,
            spin_x: 0.2,
            spin_y: 0.3,
            pulsate_base: 0.8,
            pulsate_amplitude: 0.2,
            pulsate_frequency: 2.0,
        }
    }
}

/// Surface response of a layer's instances.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrnamentMaterialConfig {
    pub metalness: f64,
    pub roughness: f64,
    /// Glow color added on top of the shaded base color.
    pub emissive: String,
    /// Strength of `emissive`; zero turns the glow off.
    pub emissive_intensity: f64,
}

impl Default for OrnamentMaterialConfig {
    fn default() -> Self {
        Self {
            metalness: 0.6,
            roughness: 0.2,
            emissive: "#000000".into(),
            emissive_intensity: 0.0,
        }
    }
}

/// One discrete population of CPU-morphed instances.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrnamentLayerConfig {
    pub name: String,
    pub count: u32,
    pub shape: OrnamentShape,
    pub scale_min: f64,
    pub scale_max: f64,
    pub palette: Vec<String>,
    pub placement: OrnamentPlacement,
    pub tree: ConeConfig,
    pub scatter: ScatterShellConfig,
    pub speed: f64,
    pub easing: EasingKind,
    pub motion: InstanceMotionConfig,
    pub material: OrnamentMaterialConfig,
}

impl Default for OrnamentLayerConfig {
    fn default() -> Self {
        Self {
            name: "ornaments".into(),
            count: 100,
            shape: OrnamentShape::Sphere,
            scale_min: 0.2,
            scale_max: 0.4,
            palette: vec!["#FFD700".into()],
            placement: OrnamentPlacement::Edge,
            tree: ConeConfig::default(),
            scatter: ScatterShellConfig::new(20.0, 10.0),
            speed: 2.5,
            easing: EasingKind::CubicInOut,
            motion: InstanceMotionConfig::default(),
            material: OrnamentMaterialConfig::default(),
        }
    }
}

impl OrnamentLayerConfig {
    /// Golden baubles.
    pub fn baubles() -> Self {
        Self {
            name: "baubles".into(),
            count: 200,
            shape: OrnamentShape::Sphere,
            scale_min: 0.2,
            scale_max: 0.4,
            palette: vec![
                "#F9A602".into(),
                "#FFD700".into(),
                "#DAA520".into(),
                "#C5B358".into(),
            ],
            material: OrnamentMaterialConfig {
                metalness: 1.0,
                roughness: 0.15,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Red and gold gift boxes.
    pub fn gifts() -> Self {
        Self {
            name: "gifts".into(),
            count: 150,
            shape: OrnamentShape::Cube,
            scale_min: 0.25,
            scale_max: 0.5,
            palette: vec![
                "#8B0000".into(),
                "#560319".into(),
                "#F9A602".into(),
                "#DAA520".into(),
            ],
            ..Default::default()
        }
    }

    /// Tiny emissive light dots.
    pub fn lights() -> Self {
        Self {
            name: "lights".into(),
            count: 300,
            shape: OrnamentShape::Sphere,
            scale_min: 0.05,
            scale_max: 0.1,
            palette: vec!["#FFFFFF".into()],
            material: OrnamentMaterialConfig {
                metalness: 0.0,
                roughness: 1.0,
                emissive: "#FFD700".into(),
                emissive_intensity: 4.0,
            },
            ..Default::default()
        }
    }

    pub fn default_layers() -> Vec<Self> {
        vec![Self::baubles(), Self::gifts(), Self::lights()]
    }
}
