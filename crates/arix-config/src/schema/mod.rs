//! Configuration schema types for Arix.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the values the scene was tuned with.

mod foliage;
mod morph;
mod ornaments;
mod shapes;
mod system;
mod view;

pub use foliage::*;
pub use morph::*;
pub use ornaments::*;
pub use shapes::*;
pub use system::*;
pub use view::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Arix.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArixConfig {
    pub foliage: FoliageConfig,
    pub ornaments: Vec<OrnamentLayerConfig>,
    pub morph: MorphConfig,
    pub camera: CameraConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

impl Default for ArixConfig {
    fn default() -> Self {
        Self {
            foliage: FoliageConfig::default(),
            ornaments: OrnamentLayerConfig::default_layers(),
            morph: MorphConfig::default(),
            camera: CameraConfig::default(),
            window: WindowConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use arix_common::StateSignal;

    #[test]
    fn default_foliage_matches_tuned_scene() {
        let config = ArixConfig::default();
        let f = &config.foliage;
        assert_eq!(f.count, 12_000);
        assert!((f.tree.height - 14.0).abs() < f64::EPSILON);
        assert!((f.tree.base_radius - 5.0).abs() < f64::EPSILON);
        assert!((f.tree.spiral_turns * std::f64::consts::TAU - 120.0).abs() < 1e-9);
        assert!((f.scatter.inner_radius - 15.0).abs() < f64::EPSILON);
        assert!((f.scatter.span - 15.0).abs() < f64::EPSILON);
        assert!((f.speed - 2.0).abs() < f64::EPSILON);
        assert_eq!(f.easing, EasingKind::Smoothstep);
        assert_eq!(f.color_base, "#023825");
        assert_eq!(f.color_highlight, "#D4AF37");
    }

    #[test]
    fn default_ornament_layers() {
        let config = ArixConfig::default();
        let names: Vec<&str> = config.ornaments.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["baubles", "gifts", "lights"]);

        let counts: u32 = config.ornaments.iter().map(|l| l.count).sum();
        assert_eq!(counts, 650);

        for layer in &config.ornaments {
            assert!((layer.speed - 2.5).abs() < f64::EPSILON);
            assert_eq!(layer.easing, EasingKind::CubicInOut);
            assert_eq!(layer.placement, OrnamentPlacement::Edge);
            assert!((layer.tree.base_radius - 5.5).abs() < f64::EPSILON);
            assert!((layer.scatter.inner_radius - 20.0).abs() < f64::EPSILON);
        }
        assert_eq!(config.ornaments[1].shape, OrnamentShape::Cube);
        assert!(config.ornaments[2].material.emissive_intensity > 1.0);
        assert_eq!(config.ornaments[2].material.emissive, "#FFD700");
        assert_eq!(config.ornaments[2].palette, ["#FFFFFF"]);
    }

    #[test]
    fn default_morph_config() {
        let config = ArixConfig::default();
        assert_eq!(config.morph.initial_state, StateSignal::Scattered);
        assert_eq!(config.morph.overshoot, OvershootPolicy::ClampStep);
        assert!(config.morph.seed.is_none());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: ArixConfig = toml::from_str(
            r#"
[foliage]
count = 500

[morph]
initial_state = "assembled"
overshoot = "allow"
"#,
        )
        .unwrap();
        assert_eq!(config.foliage.count, 500);
        assert!((config.foliage.tree.height - 14.0).abs() < f64::EPSILON);
        assert_eq!(config.morph.initial_state, StateSignal::Assembled);
        assert_eq!(config.morph.overshoot, OvershootPolicy::Allow);
        assert_eq!(config.ornaments.len(), 3);
    }

    #[test]
    fn ornament_tables_replace_default_layers() {
        let config: ArixConfig = toml::from_str(
            r##"
[[ornaments]]
name = "stars"
count = 40
shape = "sphere"
palette = ["#ffffff"]
placement = "disc"
"##,
        )
        .unwrap();
        assert_eq!(config.ornaments.len(), 1);
        let layer = &config.ornaments[0];
        assert_eq!(layer.name, "stars");
        assert_eq!(layer.count, 40);
        assert_eq!(layer.placement, OrnamentPlacement::Disc);
        // Unspecified layer fields fall back to layer defaults
        assert!((layer.speed - 2.5).abs() < f64::EPSILON);
    }
}
