//! Full configuration validation.
//!
//! Validates numeric ranges, palettes, and color formats. Each domain has
//! its own submodule; this orchestrator calls them all and collects errors
//! into a single `ConfigError`.

mod foliage;
mod helpers;
mod ornaments;
mod view;


use crate::schema::ArixConfig;
use arix_common::ConfigError;

/// Upper bound on a single ornament layer. Every instance is transformed on
/// the CPU each frame, so this is the frame-budget ceiling.
pub const MAX_ORNAMENT_LAYER_COUNT: u32 = 2_000;

/// Upper bound on the foliage point count.
pub const MAX_FOLIAGE_COUNT: u32 = 1_000_000;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ArixConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    foliage::validate_foliage(&mut errors, config);
    ornaments::validate_ornaments(&mut errors, config);
    view::validate_camera(&mut errors, config);
    view::validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
