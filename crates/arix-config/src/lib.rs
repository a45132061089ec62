//! Arix configuration system.
//!
//! TOML-based configuration for the foliage point cloud, the ornament
//! layers, the morph integrator, camera, window, and logging. Every section
//! uses serde defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use arix_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod colors;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ArixConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use arix_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path gets a commented template on first run. An explicit
/// path that does not exist is an error.
pub fn load_config(path: Option<&Path>) -> Result<ArixConfig, ConfigError> {
    match path {
        Some(p) => {
            if !p.exists() {
                return Err(ConfigError::FileNotFound(p.to_path_buf()));
            }
            toml_loader::load_from_path(p)
        }
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ArixConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
