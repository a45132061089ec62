//! Camera and window configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f64,
    /// Distance from the camera to the scene origin along +Z.
    pub distance: f64,
    /// Vertical offset applied to the whole tree group.
    pub offset_y: f64,
    pub near: f64,
    pub far: f64,
    /// Slow bob and tilt of the whole tree group.
    pub sway: SwayConfig,
}

/// Whole-group float. Zero intensities hold the tree still.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SwayConfig {
    pub speed: f64,
    /// Scales the tilt about each axis (peak 1/8 rad at 1.0).
    pub rotation_intensity: f64,
    /// Scales the vertical bob (peak 0.1 units at 1.0).
    pub float_intensity: f64,
}

impl Default for SwayConfig {
    fn default() -> Self {
        Self {
            speed: 2.0,
            rotation_intensity: 0.1,
            float_intensity: 0.2,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 35.0,
            distance: 35.0,
            offset_y: -2.0,
            near: 0.1,
            far: 200.0,
            sway: SwayConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_color: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Arix".into(),
            width: 1280,
            height: 800,
            clear_color: "#020403".into(),
        }
    }
}
