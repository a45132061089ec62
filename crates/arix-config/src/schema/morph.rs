//! Morph integrator configuration.

use arix_common::StateSignal;
use serde::{Deserialize, Serialize};

/// What the progress integrator does when `speed * delta` reaches 1.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum OvershootPolicy {
    /// Cap the per-frame gain at 1 so a long frame lands on the target.
    #[default]
    ClampStep,
    /// Raw first-order recurrence; may overshoot past the target.
    Allow,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct MorphConfig {
    pub initial_state: StateSignal,
    pub overshoot: OvershootPolicy,
    /// Fixed seed for every distribution; fresh randomness when unset.
    pub seed: Option<u64>,
}
