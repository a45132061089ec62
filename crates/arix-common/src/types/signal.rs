use serde::{Deserialize, Serialize};

/// The binary toggle driving every population's morph target.
///
/// Owned by the host application. The morph core reads it once per frame
/// and never writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateSignal {
    #[default]
    Scattered,
    Assembled,
}

impl StateSignal {
    pub fn toggle(&mut self) {
        *self = match self {
            StateSignal::Scattered => StateSignal::Assembled,
            StateSignal::Assembled => StateSignal::Scattered,
        };
    }

    /// Progress value this state pulls toward: 0 scattered, 1 assembled.
    pub fn target(self) -> f32 {
        match self {
            StateSignal::Scattered => 0.0,
            StateSignal::Assembled => 1.0,
        }
    }
}

/// Per-frame timing handed to the morph core by the host's frame clock.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Seconds since the previous frame.
    pub delta: f32,
    /// Seconds since the clock started.
    pub elapsed: f32,
}
