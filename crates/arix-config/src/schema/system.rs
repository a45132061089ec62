//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Filter directive for the `arix` crates at this level.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "arix=trace",
            LogLevel::Debug => "arix=debug",
            LogLevel::Info => "arix=info",
            LogLevel::Warn => "arix=warn",
            LogLevel::Error => "arix=error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
