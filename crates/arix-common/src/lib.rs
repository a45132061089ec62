pub mod errors;
pub mod types;

pub use errors::{ArixError, ConfigError};
pub use types::{Color, FrameTime, StateSignal};

pub type Result<T> = std::result::Result<T, ArixError>;
