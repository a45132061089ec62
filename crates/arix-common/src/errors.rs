use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ArixError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("window error: {0}")]
    Window(String),
}
