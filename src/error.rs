use thiserror::Error;

/// Custom error types for soko
#[derive(Debug, Error)]
pub enum SokoError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
