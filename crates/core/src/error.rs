use std::io;

/// Errors that can occur during exrunner operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Unknown refactoring: {0}")]
    UnknownRefactoring(String),
}

/// Result type alias for exrunner operations
pub type Result<T> = std::result::Result<T, Error>;
