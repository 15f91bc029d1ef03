use thiserror::Error;

/// All errors that can occur in PassOP.
#[derive(Debug, Error)]
pub enum PassopError {
    // --- Record errors ---
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("No saved password with id '{0}'")]
    RecordNotFound(String),

    // --- Storage errors ---
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    Config(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for PassOP results.
pub type Result<T> = std::result::Result<T, PassopError>;
