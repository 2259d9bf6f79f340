use thiserror::Error;

/// Top-level error type for Critter.
#[derive(Debug, Error)]
pub enum CritterError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Manifest could not be fetched or decoded.
    #[error("manifest error: {0}")]
    Manifest(String),

    /// Preference storage error.
    #[error("storage error: {0}")]
    Storage(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
