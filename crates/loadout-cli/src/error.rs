//! Error handling for the loadout CLI.

use loadout_config::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration resolution or validation failures
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors while emitting the record
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors for the emitted record
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
