//! Core error types for prodtimer-core.
//!
//! Rejected operations surface as errors with the prior state left
//! unchanged; no-op conditions (double start, stop while idle) are not
//! errors and return the unchanged state silently.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for prodtimer-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Timer-related errors
    #[error("Timer error: {0}")]
    Timer(#[from] TimerError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Timer domain errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// A configured or requested duration was not positive.
    #[error("invalid duration: {ms} ms (must be positive)")]
    InvalidDuration { ms: u64 },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Configuration directory could not be determined or created
    #[error("Could not prepare configuration directory: {0}")]
    NoConfigDir(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
