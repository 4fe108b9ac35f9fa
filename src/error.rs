//! Error types for the emoji picker
//!
//! Catalog construction and search never fail; loading configuration and
//! serializing results for a frontend can.

use thiserror::Error;

/// Errors that can occur while setting up the picker
#[derive(Debug, Error)]
pub enum PickerError {
    /// Configuration values that cannot be used
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unicode property matcher errors
    #[error("Pattern error: {0}")]
    Regex(#[from] regex::Error),

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for picker operations
pub type PickerResult<T> = Result<T, PickerError>;
