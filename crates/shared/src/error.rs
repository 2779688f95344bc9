//! Error types for configuration loading

use thiserror::Error;

/// Error raised while loading or validating a [`StoreConfig`](crate::StoreConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
