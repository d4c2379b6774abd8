//! Configuration error types

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}
