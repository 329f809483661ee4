//! Shared error types for configuration loading

use thiserror::Error;

/// Configuration errors raised while assembling client configuration
/// from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} not set")]
    MissingVar(&'static str),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
