//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer of the Exbase client
//! workspace. It provides the concrete REST client for the platform
//! gateway; the core crate only ever sees it through the
//! [`ApiClientTrait`](xb_core::services::phone::ApiClientTrait) seam.

/// HTTP module - REST gateway client
pub mod http;

pub use http::RestApiClient;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] xb_shared::errors::ConfigError),
}
