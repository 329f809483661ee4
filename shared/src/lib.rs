//! Shared utilities and common types for the Exbase client
//!
//! This crate provides functionality used across the client workspace:
//! - Gateway configuration types
//! - API namespace selection (request options)
//! - Configuration error types

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{ApiConfig, ApiVersion, RequestOptions};
pub use errors::ConfigError;
