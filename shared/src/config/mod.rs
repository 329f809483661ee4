//! Configuration module for the client workspace
//!
//! This module organizes configuration into logical areas:
//! - `api` - Platform gateway endpoints, namespaces, and request options

pub mod api;

// Re-export commonly used types
pub use api::{ApiConfig, ApiVersion, RequestOptions};
