//! # Exbase Core
//!
//! Client-side domain layer for the Exbase trading platform.
//! This crate contains the dispatched action types, the dispatch channel
//! handle, effect services that talk to the platform gateway, and the
//! error types shared by all of them.

pub mod dispatch;
pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use dispatch::*;
pub use domain::*;
pub use errors::*;
pub use services::*;
