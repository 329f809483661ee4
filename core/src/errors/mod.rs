//! Error types for remote gateway calls
//!
//! The effect services absorb every failure of a gateway call into a single
//! error kind and re-express it as dispatched actions; no error crosses a
//! service's public contract.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a call to the platform gateway
///
/// Transport failures, non-2xx statuses, and malformed response bodies all
/// map to this one kind. `status` is present only when the gateway produced
/// a response.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("remote call failed: {message}")]
pub struct RemoteCallError {
    /// HTTP status code, when the gateway answered
    pub status: Option<u16>,

    /// Transport or gateway error message
    pub message: String,
}

impl RemoteCallError {
    /// Create an error without an HTTP status (transport-level failure)
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// Create an error carrying the gateway's HTTP status
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }
}

/// Result type for gateway calls
pub type ApiResult<T> = Result<T, RemoteCallError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RemoteCallError::with_status(422, "invalid code");
        assert_eq!(err.to_string(), "remote call failed: invalid code");
        assert_eq!(err.status, Some(422));

        let err = RemoteCallError::new("connection refused");
        assert_eq!(err.status, None);
    }

    #[test]
    fn test_error_clone_is_equal() {
        let err = RemoteCallError::with_status(500, "boom");
        assert_eq!(err.clone(), err);
    }
}
