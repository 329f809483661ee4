//! Request and response types for the phone verification flow

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Request to attach a phone number to the current account
///
/// The payload is forwarded to the gateway verbatim; this layer performs no
/// validation (that is the UI's and the gateway's job).
#[derive(Debug, Clone, PartialEq)]
pub struct AddPhoneRequest {
    /// Submission body, opaque to the effect layer
    pub payload: Value,
}

impl AddPhoneRequest {
    /// Build the gateway's documented body for a phone number
    pub fn new(phone_number: &str) -> Self {
        Self {
            payload: json!({ "phone_number": phone_number }),
        }
    }

    /// Use an arbitrary submission body
    pub fn with_payload(payload: Value) -> Self {
        Self { payload }
    }
}

/// Request to (re)send a verification code to a phone number
#[derive(Debug, Clone, PartialEq)]
pub struct SendCodeRequest {
    /// Submission body, opaque to the effect layer
    pub payload: Value,
}

impl SendCodeRequest {
    /// Build the gateway's documented body for a phone number
    pub fn new(phone_number: &str) -> Self {
        Self {
            payload: json!({ "phone_number": phone_number }),
        }
    }

    /// Use an arbitrary submission body
    pub fn with_payload(payload: Value) -> Self {
        Self { payload }
    }
}

/// Request to submit a phone confirmation code
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyPhoneRequest {
    /// Submission body, opaque to the effect layer
    pub payload: Value,
}

impl VerifyPhoneRequest {
    /// Build the gateway's documented body for a number and its code
    pub fn new(phone_number: &str, verification_code: &str) -> Self {
        Self {
            payload: json!({
                "phone_number": phone_number,
                "verification_code": verification_code,
            }),
        }
    }

    /// Use an arbitrary submission body
    pub fn with_payload(payload: Value) -> Self {
        Self { payload }
    }
}

/// Success body returned by the phone endpoints
///
/// Every phone operation answers with a confirmation message; a 2xx body
/// without one counts as malformed and is treated as a failure.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PhoneResponse {
    /// Human-readable confirmation returned by the gateway
    pub message: String,
}
