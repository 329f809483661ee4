//! Global UI alert actions
//!
//! Alerts are keyed rather than worded: the `key` is resolved to localized
//! copy by the UI layer.

use crate::errors::RemoteCallError;

/// Alert actions consumed by the UI notification layer
#[derive(Debug, Clone, PartialEq)]
pub enum AlertAction {
    /// A localized success notification
    Success { key: String },

    /// An error notification carrying the failure that caused it
    Error { error: RemoteCallError },
}

impl AlertAction {
    /// Success alert for a known localization key
    pub fn success(key: impl Into<String>) -> Self {
        AlertAction::Success { key: key.into() }
    }

    /// Error alert for a failed gateway call
    pub fn error(error: RemoteCallError) -> Self {
        AlertAction::Error { error }
    }
}

/// Localization keys used by the phone verification flow
pub mod success_keys {
    /// Phone number confirmed with a valid code
    pub const PHONE_CONFIRMED: &str = "success.phone.confirmed";

    /// Verification code sent (covers both create and resend)
    pub const PHONE_VERIFICATION_SENT: &str = "success.phone.verification.send";
}
