//! Actions of the phone verification flow

use crate::errors::RemoteCallError;

/// Outcomes of the phone verification operations
///
/// Each gateway operation produces exactly one of its two variants per
/// invocation. The `message` fields carry the gateway's confirmation text
/// into application state.
#[derive(Debug, Clone, PartialEq)]
pub enum PhoneAction {
    /// A phone record was attached to the account
    Created { message: String },

    /// Attaching a phone record failed
    CreateFailed { error: RemoteCallError },

    /// A verification code was (re)sent to the phone
    CodeSent { message: String },

    /// Requesting a verification code failed
    SendCodeFailed { error: RemoteCallError },

    /// The confirmation code was accepted by the gateway
    Verified { message: String },

    /// The confirmation code was rejected or the call failed
    VerifyFailed { error: RemoteCallError },
}
