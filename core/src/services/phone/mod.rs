//! Phone verification flow
//!
//! Client-side effects of the phone KYC flow:
//! - Attaching a phone number to the account
//! - Requesting (and re-requesting) a verification code
//! - Submitting the confirmation code
//!
//! Each operation performs one gateway call and dispatches exactly one
//! outcome pair into the application state stream.

mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use service::PhoneService;
pub use traits::ApiClientTrait;
pub use types::{AddPhoneRequest, PhoneResponse, SendCodeRequest, VerifyPhoneRequest};
