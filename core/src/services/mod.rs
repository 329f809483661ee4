//! Effect services performing gateway calls and dispatching outcomes.

pub mod phone;

// Re-export commonly used types
pub use phone::{
    AddPhoneRequest, ApiClientTrait, PhoneService, SendCodeRequest, VerifyPhoneRequest,
};
