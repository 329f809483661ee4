//! Actions dispatched into the application state stream
//!
//! Effect services communicate exclusively by dispatching these typed
//! messages; reducers and UI subscribers on the other side of the channel
//! decide what to do with them.

pub mod alert;
pub mod phone;

pub use alert::{success_keys, AlertAction};
pub use phone::PhoneAction;

/// Top-level action type carried on the dispatch channel
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Phone verification flow actions
    Phone(PhoneAction),

    /// Global UI alert actions
    Alert(AlertAction),
}
