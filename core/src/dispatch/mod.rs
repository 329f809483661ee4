//! Dispatch channel for actions
//!
//! Effect services hold a [`Dispatcher`] and send typed [`Action`]s through
//! it; the surrounding application owns the receiving half and feeds the
//! actions to its reducers. The channel is unbounded: dispatch is
//! synchronous and ordered, so an effect's actions arrive in the order it
//! emitted them.

use tokio::sync::mpsc;

use crate::domain::actions::Action;

/// Cloneable sender handle for the application action stream
#[derive(Debug, Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Action>,
}

impl Dispatcher {
    /// Create a dispatcher and the receiver the application consumes
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Send an action into the application state stream
    ///
    /// Dispatch never fails the caller. Once the receiver is gone the
    /// surrounding runtime has shut the flow down, so the action is logged
    /// and dropped.
    pub fn dispatch(&self, action: Action) {
        if self.tx.send(action).is_err() {
            tracing::warn!(
                event = "dispatch_dropped",
                "action dropped, store receiver closed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::actions::{success_keys, AlertAction};

    #[test]
    fn test_dispatch_preserves_order() {
        let (dispatcher, mut rx) = Dispatcher::channel();

        dispatcher.dispatch(Action::Alert(AlertAction::success(success_keys::PHONE_CONFIRMED)));
        dispatcher.dispatch(Action::Alert(AlertAction::success(
            success_keys::PHONE_VERIFICATION_SENT,
        )));

        assert_eq!(
            rx.try_recv().unwrap(),
            Action::Alert(AlertAction::success(success_keys::PHONE_CONFIRMED))
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            Action::Alert(AlertAction::success(success_keys::PHONE_VERIFICATION_SENT))
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dispatch_into_closed_channel_does_not_panic() {
        let (dispatcher, rx) = Dispatcher::channel();
        drop(rx);

        dispatcher.dispatch(Action::Alert(AlertAction::success(success_keys::PHONE_CONFIRMED)));
    }
}
