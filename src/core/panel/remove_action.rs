use log::{info, warn};

use super::Callback;
use crate::core::action::Action;
use crate::remote::RemoteError;

/// Result of settling a delete request.
pub enum RemoveOutcome {
    /// The stay was deleted; dispatch the parent's refresh action.
    Removed(Action),
    /// The backend refused; surface the message.
    Failed(String),
    /// No delete was in flight.
    Ignored,
}

/// The remove control of one stay card.
///
/// Holds nothing of the parent except `on_remove_success`. The card stays on
/// screen after a successful delete until the parent's reload lands.
pub struct RemoveStayAction {
    stay_id: String,
    busy: bool,
    awaiting_refresh: bool,
    on_remove_success: Callback,
}

impl RemoveStayAction {
    pub fn new(stay_id: impl Into<String>, on_remove_success: Callback) -> Self {
        Self {
            stay_id: stay_id.into(),
            busy: false,
            awaiting_refresh: false,
            on_remove_success,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// True between a successful delete and the next list refresh.
    pub fn is_awaiting_refresh(&self) -> bool {
        self.awaiting_refresh
    }

    /// Starts a delete. Returns false if one is already running or done.
    pub fn activate(&mut self) -> bool {
        if self.busy || self.awaiting_refresh {
            return false;
        }
        self.busy = true;
        info!("Removing stay {}", self.stay_id);
        true
    }

    pub fn settle(&mut self, result: Result<(), RemoteError>) -> RemoveOutcome {
        if !self.busy {
            return RemoveOutcome::Ignored;
        }
        self.busy = false;

        match result {
            Ok(()) => {
                self.awaiting_refresh = true;
                RemoveOutcome::Removed((self.on_remove_success)())
            }
            Err(e) => {
                warn!("Failed to remove stay {}: {}", self.stay_id, e);
                RemoveOutcome::Failed(e.message().to_string())
            }
        }
    }

    /// Called when the parent list delivers fresh data for this card.
    pub fn refreshed(&mut self) {
        self.awaiting_refresh = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_callback() -> (Callback, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let callback: Callback = Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Action::ReloadStays
        });
        (callback, calls)
    }

    #[test]
    fn success_invokes_callback_once() {
        let (callback, calls) = counting_callback();
        let mut action = RemoveStayAction::new("s1", callback);

        assert!(action.activate());
        assert!(action.is_busy());

        let outcome = action.settle(Ok(()));
        assert!(matches!(outcome, RemoveOutcome::Removed(Action::ReloadStays)));
        assert!(!action.is_busy());
        assert!(action.is_awaiting_refresh());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // A duplicate settlement must not fire the callback again.
        assert!(matches!(action.settle(Ok(())), RemoveOutcome::Ignored));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failure_surfaces_message_and_clears_busy() {
        let (callback, calls) = counting_callback();
        let mut action = RemoveStayAction::new("s1", callback);
        action.activate();

        let outcome = action.settle(Err(RemoteError::Api {
            status: 409,
            message: "cannot delete: has active reservations".to_string(),
        }));
        match outcome {
            RemoveOutcome::Failed(message) => {
                assert_eq!(message, "cannot delete: has active reservations")
            }
            _ => panic!("expected failure"),
        }
        assert!(!action.is_busy());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        // Retry is allowed after a failure.
        assert!(action.activate());
    }

    #[test]
    fn activate_is_ignored_while_busy() {
        let (callback, _) = counting_callback();
        let mut action = RemoveStayAction::new("s1", callback);
        assert!(action.activate());
        assert!(!action.activate());
    }

    #[test]
    fn activate_is_ignored_until_refreshed() {
        let (callback, _) = counting_callback();
        let mut action = RemoveStayAction::new("s1", callback);
        action.activate();
        action.settle(Ok(()));
        assert!(!action.activate());

        action.refreshed();
        assert!(action.activate());
    }
}
