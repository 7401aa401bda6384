use crate::events::LendingEvent;

/// Trait for lending transition observation
pub trait LendingObserver {
    /// Called after a check-out or return has been applied
    fn on_transition(&self, event: &LendingEvent);
}

/// Logs all transitions that occur in the library
#[derive(Debug)]
pub struct TransitionLogger;

impl LendingObserver for TransitionLogger {
    fn on_transition(&self, event: &LendingEvent) {
        match event {
            LendingEvent::CheckedOut { title, borrower_id, .. } => {
                tracing::info!(%title, %borrower_id, "item checked out");
            }
            LendingEvent::Returned { title, borrower_id, .. } => {
                tracing::info!(%title, %borrower_id, "item returned");
            }
        }
    }
}
