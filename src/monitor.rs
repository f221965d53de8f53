//! Reporting collaborators.
//!
//! Observers are the machine's only outward-facing seam: they receive
//! the record of each dispatched event and format or forward it for
//! humans. They are injected per machine rather than registered
//! process-wide, and they cannot mutate the machine.

use crate::core::{EventRecord, Outcome};

/// Read-only collaborator notified after every dispatched event.
pub trait MachineObserver: Send + Sync {
    /// Called once per dispatch, after the result has been applied.
    fn on_event(&self, record: &EventRecord);
}

/// Emits a structured tracing event per dispatch.
///
/// Accepted events log at `info`, rejections at `debug` - a rejection
/// is an expected no-op answer, not an error condition.
#[derive(Debug, Default)]
pub struct TransitionLogger;

impl TransitionLogger {
    /// Create a logger.
    pub fn new() -> Self {
        Self
    }
}

impl MachineObserver for TransitionLogger {
    fn on_event(&self, record: &EventRecord) {
        match &record.outcome {
            Outcome::Accepted(effect) => {
                tracing::info!(
                    event = record.event.name(),
                    from = record.from.name(),
                    to = record.to.name(),
                    %effect,
                    "event accepted"
                );
            }
            Outcome::Rejected(rejection) => {
                tracing::debug!(
                    event = record.event.name(),
                    state = record.from.name(),
                    reason = %rejection,
                    "event rejected"
                );
            }
        }
    }
}
