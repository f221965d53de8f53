//! Event log tracking.
//!
//! Provides immutable tracking of every event dispatched to the
//! machine over time, accepted and rejected alike, following
//! functional programming principles.

use super::event::Event;
use super::outcome::{Effect, Outcome};
use super::state::MachineState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single dispatched event.
///
/// Records are immutable values describing what the machine was asked
/// to do, what it answered, and where that left it.
///
/// # Example
///
/// ```rust
/// use gumball::core::{Effect, Event, EventRecord, MachineState, Outcome};
/// use chrono::Utc;
///
/// let record = EventRecord {
///     from: MachineState::NoCoin,
///     to: MachineState::HasCoin,
///     event: Event::InsertCoin,
///     outcome: Outcome::Accepted(Effect::CoinAccepted),
///     timestamp: Utc::now(),
/// };
/// assert!(record.changed_state());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// The state the event was dispatched against.
    pub from: MachineState,
    /// The state after the event.
    pub to: MachineState,
    /// The event that was dispatched.
    pub event: Event,
    /// What the dispatch produced.
    pub outcome: Outcome,
    /// When the event was dispatched.
    pub timestamp: DateTime<Utc>,
}

impl EventRecord {
    /// Check if the event moved the machine to a different state.
    pub fn changed_state(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered log of dispatched events.
///
/// The log is immutable - `record` returns a new log with the entry
/// added, following functional programming principles.
///
/// # Example
///
/// ```rust
/// use gumball::core::{Effect, Event, EventLog, EventRecord, MachineState, Outcome};
/// use chrono::Utc;
///
/// let log = EventLog::new();
/// let log = log.record(EventRecord {
///     from: MachineState::NoCoin,
///     to: MachineState::HasCoin,
///     event: Event::InsertCoin,
///     outcome: Outcome::Accepted(Effect::CoinAccepted),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.records().len(), 1);
/// assert_eq!(log.dispensed(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    records: Vec<EventRecord>,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record an event, returning a new log.
    ///
    /// This is a pure function - it does not mutate the existing log
    /// but returns a new one with the record added.
    pub fn record(&self, record: EventRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the initial state followed by the state after each
    /// event that changed state. Rejected events do not appear in the
    /// path.
    pub fn path(&self) -> Vec<MachineState> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        for record in &self.records {
            if record.changed_state() {
                path.push(record.to);
            }
        }
        path
    }

    /// Count completed dispenses.
    pub fn dispensed(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Accepted(Effect::Dispensed { .. })))
            .count()
    }

    /// Count rejected events.
    pub fn rejections(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome.is_rejected())
            .count()
    }

    /// Calculate total duration from first to last record.
    ///
    /// Returns `None` if the log is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all records in order.
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rejection;

    fn accepted(from: MachineState, to: MachineState, event: Event, effect: Effect) -> EventRecord {
        EventRecord {
            from,
            to,
            event,
            outcome: Outcome::Accepted(effect),
            timestamp: Utc::now(),
        }
    }

    fn rejected(state: MachineState, event: Event, rejection: Rejection) -> EventRecord {
        EventRecord {
            from: state,
            to: state,
            event,
            outcome: Outcome::Rejected(rejection),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_log_is_empty() {
        let log = EventLog::new();
        assert_eq!(log.records().len(), 0);
        assert!(log.path().is_empty());
        assert!(log.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let log = EventLog::new();
        let record = accepted(
            MachineState::NoCoin,
            MachineState::HasCoin,
            Event::InsertCoin,
            Effect::CoinAccepted,
        );

        let new_log = log.record(record);

        assert_eq!(log.records().len(), 0);
        assert_eq!(new_log.records().len(), 1);
    }

    #[test]
    fn path_skips_rejected_events() {
        let log = EventLog::new()
            .record(rejected(
                MachineState::NoCoin,
                Event::TurnCrank,
                Rejection::CoinRequired,
            ))
            .record(accepted(
                MachineState::NoCoin,
                MachineState::HasCoin,
                Event::InsertCoin,
                Effect::CoinAccepted,
            ))
            .record(accepted(
                MachineState::HasCoin,
                MachineState::Sold,
                Event::TurnCrank,
                Effect::CrankTurned,
            ));

        let path = log.path();
        assert_eq!(
            path,
            vec![
                MachineState::NoCoin,
                MachineState::HasCoin,
                MachineState::Sold
            ]
        );
    }

    #[test]
    fn dispensed_counts_only_dispense_effects() {
        let log = EventLog::new()
            .record(accepted(
                MachineState::NoCoin,
                MachineState::HasCoin,
                Event::InsertCoin,
                Effect::CoinAccepted,
            ))
            .record(accepted(
                MachineState::Sold,
                MachineState::NoCoin,
                Event::Dispense,
                Effect::Dispensed { remaining: 4 },
            ))
            .record(accepted(
                MachineState::Sold,
                MachineState::SoldOut,
                Event::Dispense,
                Effect::Dispensed { remaining: 0 },
            ));

        assert_eq!(log.dispensed(), 2);
    }

    #[test]
    fn rejections_counts_absorbed_events() {
        let log = EventLog::new()
            .record(rejected(
                MachineState::SoldOut,
                Event::InsertCoin,
                Rejection::SoldOut,
            ))
            .record(rejected(
                MachineState::SoldOut,
                Event::TurnCrank,
                Rejection::NoInventory,
            ));

        assert_eq!(log.rejections(), 2);
        assert_eq!(log.dispensed(), 0);
    }

    #[test]
    fn log_serializes_correctly() {
        let log = EventLog::new().record(accepted(
            MachineState::NoCoin,
            MachineState::HasCoin,
            Event::InsertCoin,
            Effect::CoinAccepted,
        ));

        let json = serde_json::to_string(&log).unwrap();
        let deserialized: EventLog = serde_json::from_str(&json).unwrap();
        assert_eq!(log.records().len(), deserialized.records().len());
    }

    #[test]
    fn single_record_has_duration_zero() {
        let log = EventLog::new().record(accepted(
            MachineState::NoCoin,
            MachineState::HasCoin,
            Event::InsertCoin,
            Effect::CoinAccepted,
        ));

        assert_eq!(log.duration().unwrap(), Duration::from_secs(0));
    }
}
