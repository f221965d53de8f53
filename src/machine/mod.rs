//! The vending machine shell.
//!
//! This module provides the "imperative shell" around the pure core:
//! it owns the current state and inventory, dispatches events through
//! the transition function, applies the results, and keeps the event
//! log.
//!
//! # Key Concepts
//!
//! - **Dispatch**: every operation is one pass through the pure
//!   transition function followed by applying its result
//! - **Crank chaining**: a crank turn that lands in `Sold` performs the
//!   dispense step synchronously within the same call
//! - **Observers**: injected read-only collaborators notified after
//!   every dispatch

pub mod shared;

pub use shared::SharedMachine;

use crate::core::{step, Event, EventLog, EventRecord, MachineState, Outcome};
use crate::monitor::MachineObserver;
use chrono::Utc;
use std::fmt;

/// A vending machine: inventory count, current state, event log.
///
/// The machine exposes its three physical controls as operations. Each
/// dispatch resolves against the transition table and always returns an
/// [`Outcome`] - an ill-timed request is absorbed as a rejection, never
/// a fault. The dispense step that completes a sale is chained
/// internally from [`turn_crank`](Self::turn_crank) and can never be
/// fed by callers.
///
/// The machine is single-threaded and synchronous. To share one
/// instance across threads, wrap it in [`SharedMachine`], which holds
/// one lock for the duration of each dispatch including the chained
/// dispense.
///
/// # Example
///
/// ```rust
/// use gumball::machine::GumballMachine;
/// use gumball::core::MachineState;
///
/// let mut machine = GumballMachine::new(2);
/// assert_eq!(machine.state(), MachineState::NoCoin);
///
/// machine.insert_coin();
/// let outcome = machine.turn_crank();
/// assert!(outcome.is_accepted());
/// assert_eq!(machine.inventory(), 1);
/// assert_eq!(machine.state(), MachineState::NoCoin);
/// ```
pub struct GumballMachine {
    state: MachineState,
    inventory: u32,
    log: EventLog,
    observers: Vec<Box<dyn MachineObserver>>,
}

impl fmt::Debug for GumballMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GumballMachine")
            .field("state", &self.state)
            .field("inventory", &self.inventory)
            .field("log_len", &self.log.records().len())
            .field("observer_count", &self.observers.len())
            .finish()
    }
}

impl GumballMachine {
    /// Create a machine stocked with `inventory` items.
    ///
    /// Starts in `NoCoin` when stocked, `SoldOut` when empty.
    pub fn new(inventory: u32) -> Self {
        Self {
            state: MachineState::initial(inventory),
            inventory,
            log: EventLog::new(),
            observers: Vec::new(),
        }
    }

    /// Register an observer to be notified after every dispatch.
    ///
    /// Observers are read-only collaborators; they receive the record
    /// of each dispatched event and cannot mutate the machine.
    pub fn register_observer(&mut self, observer: Box<dyn MachineObserver>) {
        self.observers.push(observer);
    }

    /// Get the current state (pure).
    pub fn state(&self) -> MachineState {
        self.state
    }

    /// Get the current inventory count (pure).
    pub fn inventory(&self) -> u32 {
        self.inventory
    }

    /// Get the event log (pure).
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Drop a coin into the slot.
    pub fn insert_coin(&mut self) -> Outcome {
        self.dispatch(Event::InsertCoin)
    }

    /// Pull the coin-return lever.
    pub fn eject_coin(&mut self) -> Outcome {
        self.dispatch(Event::EjectCoin)
    }

    /// Turn the crank.
    ///
    /// A crank turn from `HasCoin` moves the machine to `Sold` and then
    /// immediately performs the dispense step within the same call; the
    /// returned outcome is the dispense outcome, so the caller observes
    /// the completed sale. Both steps appear in the log.
    pub fn turn_crank(&mut self) -> Outcome {
        let outcome = self.dispatch(Event::TurnCrank);
        // Chaining keys off the state the crank landed in, not the
        // crank's own outcome.
        if self.state.is_dispensing() {
            return self.dispatch(Event::Dispense);
        }
        outcome
    }

    /// Dispatch one event: resolve it against the transition table,
    /// apply the result, record it, notify observers.
    fn dispatch(&mut self, event: Event) -> Outcome {
        let result = step(self.state, event, self.inventory);

        let record = EventRecord {
            from: self.state,
            to: result.next,
            event,
            outcome: result.outcome,
            timestamp: Utc::now(),
        };

        self.state = result.next;
        self.inventory = result.inventory;
        self.log = self.log.record(record.clone());

        for observer in &self.observers {
            observer.on_event(&record);
        }

        result.outcome
    }
}

impl fmt::Display for GumballMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let readout = match self.state {
            MachineState::NoCoin => "waiting for a coin",
            MachineState::HasCoin => "holding a coin",
            MachineState::Sold => "dispensing a gumball",
            MachineState::SoldOut => "sold out",
        };
        let unit = if self.inventory == 1 {
            "gumball"
        } else {
            "gumballs"
        };
        write!(f, "Inventory: {} {unit}, machine is {readout}", self.inventory)
    }
}
