//! Shared handle for concurrent callers.

use super::GumballMachine;
use crate::core::{EventLog, MachineState, Outcome};
use std::sync::{Arc, Mutex};

/// Cloneable, thread-safe handle to one machine.
///
/// Each operation takes the machine's lock for the duration of one
/// whole event dispatch - including the dispense chained from a crank
/// turn - so concurrent callers observe every (read state, compute
/// transition, apply) sequence as a single atomic step. The state
/// machine has no internal concurrency, so no finer-grained locking
/// exists.
///
/// # Example
///
/// ```rust
/// use gumball::machine::SharedMachine;
///
/// let machine = SharedMachine::new(5);
/// let handle = machine.clone();
///
/// handle.insert_coin();
/// let outcome = machine.turn_crank();
/// assert!(outcome.is_accepted());
/// assert_eq!(machine.inventory(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct SharedMachine {
    inner: Arc<Mutex<GumballMachine>>,
}

impl SharedMachine {
    /// Create a shared machine stocked with `inventory` items.
    pub fn new(inventory: u32) -> Self {
        Self::from_machine(GumballMachine::new(inventory))
    }

    /// Wrap an existing machine.
    pub fn from_machine(machine: GumballMachine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(machine)),
        }
    }

    /// Drop a coin into the slot.
    pub fn insert_coin(&self) -> Outcome {
        self.lock().insert_coin()
    }

    /// Pull the coin-return lever.
    pub fn eject_coin(&self) -> Outcome {
        self.lock().eject_coin()
    }

    /// Turn the crank. The chained dispense happens under the same
    /// lock acquisition.
    pub fn turn_crank(&self) -> Outcome {
        self.lock().turn_crank()
    }

    /// Get the current state.
    pub fn state(&self) -> MachineState {
        self.lock().state()
    }

    /// Get the current inventory count.
    pub fn inventory(&self) -> u32 {
        self.lock().inventory()
    }

    /// Get a snapshot of the event log.
    pub fn log(&self) -> EventLog {
        self.lock().log().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, GumballMachine> {
        // A poisoned lock means a panicking observer, not a torn
        // machine; the state itself is always consistent.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
