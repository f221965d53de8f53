//! Gumball: a pure functional vending machine state core
//!
//! Gumball follows a "pure core, imperative shell" design. The entire
//! behavior of the machine is one total transition function from
//! (state, event, inventory) to (next state, inventory, outcome); the
//! shell owns the mutable fields, feeds events through that function,
//! and keeps the log.
//!
//! # Core Concepts
//!
//! - **States**: a closed four-variant enumeration - `NoCoin`,
//!   `HasCoin`, `Sold`, `SoldOut`
//! - **Events**: insert coin, eject coin, turn crank, plus the
//!   internal dispense that completes a sale
//! - **Totality**: every (state, event) pair has a defined outcome; an
//!   ill-timed request is absorbed as an informational rejection,
//!   never a fault
//! - **Crank chaining**: a crank turn that lands in `Sold` performs
//!   the dispense step synchronously within the same call
//!
//! # Example
//!
//! ```rust
//! use gumball::core::{Effect, MachineState, Outcome};
//! use gumball::machine::GumballMachine;
//!
//! let mut machine = GumballMachine::new(2);
//!
//! machine.insert_coin();
//! let outcome = machine.turn_crank();
//! assert_eq!(outcome, Outcome::Accepted(Effect::Dispensed { remaining: 1 }));
//!
//! // An ill-timed request is absorbed, never raised.
//! let outcome = machine.turn_crank();
//! assert!(outcome.is_rejected());
//! assert_eq!(machine.state(), MachineState::NoCoin);
//! ```

pub mod core;
pub mod machine;
pub mod monitor;

// Re-export commonly used types
pub use crate::core::{Effect, Event, EventLog, EventRecord, MachineState, Outcome, Rejection};
pub use crate::machine::{GumballMachine, SharedMachine};
pub use crate::monitor::{MachineObserver, TransitionLogger};
