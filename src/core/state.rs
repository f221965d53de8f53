//! The closed set of machine states.
//!
//! The vending machine is always in exactly one of four states. States
//! are plain values with pure inspection methods and no behavior of
//! their own; all behavior lives in the transition function.

use serde::{Deserialize, Serialize};

/// Current position of the machine in its lifecycle.
///
/// The enumeration is closed: every event dispatched to the machine is
/// resolved against exactly these four variants, and the transition
/// table defines an outcome for every (state, event) pair.
///
/// # Example
///
/// ```rust
/// use gumball::core::MachineState;
///
/// let state = MachineState::NoCoin;
/// assert_eq!(state.name(), "NoCoin");
/// assert!(!state.is_sold_out());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MachineState {
    /// Waiting for a coin. Initial state when the hopper is stocked.
    NoCoin,
    /// A coin has been accepted and not yet consumed or returned.
    HasCoin,
    /// The crank has been turned; a sale is in flight awaiting dispense.
    Sold,
    /// The hopper is empty. Initial state when created with no stock.
    SoldOut,
}

impl MachineState {
    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NoCoin => "NoCoin",
            Self::HasCoin => "HasCoin",
            Self::Sold => "Sold",
            Self::SoldOut => "SoldOut",
        }
    }

    /// Check if the machine holds an unconsumed coin.
    pub fn holds_coin(&self) -> bool {
        matches!(self, Self::HasCoin)
    }

    /// Check if a sale is in flight awaiting its dispense step.
    pub fn is_dispensing(&self) -> bool {
        matches!(self, Self::Sold)
    }

    /// Check if the hopper is empty and no sale is in flight.
    ///
    /// `SoldOut` is not terminal in the automaton sense; it is
    /// recoverable only by external restocking, which the machine does
    /// not model.
    pub fn is_sold_out(&self) -> bool {
        matches!(self, Self::SoldOut)
    }

    /// Select the initial state for a machine stocked with `inventory`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gumball::core::MachineState;
    ///
    /// assert_eq!(MachineState::initial(5), MachineState::NoCoin);
    /// assert_eq!(MachineState::initial(0), MachineState::SoldOut);
    /// ```
    pub fn initial(inventory: u32) -> Self {
        if inventory > 0 {
            Self::NoCoin
        } else {
            Self::SoldOut
        }
    }
}
