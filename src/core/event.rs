//! The closed alphabet of machine events.

use serde::{Deserialize, Serialize};

/// An external or internal stimulus dispatched to the machine.
///
/// The first three variants correspond to the machine's physical
/// controls. `Dispense` completes a sale and is produced only by the
/// machine itself, immediately after a crank turn lands in
/// [`MachineState::Sold`](super::MachineState::Sold); it is part of the
/// alphabet so the transition function stays total.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Event {
    /// A coin was dropped into the slot.
    InsertCoin,
    /// The coin-return lever was pulled.
    EjectCoin,
    /// The crank was turned.
    TurnCrank,
    /// Release one item from the hopper. Internal.
    Dispense,
}

impl Event {
    /// Get the event's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InsertCoin => "InsertCoin",
            Self::EjectCoin => "EjectCoin",
            Self::TurnCrank => "TurnCrank",
            Self::Dispense => "Dispense",
        }
    }
}
