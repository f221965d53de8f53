//! Outcomes of dispatching an event.
//!
//! Every (state, event) pair resolves to an outcome: either the event
//! was accepted and produced an observable effect, or it was absorbed
//! as a no-op with an informational rejection. Rejections are never
//! faults; the machine has a defined response to every request, however
//! ill-timed.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Observable effect of a successfully applied event.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Effect {
    /// A coin was accepted and is now held by the machine.
    CoinAccepted,
    /// The held coin was returned to the customer.
    CoinReturned,
    /// The crank engaged; a sale is now in flight.
    CrankTurned,
    /// One item rolled out of the hopper.
    Dispensed {
        /// Items left in the hopper after this dispense.
        remaining: u32,
    },
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoinAccepted => write!(f, "You inserted a coin"),
            Self::CoinReturned => write!(f, "Coin returned"),
            Self::CrankTurned => write!(f, "You turned..."),
            Self::Dispensed { .. } => {
                write!(f, "A gumball comes rolling out the slot...")
            }
        }
    }
}

/// Reason an event was absorbed as a no-op.
///
/// Derives [`thiserror::Error`] for its message formatting only; a
/// rejection is an informational outcome, never raised or propagated
/// as a failure.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error, Serialize, Deserialize)]
pub enum Rejection {
    #[error("You can't insert another coin")]
    CoinAlreadyInserted,

    #[error("You haven't inserted a coin")]
    NoCoinToReturn,

    #[error("You turned, but there's no coin")]
    CoinRequired,

    #[error("Please wait, we're already giving you a gumball")]
    DispenseInProgress,

    #[error("Sorry, you already turned the crank")]
    CrankAlreadyTurned,

    #[error("You can't insert a coin, the machine is sold out")]
    SoldOut,

    #[error("You turned, but there are no gumballs")]
    NoInventory,

    #[error("You need to pay first")]
    PaymentRequired,

    #[error("You need to turn the crank")]
    CrankNotTurned,
}

/// Result of dispatching one event through the transition table.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Outcome {
    /// The event was valid for the current state and took effect.
    Accepted(Effect),
    /// The event was invalid for the current state and changed nothing.
    Rejected(Rejection),
}

impl Outcome {
    /// Check if the event took effect.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Check if the event was absorbed as a no-op.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Get the effect, if the event was accepted.
    pub fn effect(&self) -> Option<&Effect> {
        match self {
            Self::Accepted(effect) => Some(effect),
            Self::Rejected(_) => None,
        }
    }

    /// Get the rejection reason, if the event was absorbed.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted(effect) => effect.fmt(f),
            Self::Rejected(rejection) => rejection.fmt(f),
        }
    }
}
