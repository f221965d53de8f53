//! The pure transition function.
//!
//! The entire behavior of the machine is one total function from
//! (state, event, inventory) to (next state, inventory, outcome). There
//! is no hidden state: dispatching the same event against the same
//! state and inventory always produces the same step.

use super::event::Event;
use super::outcome::{Effect, Outcome, Rejection};
use super::state::MachineState;

/// Result of applying one event to the machine's pure state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Step {
    /// State after the event.
    pub next: MachineState,
    /// Inventory after the event.
    pub inventory: u32,
    /// What the event produced.
    pub outcome: Outcome,
}

impl Step {
    fn accept(next: MachineState, inventory: u32, effect: Effect) -> Self {
        Self {
            next,
            inventory,
            outcome: Outcome::Accepted(effect),
        }
    }

    fn reject(state: MachineState, inventory: u32, rejection: Rejection) -> Self {
        Self {
            next: state,
            inventory,
            outcome: Outcome::Rejected(rejection),
        }
    }
}

/// Apply one event to a (state, inventory) pair.
///
/// The function is total: every cell of the transition table is
/// populated, so no event sequence can produce an undefined result. A
/// rejected event leaves state and inventory untouched.
///
/// # Example
///
/// ```rust
/// use gumball::core::{step, Event, MachineState};
///
/// let step1 = step(MachineState::NoCoin, Event::InsertCoin, 5);
/// assert_eq!(step1.next, MachineState::HasCoin);
/// assert_eq!(step1.inventory, 5);
/// assert!(step1.outcome.is_accepted());
///
/// let step2 = step(MachineState::NoCoin, Event::TurnCrank, 5);
/// assert_eq!(step2.next, MachineState::NoCoin);
/// assert!(step2.outcome.is_rejected());
/// ```
pub fn step(state: MachineState, event: Event, inventory: u32) -> Step {
    use Event::{Dispense, EjectCoin, InsertCoin, TurnCrank};
    use MachineState::{HasCoin, NoCoin, Sold, SoldOut};

    match (state, event) {
        (NoCoin, InsertCoin) => Step::accept(HasCoin, inventory, Effect::CoinAccepted),
        (NoCoin, EjectCoin) => Step::reject(state, inventory, Rejection::NoCoinToReturn),
        (NoCoin, TurnCrank) => Step::reject(state, inventory, Rejection::CoinRequired),
        (NoCoin, Dispense) => Step::reject(state, inventory, Rejection::PaymentRequired),

        (HasCoin, InsertCoin) => Step::reject(state, inventory, Rejection::CoinAlreadyInserted),
        (HasCoin, EjectCoin) => Step::accept(NoCoin, inventory, Effect::CoinReturned),
        (HasCoin, TurnCrank) => Step::accept(Sold, inventory, Effect::CrankTurned),
        (HasCoin, Dispense) => Step::reject(state, inventory, Rejection::CrankNotTurned),

        (Sold, InsertCoin) => Step::reject(state, inventory, Rejection::DispenseInProgress),
        (Sold, EjectCoin) => Step::reject(state, inventory, Rejection::CrankAlreadyTurned),
        (Sold, TurnCrank) => Step::reject(state, inventory, Rejection::DispenseInProgress),
        (Sold, Dispense) => {
            // Sold with an empty hopper is unreachable through the
            // machine; saturate rather than underflow.
            let remaining = inventory.saturating_sub(1);
            let next = if remaining == 0 { SoldOut } else { NoCoin };
            Step::accept(next, remaining, Effect::Dispensed { remaining })
        }

        (SoldOut, InsertCoin) => Step::reject(state, inventory, Rejection::SoldOut),
        (SoldOut, EjectCoin) => Step::reject(state, inventory, Rejection::NoCoinToReturn),
        (SoldOut, TurnCrank) => Step::reject(state, inventory, Rejection::NoInventory),
        (SoldOut, Dispense) => Step::reject(state, inventory, Rejection::NoInventory),
    }
}

/// Check the machine's structural invariant for a (state, inventory)
/// pair.
///
/// Every state except `SoldOut` implies stock on hand: `Sold` marks a
/// sale in flight whose item is still in the hopper, and `NoCoin` /
/// `HasCoin` are only reachable while stocked. `SoldOut` implies an
/// empty hopper.
pub fn holds_invariant(state: MachineState, inventory: u32) -> bool {
    match state {
        MachineState::SoldOut => inventory == 0,
        MachineState::NoCoin | MachineState::HasCoin | MachineState::Sold => inventory > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_noop(state: MachineState, event: Event, inventory: u32, rejection: Rejection) {
        let result = step(state, event, inventory);
        assert_eq!(result.next, state);
        assert_eq!(result.inventory, inventory);
        assert_eq!(result.outcome, Outcome::Rejected(rejection));
    }

    #[test]
    fn no_coin_accepts_insert() {
        let result = step(MachineState::NoCoin, Event::InsertCoin, 5);
        assert_eq!(result.next, MachineState::HasCoin);
        assert_eq!(result.inventory, 5);
        assert_eq!(result.outcome, Outcome::Accepted(Effect::CoinAccepted));
    }

    #[test]
    fn no_coin_rejects_everything_else() {
        assert_noop(MachineState::NoCoin, Event::EjectCoin, 5, Rejection::NoCoinToReturn);
        assert_noop(MachineState::NoCoin, Event::TurnCrank, 5, Rejection::CoinRequired);
        assert_noop(MachineState::NoCoin, Event::Dispense, 5, Rejection::PaymentRequired);
    }

    #[test]
    fn has_coin_rejects_second_insert() {
        assert_noop(
            MachineState::HasCoin,
            Event::InsertCoin,
            5,
            Rejection::CoinAlreadyInserted,
        );
    }

    #[test]
    fn has_coin_returns_coin_on_eject() {
        let result = step(MachineState::HasCoin, Event::EjectCoin, 5);
        assert_eq!(result.next, MachineState::NoCoin);
        assert_eq!(result.inventory, 5);
        assert_eq!(result.outcome, Outcome::Accepted(Effect::CoinReturned));
    }

    #[test]
    fn has_coin_sells_on_crank() {
        let result = step(MachineState::HasCoin, Event::TurnCrank, 5);
        assert_eq!(result.next, MachineState::Sold);
        assert_eq!(result.inventory, 5);
        assert_eq!(result.outcome, Outcome::Accepted(Effect::CrankTurned));
    }

    #[test]
    fn has_coin_rejects_direct_dispense() {
        assert_noop(MachineState::HasCoin, Event::Dispense, 5, Rejection::CrankNotTurned);
    }

    #[test]
    fn sold_rejects_controls_while_dispensing() {
        assert_noop(MachineState::Sold, Event::InsertCoin, 5, Rejection::DispenseInProgress);
        assert_noop(MachineState::Sold, Event::EjectCoin, 5, Rejection::CrankAlreadyTurned);
        assert_noop(MachineState::Sold, Event::TurnCrank, 5, Rejection::DispenseInProgress);
    }

    #[test]
    fn sold_dispense_decrements_and_returns_to_no_coin() {
        let result = step(MachineState::Sold, Event::Dispense, 5);
        assert_eq!(result.next, MachineState::NoCoin);
        assert_eq!(result.inventory, 4);
        assert_eq!(
            result.outcome,
            Outcome::Accepted(Effect::Dispensed { remaining: 4 })
        );
    }

    #[test]
    fn sold_dispense_of_last_item_sells_out() {
        let result = step(MachineState::Sold, Event::Dispense, 1);
        assert_eq!(result.next, MachineState::SoldOut);
        assert_eq!(result.inventory, 0);
        assert_eq!(
            result.outcome,
            Outcome::Accepted(Effect::Dispensed { remaining: 0 })
        );
    }

    #[test]
    fn sold_dispense_saturates_on_empty_hopper() {
        let result = step(MachineState::Sold, Event::Dispense, 0);
        assert_eq!(result.next, MachineState::SoldOut);
        assert_eq!(result.inventory, 0);
    }

    #[test]
    fn sold_out_rejects_every_event() {
        assert_noop(MachineState::SoldOut, Event::InsertCoin, 0, Rejection::SoldOut);
        assert_noop(MachineState::SoldOut, Event::EjectCoin, 0, Rejection::NoCoinToReturn);
        assert_noop(MachineState::SoldOut, Event::TurnCrank, 0, Rejection::NoInventory);
        assert_noop(MachineState::SoldOut, Event::Dispense, 0, Rejection::NoInventory);
    }

    #[test]
    fn step_is_deterministic() {
        let first = step(MachineState::HasCoin, Event::TurnCrank, 3);
        let second = step(MachineState::HasCoin, Event::TurnCrank, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn rejected_steps_never_touch_inventory() {
        let states = [
            MachineState::NoCoin,
            MachineState::HasCoin,
            MachineState::Sold,
            MachineState::SoldOut,
        ];
        let events = [
            Event::InsertCoin,
            Event::EjectCoin,
            Event::TurnCrank,
            Event::Dispense,
        ];

        for state in states {
            for event in events {
                let result = step(state, event, 7);
                if result.outcome.is_rejected() {
                    assert_eq!(result.next, state);
                    assert_eq!(result.inventory, 7);
                }
            }
        }
    }

    #[test]
    fn invariant_pairs_states_with_stock() {
        assert!(holds_invariant(MachineState::NoCoin, 3));
        assert!(holds_invariant(MachineState::HasCoin, 1));
        assert!(holds_invariant(MachineState::Sold, 1));
        assert!(holds_invariant(MachineState::SoldOut, 0));

        assert!(!holds_invariant(MachineState::NoCoin, 0));
        assert!(!holds_invariant(MachineState::Sold, 0));
        assert!(!holds_invariant(MachineState::SoldOut, 2));
    }
}
