//! Purchase session states.
//!
//! The machine is always in exactly one [`VendingState`]. States are plain
//! values: every operation matches on the current state and produces the next
//! one, so each transition can be exercised in isolation.

use crate::core::coin::Coin;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An open purchase session.
///
/// The balance starts at zero and grows with every accepted coin. `inserted`
/// holds those same coins in insertion order so a refund can always hand back
/// what the customer put in.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Session {
    /// Correlates log lines and history entries of one purchase.
    pub id: Uuid,
    /// Number of the selected shelf.
    pub shelf: u32,
    /// Value inserted so far.
    pub balance: Decimal,
    /// Coins inserted so far.
    pub inserted: Vec<Coin>,
}

impl Session {
    /// Open a session for a shelf with a zero balance.
    pub fn open(shelf: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            shelf,
            balance: Decimal::ZERO,
            inserted: Vec::new(),
        }
    }

    /// Return a copy of the session with one more coin credited.
    pub fn credit(&self, coin: Coin) -> Self {
        let mut next = self.clone();
        next.balance += coin.value();
        next.inserted.push(coin);
        next
    }
}

/// Current position of the transaction state machine.
///
/// # Example
///
/// ```rust
/// use coinbox::core::{Session, VendingState};
///
/// let state = VendingState::AwaitingPayment(Session::open(3));
/// assert_eq!(state.name(), "AwaitingPayment");
/// assert_eq!(state.session().map(|s| s.shelf), Some(3));
/// assert!(!state.is_idle());
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub enum VendingState {
    /// No session; only a shelf selection is valid.
    #[default]
    Idle,
    /// A shelf is selected and coins are being inserted.
    AwaitingPayment(Session),
    /// The balance covers the price; the session can only be settled.
    Settling(Session),
}

impl VendingState {
    pub fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::AwaitingPayment(_) => "AwaitingPayment",
            Self::Settling(_) => "Settling",
        }
    }

    /// `Idle` is both the initial state and the end of every purchase.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The open session, if any.
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Idle => None,
            Self::AwaitingPayment(session) | Self::Settling(session) => Some(session),
        }
    }

    /// True when both states are the same variant, ignoring session details.
    pub fn same_variant(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// Operation that caused a state transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    SelectShelf,
    InsertCoin,
    Cancel,
    Dispense,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn state_name_returns_correct_value() {
        let session = Session::open(1);
        assert_eq!(VendingState::Idle.name(), "Idle");
        assert_eq!(
            VendingState::AwaitingPayment(session.clone()).name(),
            "AwaitingPayment"
        );
        assert_eq!(VendingState::Settling(session).name(), "Settling");
    }

    #[test]
    fn default_state_is_idle() {
        assert!(VendingState::default().is_idle());
        assert!(VendingState::default().session().is_none());
    }

    #[test]
    fn new_session_has_zero_balance() {
        let session = Session::open(7);

        assert_eq!(session.shelf, 7);
        assert_eq!(session.balance, Decimal::ZERO);
        assert!(session.inserted.is_empty());
    }

    #[test]
    fn credit_adds_value_and_keeps_original() {
        let session = Session::open(1);
        let credited = session.credit(Coin::TwoDollars).credit(Coin::FiftyCents);

        assert_eq!(credited.balance, dec!(2.50));
        assert_eq!(credited.inserted, vec![Coin::TwoDollars, Coin::FiftyCents]);
        assert_eq!(credited.id, session.id);
        assert_eq!(session.balance, Decimal::ZERO);
    }

    #[test]
    fn same_variant_ignores_session_details() {
        let a = VendingState::AwaitingPayment(Session::open(1));
        let b = VendingState::AwaitingPayment(Session::open(2));

        assert!(a.same_variant(&b));
        assert!(!a.same_variant(&VendingState::Idle));
    }

    #[test]
    fn state_serializes_correctly() {
        let state = VendingState::Settling(Session::open(2).credit(Coin::FiveDollars));
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: VendingState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
