//! Errors reported by vending machine operations.

use crate::change::ChangeError;
use crate::core::Coin;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while driving a purchase.
///
/// Every error leaves the machine in a valid state that accepts further
/// operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VendingError {
    #[error("Shelf number {0} is invalid")]
    InvalidShelf(u32),

    #[error("Product {0} is not available")]
    ProductUnavailable(String),

    #[error("Coin of value {0} is not acceptable")]
    UnacceptableCoin(Coin),

    /// The operation is not part of the protocol in the current state.
    #[error("Operation not allowed in state '{state}': {reason}")]
    InvalidOperation { state: String, reason: &'static str },

    /// Neither the resolver nor the session's own coins could cover a refund.
    #[error("Inventory cannot refund {0}")]
    RefundUnavailable(Decimal),

    #[error(transparent)]
    Change(#[from] ChangeError),
}
