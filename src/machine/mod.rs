//! Transaction state machine.
//!
//! [`VendingMachine`] sequences a purchase through
//! `Idle -> AwaitingPayment -> Settling -> Idle`, paying refunds and change
//! through the change resolver and releasing stock through the shelf
//! registry.

mod error;
mod purchase;
mod vending;

pub use error::VendingError;
pub use purchase::Purchase;
pub use vending::{VendingMachine, NO_CHANGE_WARNING};
