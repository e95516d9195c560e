//! Core vending machine types.
//!
//! This module contains the plain data the rest of the crate is built on:
//! - Coin denominations and the accepted-coin catalog
//! - Fixed-point money helpers
//! - Session states and their transition history
//!
//! Nothing in here performs I/O or touches the coin inventory.

mod coin;
mod history;
pub mod money;
mod state;

pub use coin::{Coin, CoinCatalog};
pub use history::{StateTransition, TransitionLog, DEFAULT_HISTORY_LIMIT};
pub use state::{Session, Trigger, VendingState};
