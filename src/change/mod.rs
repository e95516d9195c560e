//! Coin inventory and exact-change resolution.
//!
//! The [`ChangeResolver`] is the only component that moves coins in or out
//! of the [`CoinInventory`]. A withdrawal is all or nothing: either the exact
//! amount is paid and those coins leave the inventory, or nothing changes.

mod error;
mod inventory;
mod resolver;

pub use error::ChangeError;
pub use inventory::CoinInventory;
pub use resolver::ChangeResolver;
