//! Builder API for assembling a vending machine.
//!
//! The builder collects the shelf registry, the starting coin inventory, the
//! message sink and the configuration, and checks them together before the
//! machine is created.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::VendingMachineBuilder;
