//! Builder for constructing vending machines.

use crate::builder::error::BuildError;
use crate::change::CoinInventory;
use crate::config::MachineConfig;
use crate::display::MessageSink;
use crate::machine::VendingMachine;
use crate::shelf::ShelfRegistry;
use std::collections::HashSet;

/// Builder for constructing vending machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use coinbox::builder::VendingMachineBuilder;
/// use coinbox::config::{MachineConfig, PaymentPolicy};
/// use coinbox::display::RecordingDisplay;
/// use coinbox::shelf::{Product, Shelf, Shelves};
///
/// let config = MachineConfig {
///     payment_policy: PaymentPolicy::SettleOnThreshold,
///     ..MachineConfig::default()
/// };
///
/// let machine = VendingMachineBuilder::new()
///     .shelves(Shelves::new(vec![Shelf::new(
///         1,
///         Product::parse("cola drink", "2.44").unwrap(),
///         5,
///     )]))
///     .display(RecordingDisplay::new())
///     .config(config)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.policy(), PaymentPolicy::SettleOnThreshold);
/// assert_eq!(machine.list_shelf_numbers(), vec![1]);
/// ```
pub struct VendingMachineBuilder<R: ShelfRegistry, D: MessageSink> {
    shelves: Option<R>,
    display: Option<D>,
    inventory: CoinInventory,
    config: MachineConfig,
}

impl<R: ShelfRegistry, D: MessageSink> VendingMachineBuilder<R, D> {
    /// Create a new builder with an empty inventory and default configuration.
    pub fn new() -> Self {
        Self {
            shelves: None,
            display: None,
            inventory: CoinInventory::new(),
            config: MachineConfig::default(),
        }
    }

    /// Set the shelf registry (required).
    pub fn shelves(mut self, shelves: R) -> Self {
        self.shelves = Some(shelves);
        self
    }

    /// Set the message sink (required).
    pub fn display(mut self, display: D) -> Self {
        self.display = Some(display);
        self
    }

    /// Set the coins loaded into the machine before the first sale.
    pub fn inventory(mut self, inventory: CoinInventory) -> Self {
        self.inventory = inventory;
        self
    }

    /// Replace the configuration.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the machine.
    /// Returns an error if required parts are missing or inconsistent.
    pub fn build(self) -> Result<VendingMachine<R, D>, BuildError> {
        let shelves = self.shelves.ok_or(BuildError::MissingShelves)?;
        let display = self.display.ok_or(BuildError::MissingDisplay)?;

        let mut seen = HashSet::new();
        if let Some(duplicate) = shelves.list().into_iter().find(|n| !seen.insert(*n)) {
            return Err(BuildError::DuplicateShelf(duplicate));
        }

        let catalog = self.config.catalog()?;

        Ok(VendingMachine::with_settings(
            shelves,
            self.inventory,
            display,
            catalog,
            self.config.payment_policy,
            self.config.history_limit,
        ))
    }
}

impl<R: ShelfRegistry, D: MessageSink> Default for VendingMachineBuilder<R, D> {
    fn default() -> Self {
        Self::new()
    }
}
