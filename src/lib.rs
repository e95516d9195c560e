//! Coinbox: control core of a coin-operated vending machine
//!
//! Coinbox sells one item at a time: a customer selects a stocked shelf,
//! inserts coins toward its price, and receives the product together with
//! exact change drawn from the machine's own coin inventory. Money and stock
//! are never lost or duplicated: every operation either completes or leaves
//! the machine exactly as it was.
//!
//! # Core Concepts
//!
//! - **Coins**: A fixed set of denominations with fixed-point values; which
//!   ones a customer may insert is configuration (`CoinCatalog`)
//! - **Change resolver**: Owns the coin inventory and pays exact amounts,
//!   all or nothing
//! - **State machine**: `Idle -> AwaitingPayment -> Settling -> Idle`, with
//!   refunds on cancellation and when change cannot be paid
//! - **Shelves and sinks**: External collaborators reached through the
//!   `ShelfRegistry` and `MessageSink` traits
//!
//! # Example
//!
//! ```rust
//! use coinbox::builder::VendingMachineBuilder;
//! use coinbox::change::CoinInventory;
//! use coinbox::core::Coin;
//! use coinbox::display::RecordingDisplay;
//! use coinbox::shelf::{Product, Shelf, Shelves};
//!
//! let mut machine = VendingMachineBuilder::new()
//!     .shelves(Shelves::new(vec![Shelf::new(
//!         3,
//!         Product::parse("mineral water", "7.20").unwrap(),
//!         1,
//!     )]))
//!     .inventory(CoinInventory::from_counts([(Coin::TwentyCents, 1), (Coin::TenCents, 1)]))
//!     .display(RecordingDisplay::new())
//!     .build()
//!     .unwrap();
//!
//! machine.select_shelf(3).unwrap();
//! for coin in [Coin::FiveDollars, Coin::TwoDollars, Coin::FiftyCents] {
//!     machine.insert_coin(coin).unwrap();
//! }
//! let purchase = machine.dispense().unwrap();
//!
//! assert!(!purchase.is_refund());
//! assert_eq!(purchase.coins(), &[Coin::TwentyCents, Coin::TenCents]);
//! assert_eq!(
//!     machine.display().messages(),
//!     ["mineral water 7.20", "mineral water 2.20", "mineral water 0.20", "mineral water 0.00"]
//! );
//! ```

pub mod builder;
pub mod change;
pub mod config;
pub mod core;
pub mod display;
pub mod machine;
pub mod shelf;

// Re-export commonly used types
pub use change::{ChangeResolver, CoinInventory};
pub use self::core::{Coin, CoinCatalog, VendingState};
pub use machine::{Purchase, VendingError, VendingMachine};
