//! Console Session
//!
//! This example drives a vending machine through three customer sessions,
//! printing display output to the terminal.
//!
//! Key concepts:
//! - Building a machine from JSON configuration
//! - Paying exact change from the coin inventory
//! - Refunding when change cannot be paid
//! - Cancelling a session
//!
//! Run with: RUST_LOG=debug cargo run --example console_session

use coinbox::builder::VendingMachineBuilder;
use coinbox::change::CoinInventory;
use coinbox::config::MachineConfig;
use coinbox::core::Coin;
use coinbox::display::ConsoleDisplay;
use coinbox::shelf::{Product, Shelf, Shelves};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"{
    "accepted_coins": [
        { "coin": "FIVE_DOLLARS", "value": "5.00" },
        { "coin": "TWO_DOLLARS", "value": "2.00" },
        { "coin": "ONE_DOLLAR", "value": "1.00" },
        { "coin": "FIFTY_CENTS", "value": "0.50" },
        { "coin": "TWENTY_CENTS", "value": "0.20" },
        { "coin": "TEN_CENTS", "value": "0.10" }
    ],
    "payment_policy": "explicit_dispense",
    "history_limit": 32
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Console Session Example ===\n");

    let shelves = Shelves::new(vec![
        Shelf::new(1, Product::parse("cola drink", "2.44")?, 3),
        Shelf::new(2, Product::parse("chocolate bar", "5.99")?, 1),
        Shelf::new(3, Product::parse("mineral water", "7.20")?, 2),
    ]);

    let mut machine = VendingMachineBuilder::new()
        .shelves(shelves)
        .display(ConsoleDisplay::stdout())
        .inventory(CoinInventory::from_counts([
            (Coin::TwentyCents, 2),
            (Coin::TenCents, 2),
        ]))
        .config(MachineConfig::from_json(CONFIG)?)
        .build()?;

    println!("Shelves: {:?}\n", machine.list_shelf_numbers());

    println!("--- Buying mineral water ---");
    machine.select_shelf(3)?;
    for coin in [Coin::FiveDollars, Coin::TwoDollars, Coin::FiftyCents] {
        machine.insert_coin(coin)?;
    }
    let purchase = machine.dispense()?;
    println!("Received: {:?}, change: {:?}\n", purchase.product().map(|p| p.name()), purchase.coins());

    println!("--- Buying cola without change in the machine ---");
    machine.select_shelf(1)?;
    machine.insert_coin(Coin::TwoDollars)?;
    machine.insert_coin(Coin::OneDollar)?;
    let purchase = machine.dispense()?;
    println!("Refunded: {} ({:?})\n", purchase.is_refund(), purchase.coins());

    println!("--- Cancelling a chocolate bar ---");
    machine.select_shelf(2)?;
    machine.insert_coin(Coin::FiveDollars)?;
    if let Err(err) = machine.insert_coin(Coin::OneCent) {
        println!("Rejected: {err}");
    }
    let refund = machine.cancel()?;
    println!("Returned: {refund:?}\n");

    println!("Path taken:");
    for state in machine.history().get_path() {
        println!("  {}", state.name());
    }
    println!("Coins held: {}", machine.inventory().total());

    println!("\n=== Example Complete ===");
    Ok(())
}
