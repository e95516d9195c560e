//! Machine configuration.
//!
//! Configuration is a small JSON document. Every field has a default, so an
//! empty object yields the standard machine:
//!
//! ```json
//! {
//!   "accepted_coins": [
//!     { "coin": "FIVE_DOLLARS", "value": "5.00" },
//!     { "coin": "FIFTY_CENTS", "value": "0.50" }
//!   ],
//!   "payment_policy": "settle_on_threshold",
//!   "history_limit": 64
//! }
//! ```
//!
//! Validation uses Stillwater's `Validation` so that a document with several
//! problems reports all of them at once.

pub mod error;

pub use error::{ConfigError, ConfigViolation};

use crate::core::{Coin, CoinCatalog, DEFAULT_HISTORY_LIMIT};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// What happens when the inserted balance first covers the price.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentPolicy {
    /// Keep accepting coins until the caller asks to dispense.
    #[default]
    ExplicitDispense,
    /// Move to `Settling`: further coins and cancellation are refused and
    /// only dispensing is allowed.
    SettleOnThreshold,
}

/// One accepted denomination with the value the operator expects it to have.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoinEntry {
    pub coin: Coin,
    pub value: Decimal,
}

impl From<Coin> for CoinEntry {
    fn from(coin: Coin) -> Self {
        Self {
            coin,
            value: coin.value(),
        }
    }
}

/// Settings read by the vending machine at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    pub accepted_coins: Vec<CoinEntry>,
    pub payment_policy: PaymentPolicy,
    pub history_limit: usize,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            accepted_coins: CoinCatalog::standard()
                .coins()
                .iter()
                .copied()
                .map(CoinEntry::from)
                .collect(),
            payment_policy: PaymentPolicy::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

impl MachineConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every rule, collecting all violations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut checks: Vec<Check> = Vec::new();

        checks.push(if self.accepted_coins.is_empty() {
            Validation::fail(ConfigViolation::NoAcceptedCoins)
        } else {
            Validation::success(())
        });

        let mut seen = HashSet::new();
        for entry in &self.accepted_coins {
            if !seen.insert(entry.coin) {
                checks.push(Validation::fail(ConfigViolation::DuplicateCoin(entry.coin)));
            }
            if entry.value != entry.coin.value() {
                checks.push(Validation::fail(ConfigViolation::ValueMismatch {
                    coin: entry.coin,
                    configured: entry.value,
                    canonical: entry.coin.value(),
                }));
            }
        }

        checks.push(if self.history_limit == 0 {
            Validation::fail(ConfigViolation::ZeroHistoryLimit)
        } else {
            Validation::success(())
        });

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }

    /// The validated accepted-coin catalog.
    pub fn catalog(&self) -> Result<CoinCatalog, ConfigError> {
        self.validate()?;
        Ok(CoinCatalog::new(
            self.accepted_coins.iter().map(|entry| entry.coin),
        ))
    }
}
