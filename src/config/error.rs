//! Configuration errors.

use crate::core::Coin;
use rust_decimal::Decimal;
use thiserror::Error;

/// A single problem found while validating a [`MachineConfig`](super::MachineConfig).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("No accepted coins configured")]
    NoAcceptedCoins,

    #[error("Coin {0:?} is listed more than once")]
    DuplicateCoin(Coin),

    #[error("Coin {coin:?} configured with value {configured}, canonical value is {canonical}")]
    ValueMismatch {
        coin: Coin,
        configured: Decimal,
        canonical: Decimal,
    },

    #[error("History limit must be greater than zero")]
    ZeroHistoryLimit,
}

/// Errors that can occur when loading machine configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid configuration JSON
    #[error("Configuration parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but breaks one or more rules
    #[error("Configuration invalid: {}", describe(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
