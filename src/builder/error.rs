//! Build errors for the vending machine builder.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when assembling a vending machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Shelf registry not specified. Call .shelves(registry) before .build()")]
    MissingShelves,

    #[error("Message sink not specified. Call .display(sink) before .build()")]
    MissingDisplay,

    #[error("Shelf number {0} is used by more than one shelf")]
    DuplicateShelf(u32),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
