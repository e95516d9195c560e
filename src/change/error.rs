//! Change resolution errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the change resolver.
///
/// An amount that cannot be paid is not an error; `withdraw` reports it as
/// `Ok(None)`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ChangeError {
    #[error("Cannot withdraw a negative amount: {0}")]
    NegativeAmount(Decimal),
}
