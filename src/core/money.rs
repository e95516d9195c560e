//! Fixed-point money helpers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits carried by every price.
pub const PRICE_SCALE: u32 = 2;

/// Round a price half-up to exactly two fractional digits.
///
/// # Example
///
/// ```rust
/// use coinbox::core::money::round_price;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let price = round_price(Decimal::from_str("19.9876").unwrap());
/// assert_eq!(price.to_string(), "19.99");
///
/// let price = round_price(Decimal::from_str("7.2").unwrap());
/// assert_eq!(price.to_string(), "7.20");
/// ```
pub fn round_price(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(PRICE_SCALE);
    rounded
}

/// Render an amount with two fractional digits.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

/// Amount still due on a price, floored at zero.
pub fn remaining_due(price: Decimal, balance: Decimal) -> Decimal {
    (price - balance).max(Decimal::ZERO)
}

/// Sum of an iterator of amounts.
pub fn total(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts.into_iter().fold(Decimal::ZERO, |acc, amount| acc + amount)
}
