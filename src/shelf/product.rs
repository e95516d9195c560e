//! Products sold by the machine.

use crate::core::money::round_price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A product name with a price of exactly two fractional digits.
///
/// The price is rounded half-up once, when the product is built.
///
/// # Example
///
/// ```rust
/// use coinbox::shelf::Product;
///
/// let product = Product::parse("mineral water", "7.2").unwrap();
/// assert_eq!(product.name(), "mineral water");
/// assert_eq!(product.price().to_string(), "7.20");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(from = "ProductRecord")]
pub struct Product {
    name: String,
    price: Decimal,
}

/// Wire form of a [`Product`]; the price is rounded on conversion.
#[derive(Deserialize)]
struct ProductRecord {
    name: String,
    price: Decimal,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self::new(record.name, record.price)
    }
}

impl Product {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price: round_price(price),
        }
    }

    /// Build a product from a decimal price string such as `"2.44"`.
    pub fn parse(name: impl Into<String>, price: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Self::new(name, Decimal::from_str(price)?))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}
