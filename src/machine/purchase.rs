//! Outcome of a dispense request.

use crate::core::{money, Coin};
use crate::shelf::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A dispensed product with its change, or a refund without a product.
///
/// The product is absent exactly when change could not be paid; `coins` then
/// holds the full amount the customer inserted.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Purchase {
    product: Option<Product>,
    coins: Vec<Coin>,
}

impl Purchase {
    pub fn delivered(product: Product, change: Vec<Coin>) -> Self {
        Self {
            product: Some(product),
            coins: change,
        }
    }

    pub fn refunded(coins: Vec<Coin>) -> Self {
        Self {
            product: None,
            coins,
        }
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    /// Change on delivery, the refund otherwise. Highest value first.
    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn is_refund(&self) -> bool {
        self.product.is_none()
    }

    pub fn total(&self) -> Decimal {
        money::total(self.coins.iter().map(Coin::value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn delivered_purchase_totals_change() {
        let purchase = Purchase::delivered(
            Product::new("cola drink", dec!(2.44)),
            vec![Coin::TwentyCents, Coin::TenCents],
        );

        assert!(!purchase.is_refund());
        assert_eq!(purchase.total(), dec!(0.30));
    }

    #[test]
    fn deserialized_product_price_is_rounded() {
        let json = r#"{
            "product": { "name": "cola drink", "price": "2.445" },
            "coins": ["TEN_CENTS"]
        }"#;

        let purchase: Purchase = serde_json::from_str(json).unwrap();

        assert_eq!(purchase.product().map(Product::price), Some(dec!(2.45)));
        assert_eq!(purchase.coins(), &[Coin::TenCents]);
    }
}
