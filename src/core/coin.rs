//! Coin denominations and the accepted-coin catalog.
//!
//! Every coin the machine can physically hold is a variant of [`Coin`]. Which
//! of them a customer may insert is configuration, carried by [`CoinCatalog`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A coin denomination with a canonical fixed-point value.
///
/// Coins are totally ordered by value, so `Coin::FiveDollars > Coin::OneCent`.
/// No two denominations share a value.
///
/// # Example
///
/// ```rust
/// use coinbox::core::Coin;
/// use rust_decimal::Decimal;
///
/// assert_eq!(Coin::FiftyCents.value(), Decimal::new(50, 2));
/// assert!(Coin::TwoDollars > Coin::OneDollar);
/// assert_eq!(Coin::TwentyCents.to_string(), "0.20");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Coin {
    FiveDollars,
    TwoDollars,
    OneDollar,
    FiftyCents,
    TwentyCents,
    TenCents,
    FiveCents,
    TwoCents,
    OneCent,
}

impl Coin {
    /// Every denomination, highest value first.
    pub const ALL: [Coin; 9] = [
        Coin::FiveDollars,
        Coin::TwoDollars,
        Coin::OneDollar,
        Coin::FiftyCents,
        Coin::TwentyCents,
        Coin::TenCents,
        Coin::FiveCents,
        Coin::TwoCents,
        Coin::OneCent,
    ];

    /// Value in cents.
    pub fn cents(&self) -> i64 {
        match self {
            Self::FiveDollars => 500,
            Self::TwoDollars => 200,
            Self::OneDollar => 100,
            Self::FiftyCents => 50,
            Self::TwentyCents => 20,
            Self::TenCents => 10,
            Self::FiveCents => 5,
            Self::TwoCents => 2,
            Self::OneCent => 1,
        }
    }

    /// Monetary value with two fractional digits.
    pub fn value(&self) -> Decimal {
        Decimal::new(self.cents(), 2)
    }

    /// Canonical identifier, as used in configuration files.
    pub fn id(&self) -> &'static str {
        match self {
            Self::FiveDollars => "FIVE_DOLLARS",
            Self::TwoDollars => "TWO_DOLLARS",
            Self::OneDollar => "ONE_DOLLAR",
            Self::FiftyCents => "FIFTY_CENTS",
            Self::TwentyCents => "TWENTY_CENTS",
            Self::TenCents => "TEN_CENTS",
            Self::FiveCents => "FIVE_CENTS",
            Self::TwoCents => "TWO_CENTS",
            Self::OneCent => "ONE_CENT",
        }
    }
}

impl Ord for Coin {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cents().cmp(&other.cents())
    }
}

impl PartialOrd for Coin {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.value())
    }
}

/// Ordered set of denominations a customer may insert.
///
/// The catalog is read by coin validation and never mutated after it is
/// built. Coins are kept highest value first with duplicates removed.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CoinCatalog {
    accepted: Vec<Coin>,
}

impl CoinCatalog {
    /// Build a catalog from any collection of coins.
    pub fn new(coins: impl IntoIterator<Item = Coin>) -> Self {
        let mut accepted: Vec<Coin> = coins.into_iter().collect();
        accepted.sort_by(|a, b| b.cmp(a));
        accepted.dedup();
        Self { accepted }
    }

    /// Every denomination except the three smallest.
    pub fn standard() -> Self {
        Self::new(
            Coin::ALL
                .into_iter()
                .filter(|coin| *coin >= Coin::TenCents),
        )
    }

    pub fn accepts(&self, coin: Coin) -> bool {
        self.accepted.contains(&coin)
    }

    /// Accepted coins paired with their values, highest first.
    pub fn entries(&self) -> impl Iterator<Item = (Coin, Decimal)> + '_ {
        self.accepted.iter().map(|coin| (*coin, coin.value()))
    }

    pub fn coins(&self) -> &[Coin] {
        &self.accepted
    }
}

impl Default for CoinCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn coins_are_ordered_by_value() {
        let mut coins = Coin::ALL.to_vec();
        coins.sort();

        assert_eq!(coins.first(), Some(&Coin::OneCent));
        assert_eq!(coins.last(), Some(&Coin::FiveDollars));
        for pair in Coin::ALL.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn coin_values_are_exact_decimals() {
        assert_eq!(Coin::FiveDollars.value(), dec!(5.00));
        assert_eq!(Coin::TenCents.value(), dec!(0.10));
        assert_eq!(Coin::OneCent.value(), dec!(0.01));
    }

    #[test]
    fn coin_displays_two_decimals() {
        assert_eq!(Coin::OneDollar.to_string(), "1.00");
        assert_eq!(Coin::FiveCents.to_string(), "0.05");
    }

    #[test]
    fn coin_serializes_as_identifier() {
        let json = serde_json::to_string(&Coin::FiftyCents).unwrap();
        assert_eq!(json, "\"FIFTY_CENTS\"");

        for coin in Coin::ALL {
            let json = serde_json::to_string(&coin).unwrap();
            assert_eq!(json, format!("\"{}\"", coin.id()));
        }
    }

    #[test]
    fn standard_catalog_rejects_smallest_coins() {
        let catalog = CoinCatalog::standard();

        assert!(catalog.accepts(Coin::FiveDollars));
        assert!(catalog.accepts(Coin::TenCents));
        assert!(!catalog.accepts(Coin::FiveCents));
        assert!(!catalog.accepts(Coin::TwoCents));
        assert!(!catalog.accepts(Coin::OneCent));
        assert_eq!(catalog.coins().len(), 6);
    }

    #[test]
    fn catalog_orders_and_deduplicates() {
        let catalog = CoinCatalog::new([Coin::TenCents, Coin::TwoDollars, Coin::TenCents]);

        assert_eq!(catalog.coins(), &[Coin::TwoDollars, Coin::TenCents]);
        let entries: Vec<_> = catalog.entries().collect();
        assert_eq!(
            entries,
            vec![(Coin::TwoDollars, dec!(2.00)), (Coin::TenCents, dec!(0.10))]
        );
    }
}
