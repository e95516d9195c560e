//! Exact-change resolution over the coin inventory.

use super::error::ChangeError;
use super::inventory::CoinInventory;
use crate::core::Coin;
use rust_decimal::Decimal;
use tracing::debug;

/// Owns the coin inventory and pays out exact amounts from it.
///
/// `withdraw` runs a greedy pass over the held denominations, highest first.
/// When a pass leaves a remainder, the whole attempt is thrown away, the top
/// denomination is excluded for good and the pass starts over with what is
/// left. This can refuse amounts that some other combination of held coins
/// would pay; that conservatism is the machine's change policy.
///
/// # Example
///
/// ```rust
/// use coinbox::change::{ChangeResolver, CoinInventory};
/// use coinbox::core::Coin;
/// use rust_decimal::Decimal;
///
/// let mut resolver = ChangeResolver::new(CoinInventory::from_counts([
///     (Coin::FiveDollars, 1),
///     (Coin::TwoDollars, 1),
///     (Coin::OneDollar, 1),
/// ]));
///
/// let coins = resolver.withdraw(Decimal::new(800, 2)).unwrap();
/// assert_eq!(coins, Some(vec![Coin::FiveDollars, Coin::TwoDollars, Coin::OneDollar]));
/// assert!(resolver.inventory().is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ChangeResolver {
    inventory: CoinInventory,
}

impl ChangeResolver {
    pub fn new(inventory: CoinInventory) -> Self {
        Self { inventory }
    }

    pub fn inventory(&self) -> &CoinInventory {
        &self.inventory
    }

    /// Store one coin. Acceptance is checked before the coin gets here.
    pub fn deposit(&mut self, coin: Coin) {
        self.inventory.add(coin, 1);
    }

    /// Pay out exactly `amount`, highest-value coins first.
    ///
    /// Returns `Ok(None)` when the amount cannot be paid; the inventory is
    /// then exactly as it was. Zero is always paid with no coins.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Option<Vec<Coin>>, ChangeError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(ChangeError::NegativeAmount(amount));
        }
        if amount.is_zero() {
            return Ok(Some(Vec::new()));
        }

        let mut available = self.inventory.denominations();
        while let Some(&top) = available.first() {
            if let Some((coins, working)) = greedy_pass(&self.inventory, &available, amount) {
                debug!(%amount, coins = coins.len(), "change resolved");
                self.inventory = working;
                return Ok(Some(coins));
            }
            debug!(%amount, excluded = %top, "greedy pass left a remainder");
            available.remove(0);
        }

        debug!(%amount, "change unavailable");
        Ok(None)
    }

    /// Remove a specific multiset of coins, all or nothing.
    pub fn take_exact(&mut self, coins: &[Coin]) -> bool {
        self.inventory.take_exact(coins)
    }
}

/// One greedy walk over `denominations` (highest first) against a working
/// copy of the inventory. Returns the coins taken and the resulting counts
/// only when the walk reaches exactly zero.
fn greedy_pass(
    inventory: &CoinInventory,
    denominations: &[Coin],
    amount: Decimal,
) -> Option<(Vec<Coin>, CoinInventory)> {
    let mut working = inventory.clone();
    let mut remaining = amount;
    let mut coins = Vec::new();

    for &coin in denominations {
        let value = coin.value();
        while value <= remaining && working.count(coin) > 0 {
            remaining -= value;
            working.remove(coin, 1);
            coins.push(coin);
        }
        if remaining.is_zero() {
            return Some((coins, working));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bills() -> CoinInventory {
        CoinInventory::from_counts([
            (Coin::FiveDollars, 1),
            (Coin::TwoDollars, 1),
            (Coin::OneDollar, 1),
        ])
    }

    #[test]
    fn deposit_stores_coins() {
        let mut resolver = ChangeResolver::default();

        resolver.deposit(Coin::TenCents);
        resolver.deposit(Coin::TenCents);

        assert_eq!(
            resolver.inventory(),
            &CoinInventory::from_counts([(Coin::TenCents, 2)])
        );
    }

    #[test]
    fn withdraw_pays_reachable_amounts() {
        let cases = [
            (dec!(8.00), vec![Coin::FiveDollars, Coin::TwoDollars, Coin::OneDollar]),
            (dec!(7.00), vec![Coin::FiveDollars, Coin::TwoDollars]),
            (dec!(6.00), vec![Coin::FiveDollars, Coin::OneDollar]),
            (dec!(3.00), vec![Coin::TwoDollars, Coin::OneDollar]),
            (dec!(5.00), vec![Coin::FiveDollars]),
            (dec!(2.00), vec![Coin::TwoDollars]),
            (dec!(1.00), vec![Coin::OneDollar]),
        ];

        for (amount, expected) in cases {
            let mut resolver = ChangeResolver::new(bills());
            let coins = resolver.withdraw(amount).unwrap();
            assert_eq!(coins, Some(expected), "amount {amount}");
        }
    }

    #[test]
    fn withdraw_refuses_unreachable_amounts() {
        for amount in [
            dec!(8.50),
            dec!(7.50),
            dec!(6.50),
            dec!(3.50),
            dec!(5.50),
            dec!(2.50),
            dec!(1.50),
        ] {
            let mut resolver = ChangeResolver::new(bills());
            assert_eq!(resolver.withdraw(amount).unwrap(), None, "amount {amount}");
            assert_eq!(resolver.inventory(), &bills());
        }
    }

    #[test]
    fn withdraw_from_empty_inventory_fails() {
        let mut resolver = ChangeResolver::default();
        assert_eq!(resolver.withdraw(dec!(1.00)).unwrap(), None);
    }

    #[test]
    fn withdraw_zero_always_succeeds() {
        let mut empty = ChangeResolver::default();
        assert_eq!(empty.withdraw(Decimal::ZERO).unwrap(), Some(Vec::new()));

        let mut stocked = ChangeResolver::new(bills());
        assert_eq!(stocked.withdraw(dec!(0.00)).unwrap(), Some(Vec::new()));
        assert_eq!(stocked.inventory(), &bills());
    }

    #[test]
    fn withdraw_removes_only_the_coins_paid() {
        let mut resolver = ChangeResolver::new(CoinInventory::from_counts([
            (Coin::TwoDollars, 2),
            (Coin::FiftyCents, 3),
            (Coin::TenCents, 4),
        ]));

        let coins = resolver.withdraw(dec!(2.70)).unwrap();

        assert_eq!(
            coins,
            Some(vec![
                Coin::TwoDollars,
                Coin::FiftyCents,
                Coin::TenCents,
                Coin::TenCents
            ])
        );
        assert_eq!(
            resolver.inventory(),
            &CoinInventory::from_counts([
                (Coin::TwoDollars, 1),
                (Coin::FiftyCents, 2),
                (Coin::TenCents, 2),
            ])
        );
    }

    #[test]
    fn withdraw_retries_without_top_denomination() {
        // 0.50 leaves 0.10 that no 0.20 can pay; dropping 0.50 pays with 0.20s.
        let mut resolver = ChangeResolver::new(CoinInventory::from_counts([
            (Coin::FiftyCents, 1),
            (Coin::TwentyCents, 3),
        ]));

        let coins = resolver.withdraw(dec!(0.60)).unwrap();

        assert_eq!(
            coins,
            Some(vec![Coin::TwentyCents, Coin::TwentyCents, Coin::TwentyCents])
        );
        assert_eq!(
            resolver.inventory(),
            &CoinInventory::from_counts([(Coin::FiftyCents, 1)])
        );
    }

    #[test]
    fn withdraw_rejects_amount_a_smarter_combination_could_pay() {
        // 0.50 + 3 x 0.20 would pay 1.10, but the elimination walk never tries it.
        let inventory = CoinInventory::from_counts([(Coin::FiftyCents, 2), (Coin::TwentyCents, 3)]);
        let mut resolver = ChangeResolver::new(inventory.clone());

        assert_eq!(resolver.withdraw(dec!(1.10)).unwrap(), None);
        assert_eq!(resolver.inventory(), &inventory);
    }

    #[test]
    fn withdraw_rejects_negative_amount() {
        let mut resolver = ChangeResolver::new(bills());

        let result = resolver.withdraw(dec!(-1.00));

        assert!(matches!(result, Err(ChangeError::NegativeAmount(_))));
        assert_eq!(resolver.inventory(), &bills());
    }

    #[test]
    fn take_exact_delegates_to_inventory() {
        let mut resolver = ChangeResolver::new(bills());

        assert!(resolver.take_exact(&[Coin::OneDollar]));
        assert!(!resolver.take_exact(&[Coin::OneDollar]));
        assert_eq!(resolver.inventory().total(), dec!(7.00));
    }
}
