//! Coin counts held by the machine.

use crate::core::money;
use crate::core::Coin;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from denomination to a non-negative count.
///
/// Denominations with a zero count are not stored, so two inventories holding
/// the same coins compare equal however they got there.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct CoinInventory {
    counts: BTreeMap<Coin, u32>,
}

impl CoinInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inventory from `(coin, count)` pairs; repeated coins add up.
    pub fn from_counts(counts: impl IntoIterator<Item = (Coin, u32)>) -> Self {
        let mut inventory = Self::new();
        for (coin, count) in counts {
            inventory.add(coin, count);
        }
        inventory
    }

    pub fn add(&mut self, coin: Coin, count: u32) {
        if count > 0 {
            *self.counts.entry(coin).or_insert(0) += count;
        }
    }

    pub fn count(&self, coin: Coin) -> u32 {
        self.counts.get(&coin).copied().unwrap_or(0)
    }

    /// Sum of value × count over every denomination.
    pub fn total(&self) -> Decimal {
        money::total(
            self.counts
                .iter()
                .map(|(coin, count)| coin.value() * Decimal::from(*count)),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Denominations held, highest value first.
    pub fn denominations(&self) -> Vec<Coin> {
        self.counts.keys().rev().copied().collect()
    }

    /// `(coin, count)` pairs, highest value first.
    pub fn iter(&self) -> impl Iterator<Item = (Coin, u32)> + '_ {
        self.counts.iter().rev().map(|(coin, count)| (*coin, *count))
    }

    /// Remove exactly `coins`, or nothing at all when any of them is missing.
    pub fn take_exact(&mut self, coins: &[Coin]) -> bool {
        let mut needed: BTreeMap<Coin, u32> = BTreeMap::new();
        for coin in coins {
            *needed.entry(*coin).or_insert(0) += 1;
        }
        if needed.iter().any(|(coin, n)| self.count(*coin) < *n) {
            return false;
        }
        for (coin, n) in needed {
            self.remove(coin, n);
        }
        true
    }

    /// Decrease a count. Callers guarantee `count <= self.count(coin)`.
    pub(crate) fn remove(&mut self, coin: Coin, count: u32) {
        if let Some(held) = self.counts.get_mut(&coin) {
            *held = held.saturating_sub(count);
            if *held == 0 {
                self.counts.remove(&coin);
            }
        }
    }
}

impl FromIterator<Coin> for CoinInventory {
    fn from_iter<I: IntoIterator<Item = Coin>>(iter: I) -> Self {
        Self::from_counts(iter.into_iter().map(|coin| (coin, 1)))
    }
}
