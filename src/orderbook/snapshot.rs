//! Read-only snapshots of the resting book.
//!
//! A snapshot lists every non-empty price level from the highest price to the
//! lowest, each with its orders in time priority. It is detached from the
//! book: taking one has no effect on matching.
//!
//! ## Digest
//!
//! [`BookSnapshot::digest`] is a SHA-256 over the instrument name and the
//! level-ordered resting orders. Two books fed the same submissions produce
//! the same digest, which makes replay determinism a one-line check.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::orderbook::level::PriceLevel;
use crate::types::{Order, Price, Quantity, Side};

/// Resting orders at one price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSnapshot {
    pub price: Price,
    pub side: Side,
    /// Oldest first
    pub orders: Vec<Order>,
}

impl LevelSnapshot {
    pub(crate) fn capture(price: Price, level: &PriceLevel) -> Option<Self> {
        Some(Self {
            price,
            side: level.side()?,
            orders: level.iter().cloned().collect(),
        })
    }

    /// Sum of remaining size at this level
    pub fn total_quantity(&self) -> Quantity {
        self.orders.iter().map(|order| order.size).sum()
    }
}

/// Every non-empty level of a book, highest price first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSnapshot {
    pub name: String,
    pub levels: Vec<LevelSnapshot>,
}

impl BookSnapshot {
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Total number of resting orders
    pub fn order_count(&self) -> usize {
        self.levels.iter().map(|level| level.orders.len()).sum()
    }

    /// Levels holding bids, best (highest) first
    pub fn bids(&self) -> impl Iterator<Item = &LevelSnapshot> + '_ {
        self.levels.iter().filter(|level| level.side == Side::Buy)
    }

    /// Levels holding asks, best (lowest) first
    pub fn asks(&self) -> impl Iterator<Item = &LevelSnapshot> + '_ {
        self.levels.iter().rev().filter(|level| level.side == Side::Sell)
    }

    /// SHA-256 of the resting state
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        update_str(&mut hasher, &self.name);

        for level in &self.levels {
            hasher.update(level.price.to_le_bytes());
            hasher.update([side_tag(level.side)]);
            hasher.update((level.orders.len() as u64).to_le_bytes());

            for order in &level.orders {
                hasher.update(order.order_id.to_le_bytes());
                hasher.update(order.size.to_le_bytes());
                update_str(&mut hasher, order.trader.as_str());
            }
        }

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&hasher.finalize());
        hash
    }

    /// Digest as a lowercase hex string
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest())
    }
}

fn side_tag(side: Side) -> u8 {
    match side {
        Side::Buy => 0,
        Side::Sell => 1,
    }
}

/// Length-prefixed so adjacent strings cannot run together
fn update_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

impl fmt::Display for BookSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        for level in &self.levels {
            write!(f, "{:>8} {:<4}", level.price, level.side)?;
            for order in &level.orders {
                write!(f, " #{}:{}x{}", order.order_id, order.trader, order.size)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(levels: Vec<LevelSnapshot>) -> BookSnapshot {
        BookSnapshot {
            name: "BTCUSD".to_string(),
            levels,
        }
    }

    fn level(price: Price, side: Side, orders: &[(u64, Quantity, &str)]) -> LevelSnapshot {
        LevelSnapshot {
            price,
            side,
            orders: orders
                .iter()
                .map(|&(id, size, trader)| Order::new(id, side, size, price, trader.into()))
                .collect(),
        }
    }

    #[test]
    fn test_capture_skips_empty_level() {
        assert!(LevelSnapshot::capture(5, &PriceLevel::new()).is_none());
    }

    #[test]
    fn test_sides_are_split_best_first() {
        let snap = snapshot(vec![
            level(203, Side::Sell, &[(5, 3, "Stu")]),
            level(202, Side::Sell, &[(4, 1, "Sam")]),
            level(200, Side::Buy, &[(1, 2, "Bea"), (3, 2, "Ben")]),
            level(199, Side::Buy, &[(2, 4, "Bob")]),
        ]);

        let asks: Vec<_> = snap.asks().map(|l| l.price).collect();
        let bids: Vec<_> = snap.bids().map(|l| l.price).collect();

        assert_eq!(asks, vec![202, 203]);
        assert_eq!(bids, vec![200, 199]);
        assert_eq!(snap.order_count(), 5);
        assert_eq!(snap.levels[2].total_quantity(), 4);
    }

    #[test]
    fn test_digest_is_stable_and_order_sensitive() {
        let a = snapshot(vec![level(200, Side::Buy, &[(1, 2, "Bea"), (3, 2, "Ben")])]);
        let b = snapshot(vec![level(200, Side::Buy, &[(3, 2, "Ben"), (1, 2, "Bea")])]);

        assert_eq!(a.digest(), a.clone().digest());
        assert_ne!(a.digest(), b.digest());
        assert_eq!(a.digest_hex().len(), 64);
    }

    #[test]
    fn test_display_lists_levels() {
        let snap = snapshot(vec![level(200, Side::Buy, &[(1, 2, "Bea")])]);
        let text = snap.to_string();

        assert!(text.starts_with("BTCUSD\n"));
        assert!(text.contains("#1:Beax2"));
    }
}
