//! Order types for the tick book.
//!
//! ## Integer Ticks
//!
//! Prices are integer ticks in `[0, max_price)` where `max_price` is fixed
//! when the book is built. Sizes are integer lots. Neither carries a decimal
//! scale; the caller owns the mapping to real-world units.

use std::fmt;
use std::sync::Arc;

/// Identifier assigned by the book when an order is accepted.
pub type OrderId = u64;

/// Price in integer ticks.
pub type Price = u64;

/// Quantity in integer lots.
pub type Quantity = u64;

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy or Sell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Buy order (bid) - rests below the asks, matches against them
    Buy,
    /// Sell order (ask) - rests above the bids, matches against them
    Sell,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Short uppercase label used in logs and digests
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ============================================================================
// Trader
// ============================================================================

/// Opaque owner of an order.
///
/// The book never looks inside it; it is only handed back in execution
/// reports. Cloning is a reference-count bump, so every fill can carry both
/// counterparties without copying the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Trader(Arc<str>);

impl Trader {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Trader {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Trader {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl AsRef<str> for Trader {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Trader {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Trader {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Display for Trader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A resting limit order.
///
/// `size` is the quantity still open. An order stored in the book always has
/// `size > 0`; the book drops it the moment a fill takes it to zero.
///
/// ## Example
///
/// ```
/// use tick_book::types::{Order, Side};
///
/// let order = Order::new(1, Side::Buy, 100, 593, "Kevin".into());
/// assert_eq!(order.side, Side::Buy);
/// assert!(!order.is_filled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Unique order identifier (assigned by the book)
    pub order_id: OrderId,

    /// Buy or Sell
    pub side: Side,

    /// Remaining open quantity
    pub size: Quantity,

    /// Limit price in ticks
    pub price: Price,

    /// Owner, reported back on every fill
    pub trader: Trader,
}

impl Order {
    pub fn new(
        order_id: OrderId,
        side: Side,
        size: Quantity,
        price: Price,
        trader: Trader,
    ) -> Self {
        Self {
            order_id,
            side,
            size,
            price,
            trader,
        }
    }

    /// Check if the order has nothing left to fill
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.size == 0
    }

    /// Fill a portion of this order
    ///
    /// # Returns
    ///
    /// The quantity actually filled, capped at the remaining size
    #[inline]
    pub fn fill(&mut self, quantity: Quantity) -> Quantity {
        let filled = quantity.min(self.size);
        self.size -= filled;
        filled
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.opposite(), Side::Buy);
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Buy.to_string(), "BUY");
        assert_eq!(Side::Sell.to_string(), "SELL");
    }

    #[test]
    fn test_trader_is_cheap_to_clone() {
        let kevin = Trader::from("Kevin");
        let copy = kevin.clone();

        assert_eq!(kevin, copy);
        assert_eq!(copy, "Kevin");
        assert_eq!(copy.as_str(), "Kevin");
        assert!(Arc::ptr_eq(&kevin.0, &copy.0));
    }

    #[test]
    fn test_order_fill() {
        let mut order = Order::new(7, Side::Sell, 5, 202, "Stu".into());

        assert_eq!(order.fill(2), 2);
        assert_eq!(order.size, 3);
        assert!(!order.is_filled());

        assert_eq!(order.fill(3), 3);
        assert!(order.is_filled());
    }

    #[test]
    fn test_order_overfill_is_capped() {
        let mut order = Order::new(1, Side::Buy, 3, 200, "Bea".into());

        assert_eq!(order.fill(10), 3);
        assert_eq!(order.size, 0);
        assert!(order.is_filled());
    }
}
