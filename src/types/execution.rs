//! Execution report for a single match between a taker and a resting order.

use std::fmt;

use crate::types::{OrderId, Price, Quantity, Side, Trader};

/// One fill between the incoming order (taker) and one resting order (maker).
///
/// ## Terminology
///
/// - **Maker**: The resting order that was already in the book
/// - **Taker**: The incoming order that triggered the match
///
/// ## Price
///
/// The fill always prints at the **taker's** limit price, not the maker's.
/// A buy at 593 that sweeps an ask resting at 200 trades at 593; a sell at
/// 198 that hits a bid resting at 200 trades at 198.
///
/// ## Example
///
/// ```
/// use tick_book::types::{Execution, Side};
///
/// let exec = Execution::new("Kevin".into(), "Tom".into(), 200, 100, 1, 2, Side::Sell);
/// assert_eq!(exec.to_string(), "EXECUTE Kevin BUY Tom 100 @ 200");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// Trader on the buy side of the fill
    pub buyer: Trader,

    /// Trader on the sell side of the fill
    pub seller: Trader,

    /// Execution price (the taker's limit price)
    pub price: Price,

    /// Executed quantity
    pub quantity: Quantity,

    /// Resting order that was hit
    pub maker_order_id: OrderId,

    /// Incoming order that crossed
    pub taker_order_id: OrderId,

    /// Side of the incoming order
    pub taker_side: Side,
}

impl Execution {
    pub fn new(
        buyer: Trader,
        seller: Trader,
        price: Price,
        quantity: Quantity,
        maker_order_id: OrderId,
        taker_order_id: OrderId,
        taker_side: Side,
    ) -> Self {
        Self {
            buyer,
            seller,
            price,
            quantity,
            maker_order_id,
            taker_order_id,
            taker_side,
        }
    }

    /// Notional value of this fill (price * quantity), widened to avoid overflow
    pub fn notional(&self) -> u128 {
        (self.price as u128) * (self.quantity as u128)
    }

    /// Compact `(buyer, seller, price, quantity)` view, handy in assertions
    pub fn as_tuple(&self) -> (&str, &str, Price, Quantity) {
        (self.buyer.as_str(), self.seller.as_str(), self.price, self.quantity)
    }
}

impl fmt::Display for Execution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EXECUTE {} BUY {} {} @ {}",
            self.buyer, self.seller, self.quantity, self.price
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
