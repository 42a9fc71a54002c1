//! Price level management for orders at the same tick.
//!
//! ## Design
//!
//! A `PriceLevel` is the FIFO queue of resting orders at one price.
//!
//! ```text
//! front (oldest) -> order2 -> order3 -> back (newest)
//! ```
//!
//! - New orders are appended at the back
//! - Matching consumes orders from the front
//! - A front order that is filled is popped in the same step that fills it
//!
//! Because the book stays uncrossed between submissions, a non-empty level
//! only ever holds orders of one side.

use std::collections::VecDeque;

use crate::types::{Order, Quantity, Side};

/// Result of filling against the front of a level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FrontFill {
    /// Quantity taken from the front order
    pub quantity: Quantity,

    /// The front order, if the fill consumed it entirely
    pub removed: Option<Order>,
}

/// A price level containing orders at a single price.
#[derive(Debug, Clone, Default)]
pub struct PriceLevel {
    /// Resting orders, oldest first
    orders: VecDeque<Order>,

    /// Sum of `size` over all resting orders at this level
    total_quantity: Quantity,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the price level is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Number of orders at this price level
    #[inline]
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Total remaining quantity at this level
    #[inline]
    pub fn total_quantity(&self) -> Quantity {
        self.total_quantity
    }

    /// Side of the orders resting here, if any
    #[inline]
    pub fn side(&self) -> Option<Side> {
        self.orders.front().map(|order| order.side)
    }

    /// Oldest order at this level (the next one to be matched)
    #[inline]
    pub fn front(&self) -> Option<&Order> {
        self.orders.front()
    }

    /// Resting orders in time priority
    pub fn iter(&self) -> impl Iterator<Item = &Order> + '_ {
        self.orders.iter()
    }

    /// Add an order to the back of the queue
    ///
    /// The order must have a positive size.
    pub fn push_back(&mut self, order: Order) {
        debug_assert!(order.size > 0, "resting orders must have a positive size");
        self.total_quantity = self.total_quantity.saturating_add(order.size);
        self.orders.push_back(order);
    }

    /// Fill up to `quantity` against the oldest order.
    ///
    /// The front order is reduced in place; if that takes it to zero it is
    /// popped and returned in [`FrontFill::removed`]. Returns `None` when the
    /// level is empty.
    pub(crate) fn fill_front(&mut self, quantity: Quantity) -> Option<FrontFill> {
        let front = self.orders.front_mut()?;
        let filled = front.fill(quantity);
        self.total_quantity = self.total_quantity.saturating_sub(filled);

        let removed = if front.is_filled() {
            self.orders.pop_front()
        } else {
            None
        };

        Some(FrontFill {
            quantity: filled,
            removed,
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
