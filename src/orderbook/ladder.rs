//! Array-indexed price ladder.
//!
//! ## Layout
//!
//! One [`PriceLevel`] per integer tick in `[0, max_price)`, addressed directly
//! by price. Finding the queue for a price is a slice index; the cost is one
//! (mostly empty) queue header per tick, allocated up front.
//!
//! ```text
//! index:   0   1  ...  198  199  200  201  202  ...  max_price-1
//! levels: [ ] [ ] ... [ ]  [ ]  [B B] [ ]  [S]  ...  [ ]
//!                                 ^         ^
//!                             best_bid   best_ask
//! ```
//!
//! ## Best Bid/Ask
//!
//! Both are cached. `None` stands for the empty side ("no bids" sits below
//! every valid price, "no asks" above it). When the best level empties the
//! cache walks outward to the next non-empty level on that side, so the cost
//! is proportional to the number of empty ticks skipped. A side whose last
//! order was just taken goes straight to `None` without walking.
//!
//! Between submissions every bid sits strictly below every ask, so a
//! non-empty level only ever holds one side and any non-empty level above the
//! best ask (below the best bid) is an ask (a bid).

use crate::error::BookError;
use crate::orderbook::level::{FrontFill, PriceLevel};
use crate::types::{Order, Price, Quantity, Side};

/// Price levels plus cached best prices and per-side order counts.
#[derive(Debug, Clone)]
pub(crate) struct Ladder {
    levels: Vec<PriceLevel>,
    max_price: Price,
    best_bid: Option<Price>,
    best_ask: Option<Price>,
    bid_count: usize,
    ask_count: usize,
}

impl Ladder {
    /// Allocate `max_price` empty levels.
    ///
    /// Fails with [`BookError::CapacityExceeded`] when `max_price` is zero or
    /// the ladder cannot be allocated.
    pub fn new(max_price: Price) -> Result<Self, BookError> {
        let capacity = usize::try_from(max_price)
            .ok()
            .filter(|&len| len > 0)
            .ok_or(BookError::CapacityExceeded { max_price })?;

        let mut levels = Vec::new();
        levels
            .try_reserve_exact(capacity)
            .map_err(|_| BookError::CapacityExceeded { max_price })?;
        levels.resize_with(capacity, PriceLevel::new);

        Ok(Self {
            levels,
            max_price,
            best_bid: None,
            best_ask: None,
            bid_count: 0,
            ask_count: 0,
        })
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    #[inline]
    pub fn max_price(&self) -> Price {
        self.max_price
    }

    #[inline]
    pub fn contains_price(&self, price: Price) -> bool {
        price < self.max_price
    }

    #[inline]
    pub fn bid_count(&self) -> usize {
        self.bid_count
    }

    #[inline]
    pub fn ask_count(&self) -> usize {
        self.ask_count
    }

    #[inline]
    pub fn order_count(&self) -> usize {
        self.bid_count + self.ask_count
    }

    // ========================================================================
    // Best Bid/Ask
    // ========================================================================

    #[inline]
    pub fn best_bid(&self) -> Option<Price> {
        self.best_bid
    }

    #[inline]
    pub fn best_ask(&self) -> Option<Price> {
        self.best_ask
    }

    /// Best resting price on `side`
    #[inline]
    pub fn best(&self, side: Side) -> Option<Price> {
        match side {
            Side::Buy => self.best_bid,
            Side::Sell => self.best_ask,
        }
    }

    /// Whether an incoming order on `side` at `price` crosses the best
    /// resting price on the other side.
    #[inline]
    pub fn crosses(&self, side: Side, price: Price) -> bool {
        match side {
            Side::Buy => self.best_ask.map_or(false, |ask| price >= ask),
            Side::Sell => self.best_bid.map_or(false, |bid| price <= bid),
        }
    }

    // ========================================================================
    // Level Access
    // ========================================================================

    /// Level at `price`, or `None` if the price is off the ladder
    #[inline]
    pub fn level(&self, price: Price) -> Option<&PriceLevel> {
        self.levels.get(usize::try_from(price).ok()?)
    }

    /// Non-empty levels from the highest price to the lowest
    pub fn levels_descending(&self) -> impl Iterator<Item = (Price, &PriceLevel)> + '_ {
        // Asks can sit anywhere above the best ask, bids anywhere below the best bid.
        let top = match (self.best_ask, self.best_bid) {
            (Some(_), _) => self.levels.len(),
            (None, Some(bid)) => bid as usize + 1,
            (None, None) => 0,
        };
        let bottom = match (self.best_bid, self.best_ask) {
            (Some(_), _) => 0,
            (None, Some(ask)) => ask as usize,
            (None, None) => top,
        };
        self.levels[bottom..top]
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, level)| !level.is_empty())
            .map(move |(offset, level)| ((bottom + offset) as Price, level))
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Append an order at the back of its price level.
    ///
    /// The caller guarantees the order does not cross the opposite side and
    /// that its price is on the ladder.
    pub fn rest(&mut self, order: Order) {
        let price = order.price;
        let side = order.side;
        self.levels[price as usize].push_back(order);

        match side {
            Side::Buy => {
                self.bid_count += 1;
                self.best_bid = Some(self.best_bid.map_or(price, |bid| bid.max(price)));
            }
            Side::Sell => {
                self.ask_count += 1;
                self.best_ask = Some(self.best_ask.map_or(price, |ask| ask.min(price)));
            }
        }
    }

    /// Oldest order at the best price on `side`
    #[inline]
    pub fn best_order(&self, side: Side) -> Option<&Order> {
        let price = self.best(side)?;
        self.levels[price as usize].front()
    }

    /// Fill up to `quantity` against the oldest order at the best price on
    /// `side`, dropping it if it is used up and moving the best price on if
    /// its level empties.
    pub fn fill_best(&mut self, side: Side, quantity: Quantity) -> Option<FrontFill> {
        let price = self.best(side)?;
        let level = &mut self.levels[price as usize];
        let fill = level.fill_front(quantity)?;
        let emptied = level.is_empty();

        if fill.removed.is_some() {
            match side {
                Side::Buy => self.bid_count -= 1,
                Side::Sell => self.ask_count -= 1,
            }
        }
        if emptied {
            let skipped = self.advance_best(side, price);
            log::trace!("{} level {} emptied, {} ticks skipped", side, price, skipped);
        }

        Some(fill)
    }

    /// Move the best price on `side` off the emptied level at `from`.
    ///
    /// Returns the number of empty ticks skipped.
    fn advance_best(&mut self, side: Side, from: Price) -> usize {
        let remaining = match side {
            Side::Buy => self.bid_count,
            Side::Sell => self.ask_count,
        };
        if remaining == 0 {
            match side {
                Side::Buy => self.best_bid = None,
                Side::Sell => self.best_ask = None,
            }
            log::debug!("{} side exhausted", side);
            return 0;
        }

        let from = from as usize;
        let occupied = |index: &usize| !self.levels[*index].is_empty();
        let next = match side {
            Side::Sell => (from + 1..self.levels.len()).find(occupied),
            Side::Buy => (0..from).rev().find(occupied),
        };
        debug_assert!(next.is_some(), "{} orders counted but none found", side);
        debug_assert!(next.map_or(true, |index| self.levels[index].side() == Some(side)));

        let best = next.map(|index| index as Price);
        match side {
            Side::Buy => self.best_bid = best,
            Side::Sell => self.best_ask = best,
        }
        next.map_or(0, |index| index.abs_diff(from) - 1)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
