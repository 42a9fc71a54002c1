//! Single-instrument limit order book.
//!
//! ## Matching
//!
//! An incoming order is matched against the opposite side while it crosses:
//!
//! - **Buy** at `p` matches while `p >= best_ask`, lowest ask first
//! - **Sell** at `p` matches while `p <= best_bid`, highest bid first
//!
//! Within a level the oldest order fills first. Each fill is reported to the
//! execution sink before the next one is attempted, and prints at the
//! incoming order's limit price. Whatever is left when the order stops
//! crossing rests at the back of the queue for its price.
//!
//! ## Order Ids
//!
//! The book keeps the last id it handed out, starting from the caller's
//! value. Each accepted submission takes the next one, whether it fills,
//! rests or does both. Rejected submissions consume nothing.
//!
//! ## Example
//!
//! ```
//! use tick_book::{OrderBook, RecordingSink, Side};
//!
//! let mut book = OrderBook::new("GBPUSD", 0, 10_000, RecordingSink::new()).unwrap();
//!
//! book.submit_limit_order(Side::Buy, 100, 593, "Kevin").unwrap();
//! book.submit_limit_order(Side::Sell, 100, 200, "Tom").unwrap();
//!
//! let fills = book.sink().executions();
//! assert_eq!(fills.len(), 1);
//! assert_eq!(fills[0].as_tuple(), ("Kevin", "Tom", 200, 100));
//! assert!(book.is_empty());
//! ```

use crate::config::BookConfig;
use crate::error::BookError;
use crate::orderbook::ladder::Ladder;
use crate::orderbook::level::PriceLevel;
use crate::orderbook::snapshot::{BookSnapshot, LevelSnapshot};
use crate::sink::{ExecutionSink, LogSink};
use crate::types::{Execution, Order, OrderId, Price, Quantity, Side, Trader};

/// Limit order book for one instrument.
///
/// Owns all resting orders and the sink that fills are reported to. Not
/// synchronised: callers that share a book across threads must serialise
/// submissions themselves.
#[derive(Debug)]
pub struct OrderBook<S = LogSink> {
    name: String,
    last_order_id: OrderId,
    ladder: Ladder,
    sink: S,
}

impl<S: ExecutionSink> OrderBook<S> {
    /// Create an empty book.
    ///
    /// # Arguments
    ///
    /// * `name` - Instrument identifier, for reporting only
    /// * `starting_order_id` - The first accepted order gets this value plus one
    /// * `max_price` - Exclusive price ceiling; one level is allocated per tick
    /// * `sink` - Receives every fill
    ///
    /// # Errors
    ///
    /// [`BookError::CapacityExceeded`] if `max_price` is zero or too large to
    /// allocate.
    pub fn new(
        name: impl Into<String>,
        starting_order_id: OrderId,
        max_price: Price,
        sink: S,
    ) -> Result<Self, BookError> {
        let name = name.into();
        let ladder = Ladder::new(max_price)?;
        log::debug!("{}: book created with max_price {}", name, max_price);

        Ok(Self {
            name,
            last_order_id: starting_order_id,
            ladder,
            sink,
        })
    }

    /// Create an empty book from a [`BookConfig`]
    pub fn with_config(config: BookConfig, sink: S) -> Result<Self, BookError> {
        Self::new(config.name, config.starting_order_id, config.max_price, sink)
    }

    /// Submit a limit order, reporting fills to the book's own sink.
    ///
    /// Returns the id assigned to the order. The id is returned whether the
    /// order filled completely, partially (the rest now rests) or not at all.
    ///
    /// # Errors
    ///
    /// - [`BookError::InvalidSize`] / [`BookError::InvalidPrice`]: rejected
    ///   before anything changes
    /// - [`BookError::Sink`]: the sink failed; fills reported before the
    ///   failure stay applied, the remainder of the order is dropped
    pub fn submit_limit_order(
        &mut self,
        side: Side,
        size: Quantity,
        price: Price,
        trader: impl Into<Trader>,
    ) -> Result<OrderId, BookError> {
        submit(
            &self.name,
            &mut self.last_order_id,
            &mut self.ladder,
            side,
            size,
            price,
            trader.into(),
            &mut self.sink,
        )
    }

    /// Submit a limit order, reporting this call's fills to `sink` instead of
    /// the book's own sink.
    pub fn submit_limit_order_with<K>(
        &mut self,
        side: Side,
        size: Quantity,
        price: Price,
        trader: impl Into<Trader>,
        sink: &mut K,
    ) -> Result<OrderId, BookError>
    where
        K: ExecutionSink + ?Sized,
    {
        submit(
            &self.name,
            &mut self.last_order_id,
            &mut self.ladder,
            side,
            size,
            price,
            trader.into(),
            sink,
        )
    }
}

impl<S> OrderBook<S> {
    // ========================================================================
    // Identification
    // ========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn max_price(&self) -> Price {
        self.ladder.max_price()
    }

    /// Id handed to the most recent accepted order (or the starting value)
    #[inline]
    pub fn last_order_id(&self) -> OrderId {
        self.last_order_id
    }

    // ========================================================================
    // Best Bid/Ask
    // ========================================================================

    /// Highest resting buy price, `None` if there are no bids
    #[inline]
    pub fn best_bid(&self) -> Option<Price> {
        self.ladder.best_bid()
    }

    /// Lowest resting sell price, `None` if there are no asks
    #[inline]
    pub fn best_ask(&self) -> Option<Price> {
        self.ladder.best_ask()
    }

    /// `best_ask - best_bid`, if both sides have orders
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) if ask >= bid => Some(ask - bid),
            _ => None,
        }
    }

    // ========================================================================
    // Size
    // ========================================================================

    #[inline]
    pub fn order_count(&self) -> usize {
        self.ladder.order_count()
    }

    #[inline]
    pub fn bid_count(&self) -> usize {
        self.ladder.bid_count()
    }

    #[inline]
    pub fn ask_count(&self) -> usize {
        self.ladder.ask_count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order_count() == 0
    }

    /// Total resting size at `price` (0 for empty or off-ladder prices)
    pub fn depth_at(&self, price: Price) -> Quantity {
        self.ladder.level(price).map_or(0, PriceLevel::total_quantity)
    }

    /// Resting orders at `price`, oldest first
    pub fn orders_at(&self, price: Price) -> impl Iterator<Item = &Order> + '_ {
        self.ladder.level(price).into_iter().flat_map(|level| level.iter())
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Every non-empty level, highest price first
    pub fn snapshot(&self) -> BookSnapshot {
        BookSnapshot {
            name: self.name.clone(),
            levels: self
                .ladder
                .levels_descending()
                .filter_map(|(price, level)| LevelSnapshot::capture(price, level))
                .collect(),
        }
    }

    // ========================================================================
    // Sink Access
    // ========================================================================

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

// ============================================================================
// Matching
// ============================================================================

/// Validate, assign an id, match, then rest any remainder.
#[allow(clippy::too_many_arguments)]
fn submit<K>(
    name: &str,
    last_order_id: &mut OrderId,
    ladder: &mut Ladder,
    side: Side,
    size: Quantity,
    price: Price,
    trader: Trader,
    sink: &mut K,
) -> Result<OrderId, BookError>
where
    K: ExecutionSink + ?Sized,
{
    if size == 0 {
        return Err(BookError::InvalidSize);
    }
    if !ladder.contains_price(price) {
        return Err(BookError::InvalidPrice {
            price,
            max_price: ladder.max_price(),
        });
    }
    let order_id = last_order_id.checked_add(1).ok_or(BookError::OrderIdExhausted)?;
    *last_order_id = order_id;

    let maker_side = side.opposite();
    let mut remaining = size;

    while remaining > 0 && ladder.crosses(side, price) {
        let Some(maker) = ladder.best_order(maker_side) else {
            break;
        };
        let quantity = remaining.min(maker.size);
        let (buyer, seller) = match side {
            Side::Buy => (trader.clone(), maker.trader.clone()),
            Side::Sell => (maker.trader.clone(), trader.clone()),
        };
        let maker_order_id = maker.order_id;
        let execution =
            Execution::new(buyer, seller, price, quantity, maker_order_id, order_id, side);

        if let Err(source) = sink.notify_execution(&execution) {
            log::warn!(
                "{}: sink failed on fill for order {}, {} left unfilled: {}",
                name,
                order_id,
                remaining,
                source
            );
            return Err(BookError::Sink { order_id, source });
        }

        let Some(fill) = ladder.fill_best(maker_side, quantity) else {
            break;
        };
        debug_assert_eq!(fill.quantity, quantity);
        remaining -= fill.quantity;
        log::trace!(
            "{}: order {} filled {} @ {} against {}",
            name,
            order_id,
            fill.quantity,
            price,
            maker_order_id
        );
    }

    if remaining > 0 {
        log::debug!("{}: order {} rests {} {} @ {}", name, order_id, side, remaining, price);
        ladder.rest(Order::new(order_id, side, remaining, price, trader));
    }

    Ok(order_id)
}

// ============================================================================
// Unit Tests
// ============================================================================
