//! Construction parameters for an [`OrderBook`].

use crate::error::BookError;
use crate::orderbook::OrderBook;
use crate::sink::ExecutionSink;
use crate::types::{OrderId, Price};

/// Default instrument name
pub const DEFAULT_NAME: &str = "BTCUSD";

/// Default exclusive price ceiling, in ticks
pub const DEFAULT_MAX_PRICE: Price = 10_000;

/// Everything needed to build a book except the sink.
///
/// `max_price` is a hard ceiling: prices at or above it are rejected, and the
/// book allocates one level per tick below it.
///
/// ## Example
///
/// ```
/// use tick_book::{BookConfig, RecordingSink};
///
/// let book = BookConfig::new("GBPUSD")
///     .max_price(5_000)
///     .starting_order_id(100)
///     .build(RecordingSink::new())
///     .unwrap();
///
/// assert_eq!(book.name(), "GBPUSD");
/// assert_eq!(book.max_price(), 5_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookConfig {
    pub name: String,
    pub starting_order_id: OrderId,
    pub max_price: Price,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            starting_order_id: 0,
            max_price: DEFAULT_MAX_PRICE,
        }
    }
}

impl BookConfig {
    /// Defaults with a different instrument name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn starting_order_id(mut self, id: OrderId) -> Self {
        self.starting_order_id = id;
        self
    }

    pub fn max_price(mut self, max_price: Price) -> Self {
        self.max_price = max_price;
        self
    }

    /// Build a book reporting to `sink`
    pub fn build<S: ExecutionSink>(self, sink: S) -> Result<OrderBook<S>, BookError> {
        OrderBook::with_config(self, sink)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
