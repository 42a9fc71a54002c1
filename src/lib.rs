//! # Tick Book
//!
//! Matching core of a limit-order exchange for a single instrument.
//!
//! ## Architecture
//!
//! - **Types**: Core data structures (Order, Side, Trader, Execution)
//! - **OrderBook**: Array-indexed price ladder with price-time priority matching
//! - **Sinks**: Where fills are reported, synchronously and in trade order
//!
//! ## Design Principles
//!
//! 1. **Determinism**: The same submissions always produce the same fills
//! 2. **Integer ticks**: Prices are indices into a fixed ladder `[0, max_price)`
//! 3. **Synchronous execution**: Each fill is reported before the next is made
//! 4. **Single writer**: The book has no internal locking
//!
//! ## Example
//!
//! ```
//! use tick_book::{OrderBook, RecordingSink, Side};
//!
//! let mut book = OrderBook::new("BTCUSD", 0, 10_000, RecordingSink::new()).unwrap();
//! book.submit_limit_order(Side::Buy, 3, 200, "Bea").unwrap();
//! book.submit_limit_order(Side::Sell, 1, 198, "Sol").unwrap();
//!
//! assert_eq!(book.sink().executions()[0].as_tuple(), ("Bea", "Sol", 198, 1));
//! assert_eq!(book.depth_at(200), 2);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Construction parameters
pub mod config;

/// Error taxonomy
pub mod error;

/// Order book: ladder, levels, matching, snapshots
pub mod orderbook;

/// Execution sinks
pub mod sink;

/// Core data types: Order, Side, Trader, Execution
pub mod types;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::{BookConfig, DEFAULT_MAX_PRICE};
pub use error::{BookError, SinkError};
pub use orderbook::{BookSnapshot, LevelSnapshot, OrderBook};
pub use sink::{ExecutionSink, LogSink, RecordingSink};
pub use types::{Execution, Order, OrderId, Price, Quantity, Side, Trader};
