//! Order book for a single instrument.
//!
//! ## Architecture
//!
//! - **Ladder**: one FIFO [`PriceLevel`] per integer tick, indexed by price
//! - **Cached best prices**: best bid/ask tracked on every insert and fill
//! - **Price-time priority**: best price first, then oldest order at that price
//!
//! ## Components
//!
//! - [`PriceLevel`]: FIFO queue of resting orders at one price
//! - `Ladder`: all price levels plus best bid/ask bookkeeping (crate-internal)
//! - [`OrderBook`]: id assignment, matching and execution reporting
//! - [`BookSnapshot`]: read-only view of the resting orders
//!
//! Only [`OrderBook`] drives the ladder; it is not reachable from outside the
//! crate:
//!
//! ```compile_fail
//! use tick_book::orderbook::ladder::Ladder;
//! ```
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Rest an order | O(1) |
//! | Best bid/ask | O(1) |
//! | Submit | O(k + d) |
//!
//! `k` is the number of resting orders the submission consumes, `d` the number
//! of empty ticks skipped while moving the best price. Emptying a side skips
//! nothing.

pub mod book;
pub(crate) mod ladder;
pub mod level;
pub mod snapshot;

pub use book::OrderBook;
pub use level::PriceLevel;
pub use snapshot::{BookSnapshot, LevelSnapshot};
