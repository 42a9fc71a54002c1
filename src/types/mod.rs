//! Core data types for the tick book
//!
//! ## Types
//!
//! - [`Order`]: A resting limit order
//! - [`Side`]: Buy or Sell
//! - [`Trader`]: Opaque order owner
//! - [`Execution`]: One fill between a taker and a maker
//!
//! Prices, quantities and ids are plain `u64` aliases ([`Price`],
//! [`Quantity`], [`OrderId`]).

mod execution;
mod order;

pub use execution::Execution;
pub use order::{Order, OrderId, Price, Quantity, Side, Trader};
