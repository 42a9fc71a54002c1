//! Error types for the tick book.
//!
//! Every rejection listed here is raised before the book is touched, except
//! [`BookError::Sink`]: fills reported before the sink failed stay applied.

use thiserror::Error;

use crate::types::{OrderId, Price};

/// Boxed error returned by an [`ExecutionSink`](crate::sink::ExecutionSink).
pub type SinkError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Book-level error
#[derive(Error, Debug)]
pub enum BookError {
    #[error("Invalid price: {price} is outside [0, {max_price})")]
    InvalidPrice { price: Price, max_price: Price },

    #[error("Invalid size: orders must be for a positive quantity")]
    InvalidSize,

    #[error("Capacity exceeded: max_price {max_price} cannot back a price ladder")]
    CapacityExceeded { max_price: Price },

    #[error("Order id counter exhausted")]
    OrderIdExhausted,

    #[error("Execution sink failed while reporting a fill for order {order_id}: {source}")]
    Sink {
        order_id: OrderId,
        #[source]
        source: SinkError,
    },
}

impl BookError {
    /// True for rejections caused by the caller's arguments
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            BookError::InvalidPrice { .. }
                | BookError::InvalidSize
                | BookError::CapacityExceeded { .. }
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_messages() {
        let err = BookError::InvalidPrice { price: 10_000, max_price: 10_000 };
        assert_eq!(err.to_string(), "Invalid price: 10000 is outside [0, 10000)");

        let err = BookError::CapacityExceeded { max_price: 0 };
        assert!(err.to_string().contains("max_price 0"));
    }

    #[test]
    fn test_sink_error_keeps_source() {
        let err = BookError::Sink {
            order_id: 9,
            source: "downstream closed".into(),
        };

        assert!(!err.is_caller_error());
        assert_eq!(err.source().map(|s| s.to_string()), Some("downstream closed".to_string()));
    }

    #[test]
    fn test_caller_errors() {
        assert!(BookError::InvalidSize.is_caller_error());
        assert!(BookError::InvalidPrice { price: 1, max_price: 1 }.is_caller_error());
        assert!(!BookError::OrderIdExhausted.is_caller_error());
    }
}
