//! Stress tests for the tick book.
//!
//! These tests verify:
//! 1. The book stays consistent under a long random order flow
//! 2. Determinism: the same seed gives the same fills and the same final book
//! 3. The book does not grow without bound when flow is balanced
//!
//! ## Running Stress Tests
//!
//! ```bash
//! cargo test --release --test stress_test -- --nocapture
//! ```

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tick_book::{ExecutionSink, OrderBook, Price, Quantity, Side, SinkError};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

const MAX_PRICE: Price = 10_000;

/// Prices are drawn from this band, like the original benchmark flow
const MIN_FLOW_PRICE: Price = 8_000;
const MAX_FLOW_PRICE: Price = 9_500;

const MAX_SIZE: Quantity = 20;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Counts fills and folds them into a running checksum.
#[derive(Debug, Default)]
struct TallySink {
    fills: u64,
    volume: u64,
    checksum: u64,
}

impl ExecutionSink for TallySink {
    fn notify_execution(&mut self, execution: &tick_book::Execution) -> Result<(), SinkError> {
        self.fills += 1;
        self.volume += execution.quantity;
        self.checksum = self
            .checksum
            .rotate_left(7)
            .wrapping_add(execution.maker_order_id)
            .wrapping_mul(31)
            .wrapping_add(execution.price ^ execution.quantity);
        Ok(())
    }
}

/// Deterministic order flow: same seed, same orders.
fn generate_orders(count: usize, seed: u64) -> Vec<(Side, Quantity, Price)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let side = if rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };
            let size = rng.gen_range(1..MAX_SIZE);
            let price = rng.gen_range(MIN_FLOW_PRICE..MAX_FLOW_PRICE);
            (side, size, price)
        })
        .collect()
}

fn run(seed: u64, count: usize) -> OrderBook<TallySink> {
    let mut book = OrderBook::new("BTCUSD", 0, MAX_PRICE, TallySink::default()).unwrap();
    for (side, size, price) in generate_orders(count, seed) {
        book.submit_limit_order(side, size, price, "Trader").unwrap();
    }
    book
}

// ============================================================================
// STRESS TESTS
// ============================================================================

#[test]
fn stress_random_flow_stays_consistent() {
    const COUNT: usize = 200_000;

    let orders = generate_orders(COUNT, 42);
    let submitted: Quantity = orders.iter().map(|&(_, size, _)| size).sum();

    let mut book = OrderBook::new("BTCUSD", 0, MAX_PRICE, TallySink::default()).unwrap();
    let start = Instant::now();
    for (side, size, price) in orders {
        book.submit_limit_order(side, size, price, "Trader").unwrap();
    }
    let elapsed = start.elapsed();

    let snap = book.snapshot();
    let resting: Quantity = snap.levels.iter().map(|l| l.total_quantity()).sum();
    let tally = book.sink();

    println!("\n=== STRESS TEST: {} orders ===", COUNT);
    println!("  Fills:        {:>12}", tally.fills);
    println!("  Resting:      {:>12}", book.order_count());
    println!("  Elapsed:      {:>12.2?}", elapsed);
    println!("  Digest:       {}", snap.digest_hex());

    assert!(tally.fills > 0, "Expected some trades to occur");
    // Every filled lot is counted once for the buyer and once for the seller
    assert_eq!(submitted, resting + 2 * tally.volume);
    assert_eq!(snap.order_count(), book.order_count());

    if let (Some(bid), Some(ask)) = (book.best_bid(), book.best_ask()) {
        assert!(bid < ask);
    }
    assert_eq!(book.best_bid(), snap.bids().next().map(|l| l.price));
    assert_eq!(book.best_ask(), snap.asks().next().map(|l| l.price));
}

#[test]
fn verify_determinism() {
    const COUNT: usize = 20_000;
    const SEED: u64 = 12345;

    let a = run(SEED, COUNT);
    let b = run(SEED, COUNT);

    assert_eq!(a.sink().fills, b.sink().fills);
    assert_eq!(a.sink().checksum, b.sink().checksum);
    assert_eq!(a.snapshot().digest(), b.snapshot().digest());
    assert_eq!(a.last_order_id(), COUNT as u64);

    let c = run(SEED + 1, COUNT);
    assert_ne!(
        a.snapshot().digest(),
        c.snapshot().digest(),
        "Different seeds should produce different books"
    );
}

#[test]
fn stress_memory_stability() {
    const ITERATIONS: usize = 100_000;
    const MAX_BOOK_SIZE: usize = 50_000;

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut book = OrderBook::new("BTCUSD", 0, MAX_PRICE, TallySink::default()).unwrap();
    let mut max_size_seen = 0;

    for _ in 0..ITERATIONS {
        let side = if rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };
        // Tight band around 5000 so most orders cross
        let price = rng.gen_range(4_990..5_010);
        let size = rng.gen_range(1..10);
        book.submit_limit_order(side, size, price, "Trader").unwrap();
        max_size_seen = max_size_seen.max(book.order_count());
    }

    println!("  Max book size: {}", max_size_seen);
    assert!(
        max_size_seen < MAX_BOOK_SIZE,
        "Book grew too large: {} (max {})",
        max_size_seen,
        MAX_BOOK_SIZE
    );
}
