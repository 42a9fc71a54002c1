//! Tick Book - Binary Entry Point
//!
//! Replays the continuous-trading example from Harris, "Trading and
//! Exchanges" (p. 126) through a book wired to the logging sink, then prints
//! what is left resting.
//!
//! Fills are logged at `info`; run with `RUST_LOG=info` (or `trace` to see
//! every book event).

use tick_book::{BookConfig, BookError, LogSink, Side};

fn main() -> Result<(), BookError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut book = BookConfig::default().build(LogSink)?;

    let script = [
        (Side::Buy, 3, 200, "Bea"),
        (Side::Sell, 2, 201, "Sam"),
        (Side::Buy, 2, 200, "Ben"),
        (Side::Sell, 1, 198, "Sol"),
        (Side::Sell, 5, 202, "Stu"),
        (Side::Buy, 2, 201, "Bif"),
        (Side::Buy, 2, 202, "Bif"),
        (Side::Buy, 2, 201, "Bob"),
        (Side::Sell, 6, 200, "Sue"),
        (Side::Buy, 7, 198, "Bud"),
    ];

    for (side, size, price, trader) in script {
        let order_id = book.submit_limit_order(side, size, price, trader)?;
        log::debug!("accepted {} {} {} @ {} as #{}", trader, side, size, price, order_id);
    }

    println!("{}", book.snapshot());
    println!("digest: {}", book.snapshot().digest_hex());
    Ok(())
}
