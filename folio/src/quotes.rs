//! One-off mock quote and OHLCV history snapshots.
//!
//! These stand in for a live quote feed in demos: each call draws a fresh
//! random snapshot with a coherent shape (high >= open/close >= low, change
//! figures consistent with the previous close).

use chrono::{Days, NaiveDate};
use folio_types::{HistoricalBar, StockQuote};
use rand::Rng;

/// Maximum mock session volume.
const MAX_VOLUME: u64 = 10_000_000;

/// Draw a mock quote snapshot for `symbol`.
///
/// Prices land in the 50–1050 range with the previous close within ±5%,
/// the session high/low at ±2% of the last price, and a market cap scaled
/// from the price.
pub fn mock_quote<R: Rng + ?Sized>(symbol: &str, rng: &mut R) -> StockQuote {
    let price = rng.random_range(50.0..=1050.0);
    let previous_close = price * (1.0 + rng.random_range(-0.05..=0.05));
    let change = price - previous_close;
    let change_percent = change / previous_close * 100.0;
    StockQuote {
        symbol: symbol.to_string(),
        price,
        change,
        change_percent,
        day_high: price * 1.02,
        day_low: price * 0.98,
        volume: rng.random_range(0..MAX_VOLUME),
        market_cap: Some(price * 1_000_000_000.0),
        previous_close,
    }
}

/// Draw `days + 1` mock daily OHLCV bars ending at `end`, oldest first.
///
/// Closes follow a ±3% daily walk from a random starting price; each bar's
/// open sits within ±1% of the close and the high/low bracket both within
/// a further 2%.
pub fn mock_history<R: Rng + ?Sized>(days: usize, end: NaiveDate, rng: &mut R) -> Vec<HistoricalBar> {
    let start = end
        .checked_sub_days(Days::new(days as u64))
        .unwrap_or(NaiveDate::MIN);

    let mut price = rng.random_range(50.0..=1050.0);
    let mut out = Vec::with_capacity(days + 1);
    for i in 0..=days as u64 {
        let date = start.checked_add_days(Days::new(i)).unwrap_or(NaiveDate::MAX);
        price *= 1.0 + rng.random_range(-0.03..=0.03);
        let open: f64 = price * (1.0 + rng.random_range(-0.01..=0.01));
        let high = open.max(price) * (1.0 + rng.random_range(0.0..=0.02));
        let low = open.min(price) * (1.0 - rng.random_range(0.0..=0.02));
        out.push(HistoricalBar {
            date,
            open,
            high,
            low,
            close: price,
            volume: rng.random_range(0..MAX_VOLUME),
        });
    }
    out
}
