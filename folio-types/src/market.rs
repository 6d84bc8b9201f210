use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Sector;

/// One entry of a generated daily value series.
///
/// Series are ordered oldest first, strictly increasing by date, one point
/// per calendar day, and are immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    /// Calendar date of the observation.
    pub date: NaiveDate,
    /// Series value, rounded to 2 decimals.
    pub value: f64,
}

/// A marketed stock pick with its realized return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPick {
    /// Ticker symbol, unique within its sector.
    pub symbol: String,
    /// Sector the pick belongs to.
    pub sector: Sector,
    /// Realized return since the pick, in percent.
    pub return_percent: f64,
}

/// Point-in-time quote snapshot for a single symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockQuote {
    /// Ticker symbol.
    pub symbol: String,
    /// Last price.
    pub price: f64,
    /// Absolute change versus the previous close.
    pub change: f64,
    /// Relative change versus the previous close, in percent.
    pub change_percent: f64,
    /// Session high.
    pub day_high: f64,
    /// Session low.
    pub day_low: f64,
    /// Session volume.
    pub volume: u64,
    /// Market capitalization, when known.
    pub market_cap: Option<f64>,
    /// Previous session close.
    pub previous_close: f64,
}

/// One day of OHLCV history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalBar {
    /// Calendar date of the bar.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Session high.
    pub high: f64,
    /// Session low.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Session volume.
    pub volume: u64,
}

/// Year-to-date performance view for one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorPerformance {
    /// Sector display name.
    pub name: String,
    /// The sector's YTD percentage.
    ///
    /// `value`, `change` and `percent_change` all carry the same YTD figure
    /// by current design; consumers render them in different card slots.
    pub value: f64,
    /// Same YTD figure (see `value`).
    pub change: f64,
    /// Same YTD figure (see `value`).
    pub percent_change: f64,
}
