//! folio serves the data behind a stock-recommendation dashboard.
//!
//! Overview
//! - Generates synthetic market and sector performance series over a
//!   selectable horizon (6 months, 1 year, 5 years) via `folio_core`.
//! - Exposes read-only, filtered/sorted views over the static pick,
//!   recommendation, and sector tables in `folio_fixtures`.
//! - Re-exports the domain types from `folio_types` so downstream code
//!   depends on this crate alone.
//!
//! Key behaviors
//! - Every query is synchronous and total: unknown sector keys or names
//!   degrade to empty results or a default trend assumption, unknown
//!   tickers map to [`FolioError::NotFound`], and malformed horizon tokens
//!   are rejected by [`Horizon`]'s `FromStr` with [`FolioError::InvalidArg`].
//! - Generated series are structural, not reproducible: two calls with the
//!   same arguments differ in values but always agree on length and dates.
//! - Fixture tables are initialized once and never mutated; the handle is
//!   cheap to clone and safe to share across threads.
//!
//! Building a handle and requesting data:
//! ```rust
//! use folio::{Folio, Horizon};
//!
//! let folio = Folio::builder().build();
//!
//! let market = folio.market_series(Horizon::OneYear);
//! assert_eq!(market.len(), 366);
//!
//! let top = folio.top_recommendations(3);
//! assert!(top.iter().all(|r| r.rating.is_positive()));
//! ```
#![warn(missing_docs)]

mod core;
pub mod quotes;

pub use core::{Folio, FolioBuilder};

// Re-export the domain types for convenience
pub use folio_types::{
    FolioError, HistoricalBar, Horizon, Rating, Recommendation, Sector, SectorPerformance,
    StockPick, StockQuote, TimePoint,
};
