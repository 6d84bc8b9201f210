//! folio-fixtures
//!
//! Hand-authored reference tables standing in for a real data source: stock
//! picks, per-sector analyst recommendations, and sector YTD figures.
//!
//! Tables are built once behind [`std::sync::LazyLock`] and never mutated,
//! so unsynchronized concurrent reads are safe. Lookups are pure and total:
//! unknown sectors or keys produce empty results, unknown tickers `None`.
#![warn(missing_docs)]

pub mod picks;
pub mod recommendations;
pub mod sectors;
