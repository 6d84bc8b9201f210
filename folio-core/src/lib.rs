//! folio-core
//!
//! Synthetic daily time-series generation for market and sector views.
//!
//! Both public generators share one random-walk engine ([`SeriesModel`]):
//! a constant daily drift, uniform noise scaled by annualized volatility,
//! mean reversion toward the seed base, an optional per-step cycle term,
//! and rare multiplicative shocks. Series are structural, not reproducible:
//! callers inject the RNG, so tests seed a [`rand::rngs::StdRng`] while
//! production paths use [`rand::rng`].
#![warn(missing_docs)]

mod model;

pub use model::{SeriesModel, market_model, market_series, sector_model, sector_series};
