//! Shared data transfer objects for the folio workspace.
#![warn(missing_docs)]

mod analysis;
mod error;
mod horizon;
mod market;
mod sector;

pub use analysis::{Rating, Recommendation};
pub use error::FolioError;
pub use horizon::Horizon;
pub use market::{HistoricalBar, SectorPerformance, StockPick, StockQuote, TimePoint};
pub use sector::Sector;
