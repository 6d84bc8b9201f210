use chrono::{NaiveDate, Utc};

use folio_types::{
    FolioError, Horizon, Recommendation, SectorPerformance, StockPick, TimePoint,
};

/// Fallback YTD assumption for sector names without a fixture entry, in percent.
const DEFAULT_SECTOR_YTD: f64 = 5.0;

/// Handle exposing the dashboard's generation and query surface.
///
/// Cheap to clone; holds only policy knobs. All fixture state lives in
/// process-wide write-once tables.
#[derive(Debug, Clone)]
pub struct Folio {
    default_sector_ytd: f64,
    end_date: Option<NaiveDate>,
}

/// Builder for constructing a [`Folio`] handle with custom policy.
#[derive(Debug, Clone)]
pub struct FolioBuilder {
    default_sector_ytd: f64,
    end_date: Option<NaiveDate>,
}

impl Default for FolioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FolioBuilder {
    /// Create a builder with the default policy.
    ///
    /// Defaults: unknown sector names assume a +5% YTD trend, and generated
    /// series end at today's date.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_sector_ytd: DEFAULT_SECTOR_YTD,
            end_date: None,
        }
    }

    /// YTD percentage assumed for sector names with no fixture entry.
    ///
    /// An unknown name is a policy case, not an error: the series is still
    /// generated, just with this trend instead of a fixture figure.
    #[must_use]
    pub const fn default_sector_ytd(mut self, ytd_percent: f64) -> Self {
        self.default_sector_ytd = ytd_percent;
        self
    }

    /// Pin the date generated series end at (instead of today).
    ///
    /// Mostly useful in tests and demos that need stable date ranges.
    #[must_use]
    pub const fn end_date(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Finish building the handle.
    #[must_use]
    pub const fn build(self) -> Folio {
        Folio {
            default_sector_ytd: self.default_sector_ytd,
            end_date: self.end_date,
        }
    }
}

impl Default for Folio {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Folio {
    /// Start building a new `Folio` handle.
    #[must_use]
    pub const fn builder() -> FolioBuilder {
        FolioBuilder::new()
    }

    fn end(&self) -> NaiveDate {
        self.end_date.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Synthetic market index series over `horizon`, oldest first, ending at
    /// the configured end date. Always `horizon.points() + 1` entries.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "folio::market_series", skip(self), fields(horizon = %horizon))
    )]
    #[must_use]
    pub fn market_series(&self, horizon: Horizon) -> Vec<TimePoint> {
        folio_core::market_series(horizon, self.end(), &mut rand::rng())
    }

    /// Synthetic performance series for a sector, trending toward its YTD
    /// figure. Unknown names use the configured default YTD assumption.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "folio::sector_series", skip(self), fields(sector = sector_name, horizon = %horizon))
    )]
    #[must_use]
    pub fn sector_series(&self, sector_name: &str, horizon: Horizon) -> Vec<TimePoint> {
        let ytd = folio_fixtures::sectors::ytd_by_name(sector_name)
            .unwrap_or(self.default_sector_ytd);
        folio_core::sector_series(ytd, horizon, self.end(), &mut rand::rng())
    }

    /// Every marketed stock pick. Caller-sortable.
    #[must_use]
    pub fn stock_picks(&self) -> Vec<StockPick> {
        folio_fixtures::picks::all()
    }

    /// Picks whose sector display name matches exactly (case-sensitive);
    /// empty when none match.
    #[must_use]
    pub fn stock_picks_by_sector(&self, sector_name: &str) -> Vec<StockPick> {
        folio_fixtures::picks::by_sector(sector_name)
    }

    /// The static recommendation list for a sector route key; empty for an
    /// unrecognized key.
    #[must_use]
    pub fn recommendations_by_sector(&self, sector_key: &str) -> Vec<Recommendation> {
        folio_fixtures::recommendations::by_sector_key(sector_key)
    }

    /// The first `limit` Strong Buy / Buy entries of the rating-sorted "all"
    /// aggregate, in aggregate order.
    #[must_use]
    pub fn top_recommendations(&self, limit: usize) -> Vec<Recommendation> {
        folio_fixtures::recommendations::all()
            .iter()
            .filter(|r| r.rating.is_positive())
            .take(limit)
            .cloned()
            .collect()
    }

    /// The recommendation whose ticker matches case-insensitively.
    ///
    /// # Errors
    /// Returns [`FolioError::NotFound`] when no recommendation carries the
    /// ticker.
    pub fn recommendation_by_symbol(&self, ticker: &str) -> Result<Recommendation, FolioError> {
        folio_fixtures::recommendations::by_symbol(ticker)
            .ok_or_else(|| FolioError::not_found(format!("recommendation for {ticker}")))
    }

    /// YTD performance view for every covered sector.
    ///
    /// `value`, `change` and `percent_change` all carry the sector's YTD
    /// figure by current design.
    #[must_use]
    pub fn sector_performance(&self) -> Vec<SectorPerformance> {
        folio_fixtures::sectors::YTD
            .into_iter()
            .map(|(sector, ytd)| SectorPerformance {
                name: sector.name().to_string(),
                value: ytd,
                change: ytd,
                percent_change: ytd,
            })
            .collect()
    }
}
