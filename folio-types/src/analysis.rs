use core::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{FolioError, Sector};

/// Analyst rating scale, ordered `StrongBuy > Buy > Hold > Sell > StrongSell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    /// Strong Buy (rank 5).
    #[serde(rename = "Strong Buy")]
    StrongBuy,
    /// Buy (rank 4).
    Buy,
    /// Hold (rank 3).
    Hold,
    /// Sell (rank 2).
    Sell,
    /// Strong Sell (rank 1).
    #[serde(rename = "Strong Sell")]
    StrongSell,
}

impl Rating {
    /// Numeric rank used to sort recommendations, `StrongBuy = 5 … StrongSell = 1`.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::StrongBuy => 5,
            Self::Buy => 4,
            Self::Hold => 3,
            Self::Sell => 2,
            Self::StrongSell => 1,
        }
    }

    /// Whether the rating qualifies for "top picks" (Strong Buy or Buy).
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::StrongBuy | Self::Buy)
    }

    /// Display label, e.g. `"Strong Buy"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StrongBuy => "Strong Buy",
            Self::Buy => "Buy",
            Self::Hold => "Hold",
            Self::Sell => "Sell",
            Self::StrongSell => "Strong Sell",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rating {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Strong Buy" => Ok(Self::StrongBuy),
            "Buy" => Ok(Self::Buy),
            "Hold" => Ok(Self::Hold),
            "Sell" => Ok(Self::Sell),
            "Strong Sell" => Ok(Self::StrongSell),
            other => Err(FolioError::invalid_arg(format!(
                "unknown rating label: {other:?}"
            ))),
        }
    }
}

/// A full analyst recommendation card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Ticker symbol.
    pub ticker: String,
    /// Company display name.
    pub company_name: String,
    /// Sector the recommendation is filed under.
    pub sector: Sector,
    /// Last price at publication.
    pub price: f64,
    /// Day change at publication, in percent.
    pub change_percent: f64,
    /// Analyst rating.
    pub rating: Rating,
    /// 12-month target price.
    pub target_price: f64,
    /// Upside to target, in percent.
    pub upside_percent: f64,
    /// Covering analyst, when attributed.
    pub analyst: Option<String>,
    /// Publication date.
    pub date: NaiveDate,
    /// One-paragraph thesis.
    pub summary: String,
    /// Ordered supporting points.
    pub key_points: Vec<String>,
    /// Ordered risk factors (may be empty).
    pub risks: Vec<String>,
}
