use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::FolioError;

/// Lookback window for a generated series.
///
/// Maps one-to-one with the UI range selector tokens and determines how many
/// daily steps a generator walks: a horizon of `n` points yields `n + 1`
/// entries, inclusive of both endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Horizon {
    /// Six months (180 daily steps).
    #[serde(rename = "6m")]
    SixMonths,
    /// One year (365 daily steps).
    #[serde(rename = "1y")]
    OneYear,
    /// Five years (1825 daily steps).
    #[serde(rename = "5y")]
    FiveYears,
}

impl Horizon {
    /// Number of daily steps covered by this horizon.
    #[must_use]
    pub const fn points(self) -> usize {
        match self {
            Self::SixMonths => 180,
            Self::OneYear => 365,
            Self::FiveYears => 1825,
        }
    }

    /// Canonical range-selector token (`"6m"`, `"1y"`, `"5y"`).
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::SixMonths => "6m",
            Self::OneYear => "1y",
            Self::FiveYears => "5y",
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Horizon {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "6m" => Ok(Self::SixMonths),
            "1y" => Ok(Self::OneYear),
            "5y" => Ok(Self::FiveYears),
            other => Err(FolioError::invalid_arg(format!(
                "unsupported horizon token: {other:?} (expected 6m, 1y, or 5y)"
            ))),
        }
    }
}
