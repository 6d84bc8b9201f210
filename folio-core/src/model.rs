use chrono::{Days, NaiveDate};
use folio_types::{Horizon, TimePoint};
use rand::Rng;
use serde::{Deserialize, Serialize};

use std::f64::consts::TAU;

/// Index level the market series is seeded at.
const MARKET_BASE: f64 = 4500.0;
/// Long-run annual trend assumed for the market series.
const MARKET_ANNUAL_TREND: f64 = 0.08;
/// Annualized volatility of the market series.
const MARKET_ANNUAL_VOLATILITY: f64 = 0.15;
/// Period, in days, of the market's seasonal sinusoid.
const MARKET_SEASONAL_PERIOD: f64 = 180.0;
/// Period, in days, of the market's longer cycle sinusoid.
const MARKET_CYCLE_PERIOD: f64 = 720.0;
/// Daily amplitude of the seasonal term, as a fraction of base.
const MARKET_SEASONAL_AMPLITUDE: f64 = 0.0004;
/// Daily amplitude of the longer cycle term, as a fraction of base.
const MARKET_CYCLE_AMPLITUDE: f64 = 0.0006;

/// Index level sector series are seeded at.
const SECTOR_BASE: f64 = 100.0;
/// Annualized volatility for sectors with a non-negative YTD figure.
const SECTOR_ANNUAL_VOLATILITY: f64 = 0.14;
/// Annualized volatility for sectors currently down on the year.
const SECTOR_ANNUAL_VOLATILITY_DOWN: f64 = 0.22;

const DAYS_PER_YEAR: f64 = 365.0;

/// Parameters of the shared drift + noise + mean-reversion + shock walk.
///
/// The market and sector generators are both instances of this model; they
/// differ only in their constants and in the extra per-step cycle term the
/// market view adds. Values in the output are rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesModel {
    /// Seed value; also the level mean reversion pulls toward.
    pub base: f64,
    /// Annual trend as a fraction (0.08 = +8%/year).
    pub annual_trend: f64,
    /// Annualized volatility as a fraction; scaled by `1/sqrt(365)` per step.
    pub annual_volatility: f64,
    /// Fraction of the gap to `base` recovered per step.
    pub reversion_strength: f64,
    /// Per-step probability of a multiplicative shock, clamped to `[0, 1]`.
    pub shock_probability: f64,
    /// Maximum absolute relative impact of a shock (0.025 = ±2.5%).
    pub shock_magnitude: f64,
}

impl SeriesModel {
    /// Walk the model over `horizon` ending at `end`, one step per calendar
    /// day, oldest first.
    ///
    /// Returns exactly `horizon.points() + 1` entries, inclusive of both
    /// endpoints. `cycle` supplies an additive term for step `i` (the market
    /// view's seasonal sinusoids); pass a closure returning `0.0` when no
    /// cyclical component applies. The walk itself never fails and has no
    /// side effects beyond drawing from `rng`.
    pub fn simulate<R, F>(&self, horizon: Horizon, end: NaiveDate, rng: &mut R, cycle: F) -> Vec<TimePoint>
    where
        R: Rng + ?Sized,
        F: Fn(i64) -> f64,
    {
        let points = horizon.points();
        let start = end
            .checked_sub_days(Days::new(points as u64))
            .unwrap_or(NaiveDate::MIN);

        let daily_drift = self.annual_trend / DAYS_PER_YEAR * self.base;
        let daily_volatility = self.annual_volatility / DAYS_PER_YEAR.sqrt() * self.base;
        let shock_probability = self.shock_probability.clamp(0.0, 1.0);

        let mut current = self.base;
        let mut out = Vec::with_capacity(points + 1);
        for i in 0..=points as i64 {
            let date = start
                .checked_add_days(Days::new(i as u64))
                .unwrap_or(NaiveDate::MAX);
            out.push(TimePoint {
                date,
                value: round2(current),
            });

            let noise = rng.random_range(-1.0..=1.0) * daily_volatility;
            let reversion = self.reversion_strength * (self.base - current);
            let mut next = current + daily_drift + noise + reversion + cycle(i);
            if shock_probability > 0.0 && rng.random_bool(shock_probability) {
                next += next * rng.random_range(-self.shock_magnitude..=self.shock_magnitude);
            }
            current = next;
        }
        out
    }
}

/// Model behind [`market_series`].
#[must_use]
pub const fn market_model() -> SeriesModel {
    SeriesModel {
        base: MARKET_BASE,
        annual_trend: MARKET_ANNUAL_TREND,
        annual_volatility: MARKET_ANNUAL_VOLATILITY,
        reversion_strength: 0.002,
        shock_probability: 0.001,
        shock_magnitude: 0.025,
    }
}

/// Model behind [`sector_series`] for a given YTD percentage.
///
/// The daily drift comes straight from the sector's YTD figure (`ytd/365`),
/// and sectors that are down on the year walk with higher volatility.
#[must_use]
pub fn sector_model(ytd_percent: f64) -> SeriesModel {
    let annual_volatility = if ytd_percent < 0.0 {
        SECTOR_ANNUAL_VOLATILITY_DOWN
    } else {
        SECTOR_ANNUAL_VOLATILITY
    };
    SeriesModel {
        base: SECTOR_BASE,
        annual_trend: ytd_percent / 100.0,
        annual_volatility,
        reversion_strength: 0.0015,
        shock_probability: 0.002,
        shock_magnitude: 0.04,
    }
}

/// Generate the synthetic market index series for `horizon`, ending at `end`.
///
/// Adds seasonal (180-day) and longer-cycle (720-day) sinusoids on top of
/// the shared walk.
pub fn market_series<R: Rng + ?Sized>(
    horizon: Horizon,
    end: NaiveDate,
    rng: &mut R,
) -> Vec<TimePoint> {
    let model = market_model();
    model.simulate(horizon, end, rng, |i| {
        let day = i as f64;
        model.base * MARKET_SEASONAL_AMPLITUDE * (TAU * day / MARKET_SEASONAL_PERIOD).sin()
            + model.base * MARKET_CYCLE_AMPLITUDE * (TAU * day / MARKET_CYCLE_PERIOD).sin()
    })
}

/// Generate a synthetic sector series for `horizon`, ending at `end`,
/// trending toward the sector's `ytd_percent`.
///
/// Sector walks carry no seasonal terms; instead they shock slightly more
/// often and harder than the market walk (sector events).
pub fn sector_series<R: Rng + ?Sized>(
    ytd_percent: f64,
    horizon: Horizon,
    end: NaiveDate,
    rng: &mut R,
) -> Vec<TimePoint> {
    sector_model(ytd_percent).simulate(horizon, end, rng, |_| 0.0)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn round2_rounds_half_away_from_zero() {
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(99.994), 99.99);
    }
}
