use chrono::NaiveDate;
use folio::{Folio, Horizon, quotes};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
}

fn folio() -> Folio {
    Folio::builder().end_date(end_date()).build()
}

#[test]
fn market_series_spans_the_horizon_inclusive() {
    let f = folio();
    for horizon in [Horizon::SixMonths, Horizon::OneYear, Horizon::FiveYears] {
        let series = f.market_series(horizon);
        assert_eq!(series.len(), horizon.points() + 1);
        assert_eq!(series.last().unwrap().date, end_date());
        for pair in series.windows(2) {
            assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
        }
    }
}

#[test]
fn sector_series_handles_known_and_unknown_names() {
    let f = folio();
    let known = f.sector_series("Genomic Revolution", Horizon::SixMonths);
    assert_eq!(known.len(), Horizon::SixMonths.points() + 1);

    // Unknown names fall back to the default trend assumption, not an error.
    let unknown = f.sector_series("Quantum Computing", Horizon::SixMonths);
    assert_eq!(unknown.len(), Horizon::SixMonths.points() + 1);
    assert!(unknown.iter().all(|p| p.value.is_finite()));
}

#[test]
fn series_default_to_ending_today() {
    let f = Folio::builder().build();
    let series = f.market_series(Horizon::SixMonths);
    assert_eq!(
        series.last().unwrap().date,
        chrono::Utc::now().date_naive()
    );
}

#[test]
fn mock_quote_is_internally_consistent() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..1_000 {
        let q = quotes::mock_quote("AAPL", &mut rng);
        assert_eq!(q.symbol, "AAPL");
        assert!((50.0..=1050.0).contains(&q.price));
        assert!(q.day_low <= q.price && q.price <= q.day_high);
        assert!((q.change - (q.price - q.previous_close)).abs() < 1e-9);
        assert!(q.volume < 10_000_000);
    }
}

#[test]
fn mock_history_brackets_open_and_close_within_high_low() {
    let mut rng = StdRng::seed_from_u64(6);
    let bars = quotes::mock_history(30, end_date(), &mut rng);
    assert_eq!(bars.len(), 31);
    assert_eq!(bars.last().unwrap().date, end_date());
    for bar in &bars {
        assert!(bar.high >= bar.open.max(bar.close));
        assert!(bar.low <= bar.open.min(bar.close));
        assert!(bar.close.is_finite());
    }
}
