use chrono::NaiveDate;
use folio_core::SeriesModel;
use folio_types::Horizon;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn arb_model() -> impl Strategy<Value = SeriesModel> {
    (
        1.0f64..10_000.0,
        -0.5f64..0.5,
        0.0f64..0.5,
        0.0f64..0.2,
        0.0f64..0.05,
        0.0f64..0.1,
    )
        .prop_map(
            |(
                base,
                annual_trend,
                annual_volatility,
                reversion_strength,
                shock_probability,
                shock_magnitude,
            )| SeriesModel {
                base,
                annual_trend,
                annual_volatility,
                reversion_strength,
                shock_probability,
                shock_magnitude,
            },
        )
}

fn arb_end() -> impl Strategy<Value = NaiveDate> {
    // Stay well inside chrono's range so five-year lookbacks never clamp.
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    #[test]
    fn simulate_keeps_length_and_date_shape(
        model in arb_model(),
        end in arb_end(),
        seed in any::<u64>(),
        horizon in prop::sample::select(vec![Horizon::SixMonths, Horizon::OneYear, Horizon::FiveYears]),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let series = model.simulate(horizon, end, &mut rng, |_| 0.0);

        prop_assert_eq!(series.len(), horizon.points() + 1);
        prop_assert_eq!(series.last().unwrap().date, end);
        for pair in series.windows(2) {
            prop_assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
        }
    }

    #[test]
    fn simulate_never_produces_non_finite_values(
        model in arb_model(),
        seed in any::<u64>(),
    ) {
        let end = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let series = model.simulate(Horizon::OneYear, end, &mut rng, |_| 0.0);
        prop_assert!(series.iter().all(|p| p.value.is_finite()));
    }
}
