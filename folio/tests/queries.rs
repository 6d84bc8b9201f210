use folio::{Folio, FolioError, Rating, Sector};

fn folio() -> Folio {
    Folio::builder().build()
}

#[test]
fn stock_picks_by_sector_is_a_filtered_subset() {
    let f = folio();
    let all = f.stock_picks();
    let ai = f.stock_picks_by_sector("AI & Machine Learning");

    assert!(!ai.is_empty());
    for pick in &ai {
        assert_eq!(pick.sector, Sector::Ai);
        assert!(all.contains(pick));
    }
}

#[test]
fn ai_picks_sorted_descending_by_return_yield_nvda_amd_goog() {
    let f = folio();
    let mut ai = f.stock_picks_by_sector("AI & Machine Learning");
    ai.sort_by(|a, b| b.return_percent.total_cmp(&a.return_percent));
    let order: Vec<&str> = ai
        .iter()
        .filter(|p| ["NVDA", "AMD", "GOOG"].contains(&p.symbol.as_str()))
        .map(|p| p.symbol.as_str())
        .collect();
    assert_eq!(order, vec!["NVDA", "AMD", "GOOG"]);
}

#[test]
fn recommendations_by_sector_handles_known_and_unknown_keys() {
    let f = folio();
    let ai = f.recommendations_by_sector("ai");
    assert_eq!(ai.len(), 3);
    assert!(ai.iter().all(|r| r.sector == Sector::Ai));

    assert!(f.recommendations_by_sector("metaverse").is_empty());
}

#[test]
fn top_recommendations_are_positive_and_capped() {
    let f = folio();
    let top = f.top_recommendations(3);
    assert!(top.len() <= 3);
    for r in &top {
        assert!(
            matches!(r.rating, Rating::StrongBuy | Rating::Buy),
            "{} rated {}",
            r.ticker,
            r.rating
        );
    }

    assert!(f.top_recommendations(0).is_empty());
}

#[test]
fn top_recommendations_follow_aggregate_order() {
    let f = folio();
    let top = f.top_recommendations(100);
    for pair in top.windows(2) {
        assert!(pair[0].rating.rank() >= pair[1].rating.rank());
    }
    // All strong buys come before the first plain buy.
    let first_buy = top.iter().position(|r| r.rating == Rating::Buy);
    if let Some(idx) = first_buy {
        assert!(top[..idx].iter().all(|r| r.rating == Rating::StrongBuy));
    }
}

#[test]
fn recommendation_lookup_is_case_insensitive() {
    let f = folio();
    let upper = f.recommendation_by_symbol("NVDA").expect("NVDA");
    let lower = f.recommendation_by_symbol("nvda").expect("nvda");
    assert_eq!(upper, lower);
}

#[test]
fn unknown_ticker_maps_to_not_found() {
    let f = folio();
    let err = f.recommendation_by_symbol("ZZZZ").unwrap_err();
    assert!(matches!(err, FolioError::NotFound { .. }));
}

#[test]
fn sector_performance_covers_every_sector_with_equal_fields() {
    let f = folio();
    let perf = f.sector_performance();
    assert_eq!(perf.len(), Sector::ALL.len());
    for view in &perf {
        assert!(Sector::from_name(&view.name).is_some());
        // All three fields carry the YTD figure by current design.
        assert_eq!(view.value, view.change);
        assert_eq!(view.value, view.percent_change);
    }
}
