use chrono::NaiveDate;
use folio_fixtures::{picks, recommendations, sectors};
use folio_types::{Rating, Sector};

#[test]
fn every_sector_has_picks_and_three_recommendations() {
    for sector in Sector::ALL {
        assert!(
            !picks::by_sector(sector.name()).is_empty(),
            "no picks for {sector}"
        );
        assert_eq!(
            recommendations::by_sector(sector).len(),
            3,
            "expected 3 recommendations for {sector}"
        );
    }
    assert!(picks::all().len() >= 15);
}

#[test]
fn aggregate_is_the_concatenation_of_all_sectors() {
    let total: usize = Sector::ALL
        .into_iter()
        .map(|s| recommendations::by_sector(s).len())
        .sum();
    assert_eq!(recommendations::all().len(), total);
}

#[test]
fn aggregate_is_sorted_descending_by_rating_rank() {
    let all = recommendations::all();
    for pair in all.windows(2) {
        assert!(
            pair[0].rating.rank() >= pair[1].rating.rank(),
            "{} ({}) sorted after {} ({})",
            pair[0].ticker,
            pair[0].rating,
            pair[1].ticker,
            pair[1].rating
        );
    }
}

#[test]
fn aggregate_ties_preserve_sector_insertion_order() {
    let all = recommendations::all();
    // SQ is recommended in both Blockchain and Fintech at the same rating;
    // the Blockchain entry is declared first and must stay first.
    let first_sq = all
        .iter()
        .find(|r| r.ticker == "SQ")
        .expect("SQ in aggregate");
    assert_eq!(first_sq.sector, Sector::Blockchain);
    assert_eq!(
        first_sq.date,
        NaiveDate::from_ymd_opt(2025, 2, 22).unwrap()
    );
}

#[test]
fn unknown_sector_key_degrades_to_empty() {
    assert!(recommendations::by_sector_key("metaverse").is_empty());
    assert!(recommendations::by_sector_key("all").is_empty());
}

#[test]
fn by_symbol_is_case_insensitive_and_first_match_wins() {
    let upper = recommendations::by_symbol("NVDA").expect("NVDA present");
    let lower = recommendations::by_symbol("nvda").expect("nvda present");
    assert_eq!(upper, lower);
    assert_eq!(upper.company_name, "NVIDIA Corporation");

    let sq = recommendations::by_symbol("sq").expect("SQ present");
    assert_eq!(sq.sector, Sector::Blockchain);

    assert!(recommendations::by_symbol("ZZZZ").is_none());
}

#[test]
fn pick_filter_matches_sector_name_exactly() {
    let ai = picks::by_sector("AI & Machine Learning");
    assert!(!ai.is_empty());
    assert!(ai.iter().all(|p| p.sector == Sector::Ai));
    // Case-sensitive: a differently-cased name matches nothing.
    assert!(picks::by_sector("ai & machine learning").is_empty());

    let all = picks::all();
    for pick in &ai {
        assert!(all.contains(pick), "sector filter must be a subset of all()");
    }
}

#[test]
fn ai_picks_sorted_by_return_follow_the_marketing_order() {
    let mut ai = picks::by_sector("AI & Machine Learning");
    ai.sort_by(|a, b| b.return_percent.total_cmp(&a.return_percent));
    let order: Vec<&str> = ai
        .iter()
        .filter(|p| ["NVDA", "AMD", "GOOG"].contains(&p.symbol.as_str()))
        .map(|p| p.symbol.as_str())
        .collect();
    assert_eq!(order, vec!["NVDA", "AMD", "GOOG"]);
}

#[test]
fn ytd_lookup_covers_every_sector_and_degrades_by_name() {
    for sector in Sector::ALL {
        assert!(sectors::ytd(sector).is_finite());
        assert_eq!(sectors::ytd_by_name(sector.name()), Some(sectors::ytd(sector)));
    }
    assert_eq!(sectors::ytd_by_name("Quantum Computing"), None);
}
