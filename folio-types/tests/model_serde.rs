use std::str::FromStr;

use folio_types::{FolioError, Horizon, Rating, Sector};

#[test]
fn horizon_tokens_parse_case_insensitively() {
    assert_eq!(Horizon::from_str("6m").unwrap(), Horizon::SixMonths);
    assert_eq!(Horizon::from_str("1Y").unwrap(), Horizon::OneYear);
    assert_eq!(Horizon::from_str("5y").unwrap(), Horizon::FiveYears);
}

#[test]
fn unsupported_horizon_token_is_rejected_as_invalid_arg() {
    let err = Horizon::from_str("3mo").unwrap_err();
    assert!(matches!(err, FolioError::InvalidArg(_)));
}

#[test]
fn horizon_serde_uses_selector_tokens() {
    let json = serde_json::to_string(&Horizon::FiveYears).expect("serialize horizon");
    assert_eq!(json, "\"5y\"");
    let de: Horizon = serde_json::from_str("\"6m\"").expect("deserialize horizon");
    assert_eq!(de, Horizon::SixMonths);
}

#[test]
fn rating_ranks_are_strictly_descending() {
    let ranks: Vec<u8> = [
        Rating::StrongBuy,
        Rating::Buy,
        Rating::Hold,
        Rating::Sell,
        Rating::StrongSell,
    ]
    .into_iter()
    .map(Rating::rank)
    .collect();
    assert_eq!(ranks, vec![5, 4, 3, 2, 1]);
}

#[test]
fn rating_serde_matches_display_labels() {
    let json = serde_json::to_string(&Rating::StrongBuy).expect("serialize rating");
    assert_eq!(json, "\"Strong Buy\"");
    let de: Rating = serde_json::from_str("\"Hold\"").expect("deserialize rating");
    assert_eq!(de, Rating::Hold);
    assert_eq!(Rating::from_str("Strong Sell").unwrap(), Rating::StrongSell);
}

#[test]
fn sector_keys_and_names_resolve_both_ways() {
    for sector in Sector::ALL {
        assert_eq!(Sector::from_key(sector.key()), Some(sector));
        assert_eq!(Sector::from_name(sector.name()), Some(sector));
    }
    assert_eq!(Sector::from_key("all"), None);
    // Name matching is exact and case-sensitive.
    assert_eq!(Sector::from_name("ai & machine learning"), None);
}
