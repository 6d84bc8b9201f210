//! Static stock-pick table, grouped by sector.

use std::sync::LazyLock;

use folio_types::{Sector, StockPick};

static PICKS: LazyLock<Vec<StockPick>> = LazyLock::new(|| {
    [
        (Sector::Ai, "PLTR", 1087.62),
        (Sector::Ai, "NVDA", 26.28),
        (Sector::Ai, "AMD", 21.49),
        (Sector::Ai, "GOOG", 17.36),
        (Sector::Ai, "MSFT", 12.05),
        (Sector::Blockchain, "COIN", 64.20),
        (Sector::Blockchain, "MSTR", 48.77),
        (Sector::Robotics, "ISRG", 32.15),
        (Sector::Robotics, "ABB", 18.40),
        (Sector::Genomics, "CRSP", 15.30),
        (Sector::Genomics, "ILMN", -12.60),
        (Sector::Space, "RKLB", 52.38),
        (Sector::Space, "SPCE", -38.20),
        (Sector::Manufacturing, "XMTR", 21.70),
        (Sector::Manufacturing, "DDD", -9.85),
        (Sector::Fintech, "SOFI", 28.90),
        (Sector::Fintech, "SQ", 19.65),
        (Sector::Internet, "META", 41.25),
        (Sector::Internet, "AMZN", 34.70),
        (Sector::Mobility, "TSLA", 24.30),
        (Sector::Mobility, "LAZR", -18.45),
    ]
    .into_iter()
    .map(|(sector, symbol, return_percent)| StockPick {
        symbol: symbol.to_string(),
        sector,
        return_percent,
    })
    .collect()
});

/// Every pick, in sector declaration order.
#[must_use]
pub fn all() -> Vec<StockPick> {
    PICKS.clone()
}

/// Picks whose sector display name matches `name` exactly (case-sensitive).
/// Empty for unknown names.
#[must_use]
pub fn by_sector(name: &str) -> Vec<StockPick> {
    PICKS
        .iter()
        .filter(|p| p.sector.name() == name)
        .cloned()
        .collect()
}
