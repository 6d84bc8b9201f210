//! Static year-to-date figures, one per covered sector.

use folio_types::Sector;

/// YTD percentage for every covered sector, in declaration order.
pub const YTD: [(Sector, f64); 9] = [
    (Sector::Ai, 26.5),
    (Sector::Blockchain, 15.7),
    (Sector::Robotics, 12.3),
    (Sector::Genomics, -8.4),
    (Sector::Space, -4.2),
    (Sector::Manufacturing, 6.8),
    (Sector::Fintech, 9.5),
    (Sector::Internet, 18.2),
    (Sector::Mobility, -2.7),
];

/// YTD percentage for a sector.
#[must_use]
pub fn ytd(sector: Sector) -> f64 {
    YTD.iter()
        .find(|(s, _)| *s == sector)
        .map(|(_, v)| *v)
        .unwrap_or_default()
}

/// YTD percentage looked up by display name; `None` for unknown names.
#[must_use]
pub fn ytd_by_name(name: &str) -> Option<f64> {
    Sector::from_name(name).map(ytd)
}
