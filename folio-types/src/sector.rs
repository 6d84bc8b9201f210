use core::fmt;
use serde::{Deserialize, Serialize};

/// The nine sectors covered by the fixture tables.
///
/// Each sector has a short route key (used by recommendation lookups) and a
/// display name (used by stock-pick filters and performance cards). The enum
/// is closed on purpose: every fixture record carries one of these values,
/// which enforces the "every sector string is a defined sector" invariant at
/// the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    /// AI & Machine Learning.
    Ai,
    /// Blockchain & Digital Assets.
    Blockchain,
    /// Robotics & Automation.
    Robotics,
    /// Genomic Revolution.
    Genomics,
    /// Space Exploration.
    Space,
    /// Advanced Manufacturing.
    Manufacturing,
    /// Fintech & Digital Payments.
    Fintech,
    /// Next-Generation Internet.
    Internet,
    /// Autonomous Mobility.
    Mobility,
}

impl Sector {
    /// All covered sectors, in declaration order.
    ///
    /// Declaration order is load-bearing: the "all" recommendation aggregate
    /// concatenates per-sector lists in this order before its stable sort,
    /// so equal-rating ties keep this ordering.
    pub const ALL: [Self; 9] = [
        Self::Ai,
        Self::Blockchain,
        Self::Robotics,
        Self::Genomics,
        Self::Space,
        Self::Manufacturing,
        Self::Fintech,
        Self::Internet,
        Self::Mobility,
    ];

    /// Short route key, e.g. `"ai"`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Blockchain => "blockchain",
            Self::Robotics => "robotics",
            Self::Genomics => "genomics",
            Self::Space => "space",
            Self::Manufacturing => "manufacturing",
            Self::Fintech => "fintech",
            Self::Internet => "internet",
            Self::Mobility => "mobility",
        }
    }

    /// Display name, e.g. `"AI & Machine Learning"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ai => "AI & Machine Learning",
            Self::Blockchain => "Blockchain & Digital Assets",
            Self::Robotics => "Robotics & Automation",
            Self::Genomics => "Genomic Revolution",
            Self::Space => "Space Exploration",
            Self::Manufacturing => "Advanced Manufacturing",
            Self::Fintech => "Fintech & Digital Payments",
            Self::Internet => "Next-Generation Internet",
            Self::Mobility => "Autonomous Mobility",
        }
    }

    /// Resolve a route key. Unknown keys yield `None` rather than an error.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Resolve a display name (exact, case-sensitive match).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
