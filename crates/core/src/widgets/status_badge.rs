//! Status badge tones.

use serde::{Deserialize, Serialize};

/// Family of statuses a badge displays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeKind {
    /// Generic task statuses.
    #[default]
    Default,
    /// Opinion drafts.
    Opinion,
    /// SARS correspondence.
    Sars,
    /// Tax filings.
    Filing,
    /// Checklist priorities.
    Checklist,
}

impl BadgeKind {
    /// Parses a kind, falling back to [`BadgeKind::Default`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "opinion" => Self::Opinion,
            "sars" => Self::Sars,
            "filing" => Self::Filing,
            "checklist" => Self::Checklist,
            _ => Self::Default,
        }
    }

    /// Status whose tone is used when a status is not recognised.
    #[must_use]
    pub const fn fallback_status(self) -> Option<&'static str> {
        match self {
            Self::Opinion => Some("DRAFT"),
            Self::Sars | Self::Filing => Some("PENDING"),
            Self::Checklist => Some("MEDIUM"),
            Self::Default => None,
        }
    }

    fn lookup(self, status: &str) -> Option<BadgeTone> {
        use BadgeTone::{Blue, Green, Neutral, Purple, Red, Yellow};

        let tone = match (self, status) {
            (Self::Opinion, "DRAFT") => Neutral,
            (Self::Opinion, "UNDER_REVIEW") => Yellow,
            (Self::Opinion, "FINAL") => Green,

            (Self::Sars, "PENDING") => Yellow,
            (Self::Sars, "IN_PROGRESS") => Blue,
            (Self::Sars, "SUBMITTED") => Green,
            (Self::Sars, "RESOLVED") => Neutral,

            (Self::Filing, "PENDING") => Yellow,
            (Self::Filing, "IN_PROGRESS") => Blue,
            (Self::Filing, "SUBMITTED") => Purple,
            (Self::Filing, "APPROVED") => Green,
            (Self::Filing, "REJECTED") => Red,

            (Self::Checklist, "HIGH") => Red,
            (Self::Checklist, "MEDIUM") => Yellow,
            (Self::Checklist, "LOW") => Green,

            (Self::Default, "PENDING") => Yellow,
            (Self::Default, "IN_PROGRESS" | "ACTIVE") => Blue,
            (Self::Default, "COMPLETED") => Green,
            (Self::Default, "INACTIVE") => Neutral,

            _ => return None,
        };
        Some(tone)
    }
}

/// Colour family of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    /// Gray.
    Neutral,
    /// Yellow.
    Yellow,
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Purple.
    Purple,
    /// Red.
    Red,
}

impl BadgeTone {
    /// Colour name used by style sheets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "gray",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Red => "red",
        }
    }
}

/// Returns the tone for `status` within `kind`.
///
/// Status codes are matched exactly. Unknown codes take the tone of the
/// kind's fallback status, or neutral for [`BadgeKind::Default`].
#[must_use]
pub fn badge_tone(kind: BadgeKind, status: &str) -> BadgeTone {
    kind.lookup(status)
        .or_else(|| kind.fallback_status().and_then(|fallback| kind.lookup(fallback)))
        .unwrap_or(BadgeTone::Neutral)
}
