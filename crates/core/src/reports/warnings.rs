//! Data-quality warnings raised while building statements.

use serde::{Deserialize, Serialize};

/// Data-quality warnings collected while building statements.
///
/// Warnings never change the numbers; they record where input was tolerated
/// rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Warning {
    /// Entry section is neither balance sheet nor income statement.
    UnknownSection {
        /// Section label as supplied.
        section: String,
        /// SARS item of the excluded entry.
        sars_item: String,
    },
    /// A SARS item appeared under more than one subsection; the first was kept.
    ConflictingSubsection {
        /// SARS item.
        sars_item: String,
        /// Subsection that was kept.
        kept: String,
        /// Subsection that was ignored.
        ignored: String,
    },
    /// Balance sheet subsection unknown; item placed in current assets unsigned.
    DefaultedToCurrentAssets {
        /// SARS item.
        sars_item: String,
        /// Subsection as supplied.
        subsection: String,
    },
    /// Income statement subsection unknown; item excluded from every total.
    DroppedIncomeItem {
        /// SARS item.
        sars_item: String,
        /// Subsection as supplied.
        subsection: String,
    },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSection { section, sars_item } => {
                write!(f, "'{sars_item}' has unknown section '{section}' and was excluded")
            }
            Self::ConflictingSubsection {
                sars_item,
                kept,
                ignored,
            } => write!(
                f,
                "'{sars_item}' is mapped to both '{kept}' and '{ignored}'; using '{kept}'"
            ),
            Self::DefaultedToCurrentAssets {
                sars_item,
                subsection,
            } => write!(
                f,
                "'{sars_item}' has unknown subsection '{subsection}'; shown under current assets"
            ),
            Self::DroppedIncomeItem {
                sars_item,
                subsection,
            } => write!(
                f,
                "'{sars_item}' has unknown subsection '{subsection}' and was left out of the income statement"
            ),
        }
    }
}
