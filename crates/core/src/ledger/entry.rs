//! Ledger entry domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Top-level statement an entry is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Statement of financial position.
    BalanceSheet,
    /// Statement of profit or loss.
    IncomeStatement,
}

impl Section {
    /// Parses a section label.
    ///
    /// The label is lower-cased and compared exactly, so `"Balance Sheet"`
    /// matches but `" balance sheet"` does not. Unknown labels return `None`.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "balance sheet" => Some(Self::BalanceSheet),
            "income statement" => Some(Self::IncomeStatement),
            _ => None,
        }
    }

    /// Returns the canonical label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BalanceSheet => "balance sheet",
            Self::IncomeStatement => "income statement",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A trial-balance account mapped to a statutory line item.
///
/// Entries are produced by an upstream mapping stage; amounts are taken as
/// recorded and never re-signed at entry level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    /// Statement label, e.g. "Balance Sheet".
    pub section: String,
    /// Bucketing key within the section, e.g. "currentAssets".
    pub subsection: String,
    /// SARS line item the account is mapped to.
    pub sars_item: String,
    /// Current-year balance.
    pub balance: Decimal,
    /// Prior-year balance.
    #[serde(default)]
    pub prior_year_balance: Decimal,
    /// Source account code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_code: Option<String>,
    /// Source account name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
}

impl LedgerEntry {
    /// Creates an entry without source account details.
    #[must_use]
    pub fn new(
        section: impl Into<String>,
        subsection: impl Into<String>,
        sars_item: impl Into<String>,
        balance: Decimal,
        prior_year_balance: Decimal,
    ) -> Self {
        Self {
            section: section.into(),
            subsection: subsection.into(),
            sars_item: sars_item.into(),
            balance,
            prior_year_balance,
            account_code: None,
            account_name: None,
        }
    }

    /// Attaches the source account code and name.
    #[must_use]
    pub fn with_account(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.account_code = Some(code.into());
        self.account_name = Some(name.into());
        self
    }

    /// Returns the parsed section, or `None` if the label is unknown.
    #[must_use]
    pub fn section_kind(&self) -> Option<Section> {
        Section::parse(&self.section)
    }

    /// Returns true if the entry belongs to `section`.
    #[must_use]
    pub fn is_in(&self, section: Section) -> bool {
        self.section_kind() == Some(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("balance sheet", Some(Section::BalanceSheet))]
    #[case("Balance Sheet", Some(Section::BalanceSheet))]
    #[case("BALANCE SHEET", Some(Section::BalanceSheet))]
    #[case("Income Statement", Some(Section::IncomeStatement))]
    #[case(" balance sheet", None)]
    #[case("balancesheet", None)]
    #[case("", None)]
    fn test_section_parse(#[case] label: &str, #[case] expected: Option<Section>) {
        assert_eq!(Section::parse(label), expected);
    }

    #[test]
    fn test_entry_section_membership() {
        let entry = LedgerEntry::new("Income Statement", "grossProfitOrLoss", "Sales", dec!(-10), dec!(0));
        assert!(entry.is_in(Section::IncomeStatement));
        assert!(!entry.is_in(Section::BalanceSheet));

        let unknown = LedgerEntry::new("notes", "x", "y", dec!(1), dec!(1));
        assert_eq!(unknown.section_kind(), None);
    }

    #[test]
    fn test_entry_json_uses_camel_case() {
        let json = r#"{
            "section": "Balance Sheet",
            "subsection": "currentAssets",
            "sarsItem": "Trade debtors",
            "balance": 125.50,
            "priorYearBalance": "99.10",
            "accountCode": "1100"
        }"#;
        let entry: LedgerEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.sars_item, "Trade debtors");
        assert_eq!(entry.balance, dec!(125.50));
        assert_eq!(entry.prior_year_balance, dec!(99.10));
        assert_eq!(entry.account_code.as_deref(), Some("1100"));
        assert!(entry.account_name.is_none());
    }

    #[test]
    fn test_prior_year_balance_defaults_to_zero() {
        let json = r#"{"section":"balance sheet","subsection":"currentAssets","sarsItem":"Cash","balance":10}"#;
        let entry: LedgerEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.prior_year_balance, Decimal::ZERO);
    }
}
