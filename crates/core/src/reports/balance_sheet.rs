//! Balance sheet aggregation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{LedgerEntry, Section};

use super::classify::{Classification, GroupedItem, SubsectionMatch, group_section, section_sum};
use super::types::{AggregatedLineItem, Bucket, Comparative};
use super::warnings::Warning;

/// The six balance sheet buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BalanceSheetBucket {
    /// Non-current assets.
    NonCurrentAssets,
    /// Current assets.
    CurrentAssets,
    /// Capital and reserves carried as credit balances.
    CapitalAndReservesCreditBalances,
    /// Capital and reserves carried as debit balances.
    CapitalAndReservesDebitBalances,
    /// Non-current liabilities.
    NonCurrentLiabilities,
    /// Current liabilities.
    CurrentLiabilities,
}

impl BalanceSheetBucket {
    /// All buckets in statement order.
    pub const ALL: [Self; 6] = [
        Self::NonCurrentAssets,
        Self::CurrentAssets,
        Self::CapitalAndReservesCreditBalances,
        Self::CapitalAndReservesDebitBalances,
        Self::NonCurrentLiabilities,
        Self::CurrentLiabilities,
    ];

    /// Maps a subsection to its bucket, ignoring case.
    #[must_use]
    pub fn from_subsection(subsection: &str) -> Option<Self> {
        match subsection.to_lowercase().as_str() {
            "noncurrentassets" => Some(Self::NonCurrentAssets),
            "currentassets" => Some(Self::CurrentAssets),
            "capitalandreservescreditbalances" => Some(Self::CapitalAndReservesCreditBalances),
            "capitalandreservesdebitbalances" => Some(Self::CapitalAndReservesDebitBalances),
            "noncurrentliabilities" => Some(Self::NonCurrentLiabilities),
            "currentliabilities" => Some(Self::CurrentLiabilities),
            _ => None,
        }
    }

    /// Equity and liability buckets hold credit balances and are negated for display.
    #[must_use]
    pub const fn is_sign_inverted(self) -> bool {
        !matches!(self, Self::NonCurrentAssets | Self::CurrentAssets)
    }

    /// Heading shown on the statement.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::NonCurrentAssets => "Non Current Assets",
            Self::CurrentAssets => "Current Assets",
            Self::CapitalAndReservesCreditBalances => "Capital and Reserves",
            Self::CapitalAndReservesDebitBalances => "Capital and Reserves (Debit Balances)",
            Self::NonCurrentLiabilities => "Non-Current Liabilities",
            Self::CurrentLiabilities => "Current Liabilities",
        }
    }
}

/// Derived balance sheet totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheetTotals {
    /// Non-current plus current assets.
    pub total_assets: Comparative,
    /// Raw sum of every income statement entry's balance.
    pub profit_loss: Comparative,
    /// Both capital and reserves buckets less the year's profit or loss.
    pub total_capital_and_reserves: Comparative,
    /// Non-current plus current liabilities.
    pub total_liabilities: Comparative,
    /// Capital and reserves plus liabilities.
    pub total_reserves_and_liabilities: Comparative,
    /// Assets less reserves and liabilities; zero for a balanced ledger.
    pub balance_check: Comparative,
}

impl BalanceSheetTotals {
    /// Net profit row shown under equity: the profit or loss with credit sign removed.
    #[must_use]
    pub fn current_year_net_profit(&self) -> Comparative {
        -self.profit_loss
    }

    /// True if the current-year balance check is strictly within `tolerance` of zero.
    #[must_use]
    pub fn is_balanced(&self, tolerance: Decimal) -> bool {
        self.balance_check.current.abs() < tolerance
    }

    /// True if the prior-year balance check is strictly within `tolerance` of zero.
    #[must_use]
    pub fn is_prior_balanced(&self, tolerance: Decimal) -> bool {
        self.balance_check.prior.abs() < tolerance
    }
}

/// Balance sheet built from classified ledger entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    /// Non-current assets.
    pub non_current_assets: Bucket<AggregatedLineItem>,
    /// Current assets, including items with unknown subsections.
    pub current_assets: Bucket<AggregatedLineItem>,
    /// Capital and reserves (credit balances), negated.
    pub capital_and_reserves_credit_balances: Bucket<AggregatedLineItem>,
    /// Capital and reserves (debit balances), negated.
    pub capital_and_reserves_debit_balances: Bucket<AggregatedLineItem>,
    /// Non-current liabilities, negated.
    pub non_current_liabilities: Bucket<AggregatedLineItem>,
    /// Current liabilities, negated.
    pub current_liabilities: Bucket<AggregatedLineItem>,
    /// Derived totals.
    pub totals: BalanceSheetTotals,
    /// Data-quality warnings.
    pub warnings: Vec<Warning>,
}

impl BalanceSheet {
    /// Builds the balance sheet from `entries`.
    ///
    /// Only balance sheet entries are bucketed, but the profit or loss folded
    /// into capital and reserves is summed over every income statement entry.
    #[must_use]
    pub fn from_entries(entries: &[LedgerEntry]) -> Self {
        let (grouped, mut warnings) =
            group_section(entries, Section::BalanceSheet, SubsectionMatch::CaseInsensitive);
        let item_count = grouped.len();

        let mut sheet = Self::default();
        for item in grouped {
            let classification = Classification::new(
                BalanceSheetBucket::from_subsection(item.subsection),
                item,
            );
            match classification {
                Classification::Bucketed(bucket, item) => sheet.place(bucket, item),
                Classification::Unclassified(item) => {
                    let warning = Warning::DefaultedToCurrentAssets {
                        sars_item: item.sars_item.to_string(),
                        subsection: item.subsection.to_string(),
                    };
                    tracing::warn!(%warning, "unknown balance sheet subsection");
                    warnings.push(warning);
                    sheet.place(BalanceSheetBucket::CurrentAssets, item);
                }
            }
        }

        sheet.totals = sheet.compute_totals(section_sum(entries, Section::IncomeStatement));
        sheet.warnings = warnings;

        tracing::debug!(
            items = item_count,
            balance_check = %sheet.totals.balance_check.current,
            "balance sheet aggregated"
        );
        sheet
    }

    /// Returns the bucket's line items.
    #[must_use]
    pub fn bucket(&self, bucket: BalanceSheetBucket) -> &Bucket<AggregatedLineItem> {
        match bucket {
            BalanceSheetBucket::NonCurrentAssets => &self.non_current_assets,
            BalanceSheetBucket::CurrentAssets => &self.current_assets,
            BalanceSheetBucket::CapitalAndReservesCreditBalances => {
                &self.capital_and_reserves_credit_balances
            }
            BalanceSheetBucket::CapitalAndReservesDebitBalances => {
                &self.capital_and_reserves_debit_balances
            }
            BalanceSheetBucket::NonCurrentLiabilities => &self.non_current_liabilities,
            BalanceSheetBucket::CurrentLiabilities => &self.current_liabilities,
        }
    }

    fn bucket_mut(&mut self, bucket: BalanceSheetBucket) -> &mut Bucket<AggregatedLineItem> {
        match bucket {
            BalanceSheetBucket::NonCurrentAssets => &mut self.non_current_assets,
            BalanceSheetBucket::CurrentAssets => &mut self.current_assets,
            BalanceSheetBucket::CapitalAndReservesCreditBalances => {
                &mut self.capital_and_reserves_credit_balances
            }
            BalanceSheetBucket::CapitalAndReservesDebitBalances => {
                &mut self.capital_and_reserves_debit_balances
            }
            BalanceSheetBucket::NonCurrentLiabilities => &mut self.non_current_liabilities,
            BalanceSheetBucket::CurrentLiabilities => &mut self.current_liabilities,
        }
    }

    /// Finds the bucket holding `sars_item`.
    #[must_use]
    pub fn find(&self, sars_item: &str) -> Option<(BalanceSheetBucket, &AggregatedLineItem)> {
        BalanceSheetBucket::ALL
            .into_iter()
            .find_map(|bucket| self.bucket(bucket).get(sars_item).map(|item| (bucket, item)))
    }

    fn place(&mut self, bucket: BalanceSheetBucket, item: GroupedItem<'_>) {
        let amounts = if bucket.is_sign_inverted() {
            -item.amounts
        } else {
            item.amounts
        };

        self.bucket_mut(bucket).push(AggregatedLineItem {
            sars_item: item.sars_item.to_string(),
            subsection: item.subsection.to_string(),
            amount: amounts.current,
            prior_year_amount: amounts.prior,
            mapped_accounts: item.entries.into_iter().cloned().collect(),
        });
    }

    fn compute_totals(&self, profit_loss: Comparative) -> BalanceSheetTotals {
        let total_assets = self.non_current_assets.total() + self.current_assets.total();
        let total_capital_and_reserves = self.capital_and_reserves_credit_balances.total()
            + self.capital_and_reserves_debit_balances.total()
            - profit_loss;
        let total_liabilities =
            self.non_current_liabilities.total() + self.current_liabilities.total();
        let total_reserves_and_liabilities = total_capital_and_reserves + total_liabilities;

        BalanceSheetTotals {
            total_assets,
            profit_loss,
            total_capital_and_reserves,
            total_liabilities,
            total_reserves_and_liabilities,
            balance_check: total_assets - total_reserves_and_liabilities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::types::{nested_prior_year_total, nested_total};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn bs(subsection: &str, sars_item: &str, balance: Decimal, prior: Decimal) -> LedgerEntry {
        LedgerEntry::new("Balance Sheet", subsection, sars_item, balance, prior)
    }

    #[rstest]
    #[case("noncurrentassets", Some(BalanceSheetBucket::NonCurrentAssets))]
    #[case("nonCurrentAssets", Some(BalanceSheetBucket::NonCurrentAssets))]
    #[case("currentAssets", Some(BalanceSheetBucket::CurrentAssets))]
    #[case("capitalAndReservesCreditBalances", Some(BalanceSheetBucket::CapitalAndReservesCreditBalances))]
    #[case("capitalAndReservesDebitBalances", Some(BalanceSheetBucket::CapitalAndReservesDebitBalances))]
    #[case("nonCurrentLiabilities", Some(BalanceSheetBucket::NonCurrentLiabilities))]
    #[case("CURRENTLIABILITIES", Some(BalanceSheetBucket::CurrentLiabilities))]
    #[case("current assets", None)]
    #[case("mystery", None)]
    fn test_bucket_from_subsection(#[case] subsection: &str, #[case] expected: Option<BalanceSheetBucket>) {
        assert_eq!(BalanceSheetBucket::from_subsection(subsection), expected);
    }

    #[test]
    fn test_only_asset_buckets_keep_sign() {
        let kept: Vec<_> = BalanceSheetBucket::ALL
            .into_iter()
            .filter(|b| !b.is_sign_inverted())
            .collect();
        assert_eq!(
            kept,
            vec![BalanceSheetBucket::NonCurrentAssets, BalanceSheetBucket::CurrentAssets]
        );
    }

    #[test]
    fn test_empty_input() {
        let sheet = BalanceSheet::from_entries(&[]);

        for bucket in BalanceSheetBucket::ALL {
            assert!(sheet.bucket(bucket).is_empty());
        }
        assert_eq!(sheet.totals, BalanceSheetTotals::default());
        assert_eq!(sheet.totals.balance_check, Comparative::ZERO);
        assert!(sheet.totals.is_balanced(dec!(0.01)));
        assert!(sheet.warnings.is_empty());
    }

    #[test]
    fn test_sign_convention() {
        let entries = vec![
            bs("currentLiabilities", "Trade creditors", dec!(100), dec!(40)),
            bs("currentAssets", "Cash", dec!(100), dec!(40)),
        ];
        let sheet = BalanceSheet::from_entries(&entries);

        let creditors = sheet.current_liabilities.get("Trade creditors").unwrap();
        assert_eq!(creditors.amount, dec!(-100));
        assert_eq!(creditors.prior_year_amount, dec!(-40));

        let cash = sheet.current_assets.get("Cash").unwrap();
        assert_eq!(cash.amount, dec!(100));
        assert_eq!(cash.prior_year_amount, dec!(40));
    }

    #[test]
    fn test_entries_with_same_sars_item_are_summed() {
        let entries = vec![
            bs("currentAssets", "Trade debtors", dec!(50), dec!(10)),
            bs("currentAssets", "Trade debtors", dec!(30), dec!(5)),
        ];
        let sheet = BalanceSheet::from_entries(&entries);

        assert_eq!(sheet.current_assets.len(), 1);
        let debtors = sheet.current_assets.get("Trade debtors").unwrap();
        assert_eq!(debtors.amount, dec!(80));
        assert_eq!(debtors.prior_year_amount, dec!(15));
        assert_eq!(debtors.mapped_accounts, entries);
    }

    #[test]
    fn test_unknown_subsection_defaults_to_current_assets_unsigned() {
        let entries = vec![bs("mystery", "Suspense", dec!(20), dec!(0))];
        let sheet = BalanceSheet::from_entries(&entries);

        let item = sheet.current_assets.get("Suspense").unwrap();
        assert_eq!(item.amount, dec!(20));
        assert_eq!(item.subsection, "mystery");
        assert_eq!(sheet.totals.total_assets.current, dec!(20));
        assert_eq!(
            sheet.warnings,
            vec![Warning::DefaultedToCurrentAssets {
                sars_item: "Suspense".into(),
                subsection: "mystery".into(),
            }]
        );
    }

    #[test]
    fn test_income_statement_entries_feed_profit_not_buckets() {
        let entries = vec![
            bs("currentAssets", "Cash", dec!(300), dec!(100)),
            bs("capitalAndReservesCreditBalances", "Share capital", dec!(-100), dec!(-100)),
            LedgerEntry::new("Income Statement", "grossProfitOrLoss", "Sales", dec!(-500), dec!(0)),
            LedgerEntry::new("Income Statement", "anything", "Rent", dec!(300), dec!(0)),
        ];
        let sheet = BalanceSheet::from_entries(&entries);

        assert!(sheet.find("Sales").is_none());
        assert_eq!(sheet.totals.profit_loss.current, dec!(-200));
        assert_eq!(sheet.totals.current_year_net_profit().current, dec!(200));
        // 100 share capital + 200 profit
        assert_eq!(sheet.totals.total_capital_and_reserves.current, dec!(300));
        assert_eq!(sheet.totals.balance_check.current, dec!(0));
        assert_eq!(sheet.totals.balance_check.prior, dec!(0));
    }

    #[test]
    fn test_unknown_sections_are_ignored() {
        let entries = vec![
            LedgerEntry::new("notes", "currentAssets", "Cash", dec!(999), dec!(999)),
            bs("currentAssets", "Cash", dec!(1), dec!(2)),
        ];
        let sheet = BalanceSheet::from_entries(&entries);

        assert_eq!(sheet.current_assets.get("Cash").unwrap().amount, dec!(1));
        assert_eq!(sheet.totals.total_assets, Comparative::new(dec!(1), dec!(2)));
    }

    #[test]
    fn test_all_totals() {
        let entries = vec![
            bs("nonCurrentAssets", "Equipment", dec!(1000), dec!(1200)),
            bs("currentAssets", "Cash", dec!(500), dec!(300)),
            bs("capitalAndReservesCreditBalances", "Share capital", dec!(-100), dec!(-100)),
            bs("capitalAndReservesCreditBalances", "Retained income", dec!(-600), dec!(-500)),
            bs("capitalAndReservesDebitBalances", "Drawings", dec!(50), dec!(0)),
            bs("nonCurrentLiabilities", "Long-term loan", dec!(-400), dec!(-600)),
            bs("currentLiabilities", "Trade creditors", dec!(-250), dec!(-200)),
            LedgerEntry::new("Income Statement", "grossProfitOrLoss", "Sales", dec!(-900), dec!(-700)),
            LedgerEntry::new("Income Statement", "expenseItemsDebitAmounts", "Salaries", dec!(700), dec!(600)),
        ];
        let sheet = BalanceSheet::from_entries(&entries);
        let t = sheet.totals;

        assert_eq!(t.total_assets, Comparative::new(dec!(1500), dec!(1500)));
        assert_eq!(t.profit_loss, Comparative::new(dec!(-200), dec!(-100)));
        // 100 + 600 - 50 + 200 ; 100 + 500 - 0 + 100
        assert_eq!(t.total_capital_and_reserves, Comparative::new(dec!(850), dec!(700)));
        assert_eq!(t.total_liabilities, Comparative::new(dec!(650), dec!(800)));
        assert_eq!(t.total_reserves_and_liabilities, Comparative::new(dec!(1500), dec!(1500)));
        assert_eq!(t.balance_check, Comparative::ZERO);
        assert!(t.is_balanced(dec!(0.01)));
        assert!(t.is_prior_balanced(dec!(0.01)));

        assert_eq!(nested_total(&sheet.capital_and_reserves_debit_balances), dec!(-50));
        assert_eq!(nested_prior_year_total(&sheet.non_current_liabilities), dec!(600));
    }

    #[test]
    fn test_imbalance_is_reported_not_raised() {
        let entries = vec![
            bs("currentAssets", "Cash", dec!(100.02), dec!(100)),
            bs("currentLiabilities", "Trade creditors", dec!(-100), dec!(-100)),
        ];
        let sheet = BalanceSheet::from_entries(&entries);

        assert_eq!(sheet.totals.balance_check.current, dec!(0.02));
        assert!(!sheet.totals.is_balanced(dec!(0.01)));
        assert!(sheet.totals.is_prior_balanced(dec!(0.01)));
    }

    #[test]
    fn test_zero_items_hidden_but_totals_unchanged() {
        let entries = vec![
            bs("currentAssets", "Cash", dec!(75), dec!(0)),
            bs("currentAssets", "Petty cash", dec!(10), dec!(0)),
            bs("currentAssets", "Petty cash", dec!(-10), dec!(0)),
        ];
        let sheet = BalanceSheet::from_entries(&entries);

        assert_eq!(sheet.current_assets.len(), 2);
        let visible: Vec<_> = sheet
            .current_assets
            .visible_items()
            .map(|i| i.sars_item.as_str())
            .collect();
        assert_eq!(visible, vec!["Cash"]);
        assert_eq!(sheet.current_assets.total(), sheet.current_assets.visible_total());
        assert_eq!(sheet.totals.total_assets.current, dec!(75));
    }

    #[test]
    fn test_find_reports_bucket() {
        let entries = vec![bs("nonCurrentLiabilities", "Bond", dec!(-10), dec!(0))];
        let sheet = BalanceSheet::from_entries(&entries);
        let (bucket, item) = sheet.find("Bond").unwrap();
        assert_eq!(bucket, BalanceSheetBucket::NonCurrentLiabilities);
        assert_eq!(item.amount, dec!(10));
    }

    #[test]
    fn test_idempotent() {
        let entries = vec![
            bs("currentAssets", "Cash", dec!(10.5), dec!(3)),
            bs("mystery", "Suspense", dec!(1), dec!(0)),
            bs("currentLiabilities", "VAT", dec!(-4), dec!(-1)),
        ];
        let snapshot = entries.clone();

        let first = BalanceSheet::from_entries(&entries);
        let second = BalanceSheet::from_entries(&entries);

        assert_eq!(first, second);
        assert_eq!(entries, snapshot);
    }
}
