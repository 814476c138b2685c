//! Income statement aggregation.

use serde::{Deserialize, Serialize};

use crate::ledger::{LedgerEntry, Section};

use super::classify::{Classification, GroupedItem, SubsectionMatch, group_section};
use super::types::{Bucket, Comparative, IncomeLineItem, LineItem};
use super::warnings::Warning;

const REVENUE_MARKER: &str = "Sales";
const CREDIT_NOTE_MARKER: &str = "Credit notes";

/// The four income statement buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IncomeStatementBucket {
    /// Revenue and cost of sales.
    GrossProfitOrLoss,
    /// Other income carried as credit amounts.
    IncomeItemsCreditAmounts,
    /// Other income carried only as credit amounts.
    IncomeItemsOnlyCreditAmounts,
    /// Operating expenses.
    ExpenseItemsDebitAmounts,
}

impl IncomeStatementBucket {
    /// All buckets in statement order.
    pub const ALL: [Self; 4] = [
        Self::GrossProfitOrLoss,
        Self::IncomeItemsCreditAmounts,
        Self::IncomeItemsOnlyCreditAmounts,
        Self::ExpenseItemsDebitAmounts,
    ];

    /// Maps a subsection to its bucket. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_subsection(subsection: &str) -> Option<Self> {
        match subsection {
            "grossProfitOrLoss" => Some(Self::GrossProfitOrLoss),
            "incomeItemsCreditAmounts" => Some(Self::IncomeItemsCreditAmounts),
            "incomeItemsOnlyCreditAmounts" => Some(Self::IncomeItemsOnlyCreditAmounts),
            "expenseItemsDebitAmounts" => Some(Self::ExpenseItemsDebitAmounts),
            _ => None,
        }
    }

    /// Subsection key as it appears in ledger data.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::GrossProfitOrLoss => "grossProfitOrLoss",
            Self::IncomeItemsCreditAmounts => "incomeItemsCreditAmounts",
            Self::IncomeItemsOnlyCreditAmounts => "incomeItemsOnlyCreditAmounts",
            Self::ExpenseItemsDebitAmounts => "expenseItemsDebitAmounts",
        }
    }
}

/// Returns true if `sars_item` is a revenue line within gross profit.
#[must_use]
pub fn is_revenue_item(sars_item: &str) -> bool {
    sars_item.contains(REVENUE_MARKER) && !sars_item.contains(CREDIT_NOTE_MARKER)
}

/// Derived income statement totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatementTotals {
    /// Sum of absolute revenue amounts.
    pub total_income: Comparative,
    /// Signed sum of the non-revenue gross profit items.
    pub cost_of_sales: Comparative,
    /// Negated signed sum of the whole gross profit bucket.
    pub gross_profit: Comparative,
    /// Sum of absolute amounts over both other-income buckets.
    pub other_income: Comparative,
    /// Sum of absolute expense amounts.
    pub expenses: Comparative,
    /// Gross profit plus other income less expenses.
    pub net_profit_before_tax: Comparative,
}

/// Income statement built from classified ledger entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    /// Revenue and cost of sales items, signed as recorded.
    pub gross_profit_or_loss: Bucket<IncomeLineItem>,
    /// Other income (credit amounts).
    pub income_items_credit_amounts: Bucket<IncomeLineItem>,
    /// Other income (only credit amounts).
    pub income_items_only_credit_amounts: Bucket<IncomeLineItem>,
    /// Operating expenses.
    pub expense_items_debit_amounts: Bucket<IncomeLineItem>,
    /// Derived totals.
    pub totals: IncomeStatementTotals,
    /// Data-quality warnings.
    pub warnings: Vec<Warning>,
}

impl IncomeStatement {
    /// Builds the income statement from `entries`.
    ///
    /// Items whose subsection is not one of the four known keys are dropped
    /// from every total and reported.
    #[must_use]
    pub fn from_entries(entries: &[LedgerEntry]) -> Self {
        let (grouped, mut warnings) =
            group_section(entries, Section::IncomeStatement, SubsectionMatch::Exact);

        let mut statement = Self::default();
        for item in grouped {
            let classification = Classification::new(
                IncomeStatementBucket::from_subsection(item.subsection),
                item,
            );
            match classification {
                Classification::Bucketed(bucket, item) => statement.place(bucket, &item),
                Classification::Unclassified(item) => {
                    let warning = Warning::DroppedIncomeItem {
                        sars_item: item.sars_item.to_string(),
                        subsection: item.subsection.to_string(),
                    };
                    tracing::warn!(%warning, "unknown income statement subsection");
                    warnings.push(warning);
                }
            }
        }

        statement.totals = statement.compute_totals();
        statement.warnings = warnings;

        tracing::debug!(
            net_profit_before_tax = %statement.totals.net_profit_before_tax.current,
            "income statement aggregated"
        );
        statement
    }

    /// Returns the bucket's line items.
    #[must_use]
    pub fn bucket(&self, bucket: IncomeStatementBucket) -> &Bucket<IncomeLineItem> {
        match bucket {
            IncomeStatementBucket::GrossProfitOrLoss => &self.gross_profit_or_loss,
            IncomeStatementBucket::IncomeItemsCreditAmounts => &self.income_items_credit_amounts,
            IncomeStatementBucket::IncomeItemsOnlyCreditAmounts => {
                &self.income_items_only_credit_amounts
            }
            IncomeStatementBucket::ExpenseItemsDebitAmounts => &self.expense_items_debit_amounts,
        }
    }

    fn bucket_mut(&mut self, bucket: IncomeStatementBucket) -> &mut Bucket<IncomeLineItem> {
        match bucket {
            IncomeStatementBucket::GrossProfitOrLoss => &mut self.gross_profit_or_loss,
            IncomeStatementBucket::IncomeItemsCreditAmounts => {
                &mut self.income_items_credit_amounts
            }
            IncomeStatementBucket::IncomeItemsOnlyCreditAmounts => {
                &mut self.income_items_only_credit_amounts
            }
            IncomeStatementBucket::ExpenseItemsDebitAmounts => {
                &mut self.expense_items_debit_amounts
            }
        }
    }

    /// Revenue lines of the gross profit bucket.
    pub fn revenue_items(&self) -> impl Iterator<Item = &IncomeLineItem> {
        self.gross_profit_or_loss
            .iter()
            .filter(|item| is_revenue_item(&item.sars_item))
    }

    /// Cost of sales lines: everything in gross profit that is not revenue.
    pub fn cost_of_sales_items(&self) -> impl Iterator<Item = &IncomeLineItem> {
        self.gross_profit_or_loss
            .iter()
            .filter(|item| !is_revenue_item(&item.sars_item))
    }

    /// Lines from both other-income buckets, credit amounts first.
    pub fn other_income_items(&self) -> impl Iterator<Item = &IncomeLineItem> {
        self.income_items_credit_amounts
            .iter()
            .chain(self.income_items_only_credit_amounts.iter())
    }

    fn place(&mut self, bucket: IncomeStatementBucket, item: &GroupedItem<'_>) {
        self.bucket_mut(bucket).push(IncomeLineItem {
            sars_item: item.sars_item.to_string(),
            subsection: item.subsection.to_string(),
            current: item.amounts.current,
            prior: item.amounts.prior,
        });
    }

    fn compute_totals(&self) -> IncomeStatementTotals {
        let total_income: Comparative = self.revenue_items().map(|i| i.amounts().abs()).sum();
        let cost_of_sales: Comparative = self.cost_of_sales_items().map(LineItem::amounts).sum();
        let gross_profit = -self.gross_profit_or_loss.total();
        let other_income: Comparative = self.other_income_items().map(|i| i.amounts().abs()).sum();
        let expenses: Comparative = self
            .expense_items_debit_amounts
            .iter()
            .map(|i| i.amounts().abs())
            .sum();

        IncomeStatementTotals {
            total_income,
            cost_of_sales,
            gross_profit,
            other_income,
            expenses,
            net_profit_before_tax: gross_profit + other_income - expenses,
        }
    }
}
