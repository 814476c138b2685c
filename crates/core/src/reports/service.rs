//! Statement generation service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{LedgerEntry, Section};

use super::balance_sheet::BalanceSheet;
use super::income_statement::IncomeStatement;
use super::warnings::Warning;

/// Both statements built from one ledger, plus warnings about the input as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialStatements {
    /// Balance sheet.
    pub balance_sheet: BalanceSheet,
    /// Income statement.
    pub income_statement: IncomeStatement,
    /// Entries excluded because their section is unknown.
    pub warnings: Vec<Warning>,
}

impl FinancialStatements {
    /// Every warning from both statements and the input, deduplicated, in report order.
    #[must_use]
    pub fn all_warnings(&self) -> Vec<&Warning> {
        let mut all: Vec<&Warning> = Vec::new();
        for warning in self
            .warnings
            .iter()
            .chain(&self.balance_sheet.warnings)
            .chain(&self.income_statement.warnings)
        {
            if !all.contains(&warning) {
                all.push(warning);
            }
        }
        all
    }
}

/// Raw per-section sums of a ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionTotals {
    /// Sum of balance sheet balances.
    pub balance_sheet_total: Decimal,
    /// Sum of income statement balances.
    pub income_statement_total: Decimal,
    /// Sum of income statement prior-year balances.
    pub income_statement_prior_year_total: Decimal,
}

/// Service for generating financial statements.
pub struct ReportService;

impl ReportService {
    /// Generates a balance sheet.
    #[must_use]
    pub fn generate_balance_sheet(entries: &[LedgerEntry]) -> BalanceSheet {
        BalanceSheet::from_entries(entries)
    }

    /// Generates an income statement.
    #[must_use]
    pub fn generate_income_statement(entries: &[LedgerEntry]) -> IncomeStatement {
        IncomeStatement::from_entries(entries)
    }

    /// Generates both statements and reports entries belonging to neither.
    #[must_use]
    pub fn generate(entries: &[LedgerEntry]) -> FinancialStatements {
        let warnings = Self::unknown_sections(entries);

        tracing::info!(
            entries = entries.len(),
            excluded = warnings.len(),
            "generating financial statements"
        );

        FinancialStatements {
            balance_sheet: Self::generate_balance_sheet(entries),
            income_statement: Self::generate_income_statement(entries),
            warnings,
        }
    }

    /// Sums balances per section without any bucketing.
    #[must_use]
    pub fn profit_and_loss_totals(entries: &[LedgerEntry]) -> SectionTotals {
        entries
            .iter()
            .fold(SectionTotals::default(), |mut totals, entry| {
                match entry.section_kind() {
                    Some(Section::BalanceSheet) => totals.balance_sheet_total += entry.balance,
                    Some(Section::IncomeStatement) => {
                        totals.income_statement_total += entry.balance;
                        totals.income_statement_prior_year_total += entry.prior_year_balance;
                    }
                    None => {}
                }
                totals
            })
    }

    fn unknown_sections(entries: &[LedgerEntry]) -> Vec<Warning> {
        entries
            .iter()
            .filter(|entry| entry.section_kind().is_none())
            .map(|entry| {
                let warning = Warning::UnknownSection {
                    section: entry.section.clone(),
                    sars_item: entry.sars_item.clone(),
                };
                tracing::debug!(%warning, "entry excluded");
                warning
            })
            .collect()
    }
}
