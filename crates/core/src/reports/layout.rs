//! Row layout and text rendering for both statements.
//!
//! Layout turns an aggregate into ordered [`StatementRow`]s holding true
//! signed numbers. Rendering is a separate step that applies an
//! [`AmountFormatter`], so JSON consumers and the text view share one layout.

use chrono::{Months, NaiveDate};
use ledgerview_shared::{AmountFormatter, Currency};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tabled::builder::Builder;
use tabled::settings::{Alignment, Modify, Style, object::Columns};

use super::balance_sheet::{BalanceSheet, BalanceSheetBucket};
use super::income_statement::IncomeStatement;
use super::types::{AggregatedLineItem, Bucket, Comparative, IncomeLineItem, LineItem};

/// Visual role of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum RowKind {
    /// Statement title.
    Title,
    /// Major section heading.
    Heading,
    /// Subsection heading.
    Subheading,
    /// Line item.
    Line,
    /// Subtotal or total.
    Total,
    /// Balance check against tolerance.
    Check {
        /// Whether the check is within tolerance.
        balanced: bool,
    },
}

/// One rendered row. `None` amounts render blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRow {
    /// Row label.
    pub label: String,
    /// Current-year amount.
    pub current: Option<Decimal>,
    /// Prior-year amount.
    pub prior: Option<Decimal>,
    /// Row role.
    #[serde(flatten)]
    pub kind: RowKind,
}

impl StatementRow {
    fn text(label: impl Into<String>, kind: RowKind) -> Self {
        Self {
            label: label.into(),
            current: None,
            prior: None,
            kind,
        }
    }

    fn amounts(label: impl Into<String>, amounts: Comparative, kind: RowKind) -> Self {
        Self {
            label: label.into(),
            current: Some(amounts.current),
            prior: Some(amounts.prior),
            kind,
        }
    }

    /// Balance sheet line: zero columns are left blank.
    fn sparse_line(label: impl Into<String>, amounts: Comparative) -> Self {
        let non_zero = |value: Decimal| (!value.is_zero()).then_some(value);
        Self {
            label: label.into(),
            current: non_zero(amounts.current),
            prior: non_zero(amounts.prior),
            kind: RowKind::Line,
        }
    }
}

/// Column captions for the current and prior year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    /// Current-year caption.
    pub current: String,
    /// Prior-year caption.
    pub prior: String,
}

impl ColumnHeader {
    /// Builds captions from an optional financial year end.
    ///
    /// Without a year end the columns are labelled generically.
    #[must_use]
    pub fn new(year_end: Option<NaiveDate>, currency: Currency) -> Self {
        let symbol = currency.symbol();
        match year_end {
            Some(date) => {
                let prior = date
                    .checked_sub_months(Months::new(12))
                    .map_or_else(|| "Prior Year".to_string(), |d| d.format("%d %b %Y").to_string());
                Self {
                    current: format!("{} ({symbol})", date.format("%d %b %Y")),
                    prior: format!("{prior} ({symbol})"),
                }
            }
            None => Self {
                current: format!("Current Year ({symbol})"),
                prior: format!("Prior Year ({symbol})"),
            },
        }
    }
}

/// Renders an optional amount: blank for `None`, parentheses for negatives.
pub fn display_signed(amount: Option<Decimal>, formatter: &impl AmountFormatter) -> String {
    amount.map_or_else(String::new, |value| formatter.format_accounting(value))
}

/// Lays out a balance sheet.
///
/// Subsection subtotals cover visible items only; `tolerance` decides
/// whether the balance check row is flagged.
#[must_use]
pub fn balance_sheet_rows(sheet: &BalanceSheet, tolerance: Decimal) -> Vec<StatementRow> {
    let totals = &sheet.totals;
    let mut rows = vec![StatementRow::text("BALANCE SHEET", RowKind::Title)];

    rows.push(StatementRow::text("ASSETS", RowKind::Heading));
    push_balance_bucket(&mut rows, sheet, BalanceSheetBucket::NonCurrentAssets);
    push_balance_bucket(&mut rows, sheet, BalanceSheetBucket::CurrentAssets);
    rows.push(StatementRow::amounts("TOTAL ASSETS", totals.total_assets, RowKind::Total));

    rows.push(StatementRow::text("EQUITY & RESERVES", RowKind::Heading));
    rows.push(StatementRow::text(
        BalanceSheetBucket::CapitalAndReservesCreditBalances.title(),
        RowKind::Subheading,
    ));
    rows.extend(
        sheet
            .capital_and_reserves_credit_balances
            .visible_items()
            .map(|item| StatementRow::sparse_line(&item.sars_item, item.amounts())),
    );
    let debit_balances = &sheet.capital_and_reserves_debit_balances;
    if debit_balances.visible_items().next().is_some() {
        rows.push(StatementRow::text(
            BalanceSheetBucket::CapitalAndReservesDebitBalances.title(),
            RowKind::Subheading,
        ));
        rows.extend(
            debit_balances
                .visible_items()
                .map(|item| StatementRow::sparse_line(&item.sars_item, item.amounts())),
        );
    }
    rows.push(StatementRow::sparse_line(
        "Current Year Net Profit",
        totals.current_year_net_profit(),
    ));
    rows.push(StatementRow::amounts(
        "Total Equity & Reserves",
        totals.total_capital_and_reserves,
        RowKind::Total,
    ));

    rows.push(StatementRow::text("LIABILITIES", RowKind::Heading));
    push_balance_bucket(&mut rows, sheet, BalanceSheetBucket::NonCurrentLiabilities);
    push_balance_bucket(&mut rows, sheet, BalanceSheetBucket::CurrentLiabilities);
    rows.push(StatementRow::amounts(
        "TOTAL LIABILITIES",
        totals.total_liabilities,
        RowKind::Total,
    ));

    rows.push(StatementRow::amounts(
        "TOTAL EQUITY & LIABILITIES",
        totals.total_reserves_and_liabilities,
        RowKind::Total,
    ));
    rows.push(StatementRow::amounts(
        "Balance Check (should be zero)",
        totals.balance_check,
        RowKind::Check {
            balanced: totals.is_balanced(tolerance) && totals.is_prior_balanced(tolerance),
        },
    ));
    rows
}

fn push_balance_bucket(rows: &mut Vec<StatementRow>, sheet: &BalanceSheet, bucket: BalanceSheetBucket) {
    let items: &Bucket<AggregatedLineItem> = sheet.bucket(bucket);
    rows.push(StatementRow::text(bucket.title(), RowKind::Subheading));
    rows.extend(
        items
            .visible_items()
            .map(|item| StatementRow::sparse_line(&item.sars_item, item.amounts())),
    );
    rows.push(StatementRow::amounts(
        format!("Total {}", bucket.title()),
        items.visible_total(),
        RowKind::Total,
    ));
}

/// Lays out an income statement. Line items are shown as absolute values.
#[must_use]
pub fn income_statement_rows(statement: &IncomeStatement) -> Vec<StatementRow> {
    let totals = &statement.totals;
    let mut rows = vec![StatementRow::text("INCOME STATEMENT", RowKind::Title)];

    push_income_section(&mut rows, "REVENUE & SALES", statement.revenue_items());
    rows.push(StatementRow::amounts("Total Revenue", totals.total_income, RowKind::Total));

    push_income_section(&mut rows, "COST OF SALES", statement.cost_of_sales_items());
    rows.push(StatementRow::amounts(
        "Total Cost of Sales",
        totals.cost_of_sales,
        RowKind::Total,
    ));

    rows.push(StatementRow::amounts(
        "GROSS PROFIT / (LOSS)",
        totals.gross_profit,
        RowKind::Total,
    ));

    push_income_section(&mut rows, "OTHER INCOME", statement.other_income_items());
    rows.push(StatementRow::amounts(
        "Total Other Income",
        totals.other_income,
        RowKind::Total,
    ));

    push_income_section(
        &mut rows,
        "OPERATING EXPENSES",
        statement.expense_items_debit_amounts.iter(),
    );
    rows.push(StatementRow::amounts(
        "Total Operating Expenses",
        totals.expenses,
        RowKind::Total,
    ));

    rows.push(StatementRow::amounts(
        "NET PROFIT / (LOSS) BEFORE TAX",
        totals.net_profit_before_tax,
        RowKind::Total,
    ));
    rows
}

fn push_income_section<'a>(
    rows: &mut Vec<StatementRow>,
    heading: &str,
    items: impl Iterator<Item = &'a IncomeLineItem>,
) {
    rows.push(StatementRow::text(heading, RowKind::Heading));
    rows.extend(
        items.map(|item| StatementRow::amounts(&item.sars_item, item.amounts().abs(), RowKind::Line)),
    );
}

/// Renders rows as a borderless text table under the statement title.
///
/// Amount columns are right-aligned; labels are indented by row kind.
pub fn render_text(
    rows: &[StatementRow],
    header: &ColumnHeader,
    formatter: &impl AmountFormatter,
) -> String {
    let mut out = String::new();
    let mut builder = Builder::default();
    builder.push_record([String::new(), header.current.clone(), header.prior.clone()]);

    for row in rows {
        let label = match row.kind {
            RowKind::Title => {
                out.push_str(&row.label);
                out.push('\n');
                continue;
            }
            RowKind::Heading => {
                builder.push_record([String::new(), String::new(), String::new()]);
                row.label.clone()
            }
            RowKind::Subheading => format!("  {}", row.label),
            RowKind::Line => format!("    {}", row.label),
            RowKind::Total => row.label.clone(),
            RowKind::Check { balanced } => {
                builder.push_record([String::new(), String::new(), String::new()]);
                if balanced {
                    row.label.clone()
                } else {
                    format!("{}  OUT OF BALANCE", row.label)
                }
            }
        };
        builder.push_record([
            label,
            display_signed(row.current, formatter),
            display_signed(row.prior, formatter),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::blank())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));

    for line in table.to_string().lines() {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
