//! Subcommands.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use serde::Serialize;

use ledgerview_core::ledger::{LedgerEntry, read_entries};
use ledgerview_core::reports::layout::{self, ColumnHeader, StatementRow};
use ledgerview_core::reports::{ReportService, Warning};
use ledgerview_shared::{AppConfig, AppError, CurrencyFormatter};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the balance sheet
    BalanceSheet(StatementArgs),
    /// Print the income statement
    IncomeStatement(StatementArgs),
    /// Print both statements
    All(StatementArgs),
}

#[derive(Args, Debug)]
pub struct StatementArgs {
    /// JSON or CSV file of classified ledger entries
    #[arg(short, long)]
    input: PathBuf,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,

    /// List data-quality warnings after the statement
    #[arg(long)]
    show_warnings: bool,

    /// Financial year end used to caption the amount columns (YYYY-MM-DD)
    #[arg(long)]
    year_end: Option<NaiveDate>,
}

impl Command {
    pub fn exec(&self, config: &AppConfig) -> anyhow::Result<()> {
        let (Self::BalanceSheet(args) | Self::IncomeStatement(args) | Self::All(args)) = self;
        let entries = load(&args.input)?;
        let tolerance = config.report.balance_tolerance;

        let mut out = std::io::stdout().lock();
        let written = match self {
            Self::BalanceSheet(_) => {
                let sheet = ReportService::generate_balance_sheet(&entries);
                if !sheet.totals.is_balanced(tolerance) {
                    tracing::warn!(
                        balance_check = %sheet.totals.balance_check.current,
                        %tolerance,
                        "balance sheet does not balance"
                    );
                }
                let rows = layout::balance_sheet_rows(&sheet, tolerance);
                let warnings: Vec<&Warning> = sheet.warnings.iter().collect();
                args.write(&mut out, config, &sheet, &[rows], &warnings)
            }
            Self::IncomeStatement(_) => {
                let statement = ReportService::generate_income_statement(&entries);
                let rows = layout::income_statement_rows(&statement);
                let warnings: Vec<&Warning> = statement.warnings.iter().collect();
                args.write(&mut out, config, &statement, &[rows], &warnings)
            }
            Self::All(_) => {
                let statements = ReportService::generate(&entries);
                let rows = [
                    layout::balance_sheet_rows(&statements.balance_sheet, tolerance),
                    layout::income_statement_rows(&statements.income_statement),
                ];
                let warnings = statements.all_warnings();
                args.write(&mut out, config, &statements, &rows, &warnings)
            }
        };

        written.map_err(|err| AppError::Output(err.to_string()))?;
        Ok(())
    }
}

impl StatementArgs {
    fn write<T: Serialize>(
        &self,
        out: &mut impl Write,
        config: &AppConfig,
        report: &T,
        statements: &[Vec<StatementRow>],
        warnings: &[&Warning],
    ) -> std::io::Result<()> {
        if self.json {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
            return Ok(());
        }

        let header = ColumnHeader::new(self.year_end, config.report.currency);
        let formatter = CurrencyFormatter::new(config.report.currency);

        if let Some(name) = &config.report.entity_name {
            writeln!(out, "{name}\n")?;
        }
        for (i, rows) in statements.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            write!(out, "{}", layout::render_text(rows, &header, &formatter))?;
        }

        if self.show_warnings && !warnings.is_empty() {
            writeln!(out, "\nWarnings:")?;
            for warning in warnings {
                writeln!(out, "  - {warning}")?;
            }
        }
        Ok(())
    }
}

fn load(path: &Path) -> anyhow::Result<Vec<LedgerEntry>> {
    let entries = read_entries(path)
        .map_err(AppError::from)
        .with_context(|| format!("failed to read ledger from {}", path.display()))?;
    tracing::info!(path = %path.display(), entries = entries.len(), "ledger loaded");
    Ok(entries)
}
