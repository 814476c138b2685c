//! Financial statement generation.
//!
//! Both statements are pure functions of a borrowed slice of
//! [`LedgerEntry`](crate::ledger::LedgerEntry) values:
//! - Balance Sheet (six signed buckets, equity folded with the year's result)
//! - Income Statement (gross profit, other income, expenses)
//!
//! Aggregation never fails. Input it cannot place is tolerated and recorded
//! as a [`Warning`].

pub mod balance_sheet;
pub mod classify;
pub mod income_statement;
pub mod layout;
pub mod service;
pub mod types;
pub mod warnings;


pub use balance_sheet::{BalanceSheet, BalanceSheetBucket, BalanceSheetTotals};
pub use classify::Classification;
pub use income_statement::{IncomeStatement, IncomeStatementBucket, IncomeStatementTotals, is_revenue_item};
pub use layout::{ColumnHeader, RowKind, StatementRow};
pub use service::{FinancialStatements, ReportService, SectionTotals};
pub use types::*;
pub use warnings::Warning;
