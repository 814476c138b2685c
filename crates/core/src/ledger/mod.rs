//! Classified ledger entries.
//!
//! This module implements the statement input contract:
//! - Ledger entries tagged with section, subsection and SARS item
//! - Section parsing (balance sheet vs income statement)
//! - JSON and CSV readers
//! - Error types for reading entries

pub mod entry;
pub mod error;
pub mod import;

pub use entry::{LedgerEntry, Section};
pub use error::LedgerError;
pub use import::{InputFormat, read_entries, read_entries_csv, read_entries_json};
