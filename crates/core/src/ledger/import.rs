//! JSON and CSV readers for ledger entries.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::entry::LedgerEntry;
use super::error::LedgerError;

/// Supported ledger file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// A JSON array of entries with camelCase keys.
    Json,
    /// A CSV file with a `section,subsection,sarsItem,balance,priorYearBalance` header.
    Csv,
}

impl InputFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, LedgerError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(LedgerError::UnsupportedFormat(if other.is_empty() {
                path.display().to_string()
            } else {
                other.to_string()
            })),
        }
    }
}

/// Reads entries from a file, choosing the reader by extension.
pub fn read_entries(path: &Path) -> Result<Vec<LedgerEntry>, LedgerError> {
    let format = InputFormat::from_path(path)?;
    let reader = BufReader::new(File::open(path)?);
    let entries = match format {
        InputFormat::Json => read_entries_json(reader)?,
        InputFormat::Csv => read_entries_csv(reader)?,
    };
    tracing::debug!(path = %path.display(), entries = entries.len(), "ledger entries loaded");
    Ok(entries)
}

/// Reads a JSON array of entries.
pub fn read_entries_json<R: Read>(reader: R) -> Result<Vec<LedgerEntry>, LedgerError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Reads entries from CSV with a header row.
///
/// `priorYearBalance`, `accountCode` and `accountName` columns are optional.
/// Only header names are trimmed; field values are kept verbatim, as the JSON
/// reader keeps them.
pub fn read_entries_csv<R: Read>(reader: R) -> Result<Vec<LedgerEntry>, LedgerError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    rdr.deserialize()
        .map(|record| record.map_err(LedgerError::from))
        .collect()
}
