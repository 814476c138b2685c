//! Core statement logic for Ledgerview.
//!
//! This crate turns a flat list of classified ledger entries into financial
//! statements. Aggregation is pure: every call recomputes from the borrowed
//! input and never fails.
//!
//! # Modules
//!
//! - `ledger` - Ledger entry model and JSON/CSV readers
//! - `reports` - Balance sheet and income statement aggregation and layout
//! - `widgets` - Status badges, access gating, calculation and extraction helpers

pub mod ledger;
pub mod reports;
pub mod widgets;
