//! End-to-end tests for the ledgerview binary.

use std::process::{Command, Output};

fn ledgerview(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ledgerview"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .args(["--config", "../../config"])
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("RUN_MODE")
        .env_remove("LEDGERVIEW__REPORT__CURRENCY")
        .env_remove("LEDGERVIEW__REPORT__ENTITY_NAME")
        .env_remove("LEDGERVIEW__REPORT__BALANCE_TOLERANCE")
        .output()
        .expect("Failed to execute ledgerview")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(output.status.success(), "Command failed: {output:?}");
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

/// Test the balance sheet text layout for a balanced ledger
#[test]
fn balance_sheet_text() {
    let output = ledgerview(&["balance-sheet", "-i", "tests/data/ledger.json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {output:?}");
    assert!(stdout.starts_with("BALANCE SHEET"));
    assert!(stdout.contains("Current Year (R)"));
    assert!(stdout.contains("ASSETS"));
    assert!(stdout.contains("EQUITY & RESERVES"));
    assert!(stdout.contains("TOTAL EQUITY & LIABILITIES"));
    assert!(stdout.contains("1,500.00"));
    assert!(stdout.contains("Balance Check (should be zero)"));
    assert!(!stdout.contains("OUT OF BALANCE"));
    // zero-valued items are hidden
    assert!(!stdout.contains("Petty cash"));
}

/// Test balance sheet totals in JSON output
#[test]
fn balance_sheet_json() {
    let json = stdout_json(&ledgerview(&["balance-sheet", "-i", "tests/data/ledger.json", "--json"]));
    let totals = &json["totals"];

    assert_eq!(totals["totalAssets"]["current"], "1500");
    assert_eq!(totals["profitLoss"]["current"], "-200");
    assert_eq!(totals["totalCapitalAndReserves"]["current"], "850");
    assert_eq!(totals["totalCapitalAndReserves"]["prior"], "700");
    assert_eq!(totals["balanceCheck"]["current"], "0");
    assert_eq!(totals["balanceCheck"]["prior"], "0");
    assert_eq!(json["currentLiabilities"][0]["amount"], "250");
}

/// Test income statement totals in JSON output
#[test]
fn income_statement_json() {
    let json = stdout_json(&ledgerview(&["income-statement", "-i", "tests/data/ledger.json", "--json"]));
    let totals = &json["totals"];

    assert_eq!(totals["totalIncome"]["current"], "1000");
    assert_eq!(totals["costOfSales"]["current"], "350");
    assert_eq!(totals["grossProfit"]["current"], "650");
    assert_eq!(totals["grossProfit"]["prior"], "530");
    assert_eq!(totals["netProfitBeforeTax"]["current"], "200");
    assert_eq!(totals["netProfitBeforeTax"]["prior"], "100");
}

/// Test CSV input with fallbacks and warnings listed
#[test]
fn csv_input_with_warnings() {
    let output = ledgerview(&["all", "-i", "tests/data/ledger.csv", "--show-warnings"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {output:?}");
    assert!(stdout.contains("INCOME STATEMENT"));
    assert!(stdout.contains("Suspense account"));
    assert!(stdout.contains("OUT OF BALANCE"));
    assert!(stdout.contains("Warnings:"));
    assert!(stdout.contains("'Memo' has unknown section 'Notes'"));
    assert!(stdout.contains("'Suspense account' has unknown subsection 'mystery'"));
    assert!(stdout.contains("'Sundry income' has unknown subsection 'otherStuff'"));
}

/// Test the year end captions on the amount columns
#[test]
fn year_end_captions() {
    let output = ledgerview(&[
        "income-statement",
        "-i",
        "tests/data/ledger.json",
        "--year-end",
        "2025-02-28",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {output:?}");
    assert!(stdout.contains("28 Feb 2025 (R)"));
    assert!(stdout.contains("28 Feb 2024 (R)"));
    assert!(stdout.contains("NET PROFIT / (LOSS) BEFORE TAX"));
}

/// Test that unreadable input fails with a sysexits code
#[test]
fn missing_and_unsupported_input() {
    let missing = ledgerview(&["balance-sheet", "-i", "tests/data/nope.json"]);
    assert_eq!(missing.status.code(), Some(66));
    assert!(String::from_utf8_lossy(&missing.stderr).contains("failed to read ledger"));

    let unsupported = ledgerview(&["balance-sheet", "-i", "Cargo.toml"]);
    assert_eq!(unsupported.status.code(), Some(65));
}
