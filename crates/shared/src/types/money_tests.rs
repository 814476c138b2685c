use super::money::{AmountFormatter, Currency, CurrencyFormatter};
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

#[test]
fn test_currency_display() {
    assert_eq!(format!("{}", Currency::Zar), "ZAR");
    assert_eq!(format!("{}", Currency::Usd), "USD");
    assert_eq!(format!("{}", Currency::Eur), "EUR");
    assert_eq!(format!("{}", Currency::Gbp), "GBP");
}

#[test]
fn test_currency_from_str() {
    assert_eq!(Currency::from_str("ZAR").unwrap(), Currency::Zar);
    assert_eq!(Currency::from_str("zar").unwrap(), Currency::Zar);
    assert_eq!(Currency::from_str("GBP").unwrap(), Currency::Gbp);
    assert!(Currency::from_str("INVALID").is_err());
}

#[test]
fn test_currency_symbol() {
    assert_eq!(Currency::default().symbol(), "R");
    assert_eq!(Currency::Usd.symbol(), "$");
}

#[rstest]
#[case(dec!(0), "0.00")]
#[case(dec!(5), "5.00")]
#[case(dec!(999.999), "1,000.00")]
#[case(dec!(1234.5), "1,234.50")]
#[case(dec!(1234567.891), "1,234,567.89")]
#[case(dec!(-1234.5), "-1,234.50")]
#[case(dec!(-0.001), "0.00")]
#[case(dec!(0.125), "0.13")]
#[case(dec!(1234567890123.4), "1,234,567,890,123.40")]
fn test_format_amount(#[case] amount: Decimal, #[case] expected: &str) {
    let formatter = CurrencyFormatter::new(Currency::Zar);
    assert_eq!(formatter.format_amount(amount), expected);
}

#[rstest]
#[case(dec!(250), "250.00")]
#[case(dec!(-250), "(250.00)")]
#[case(dec!(-1000000), "(1,000,000.00)")]
#[case(dec!(0), "0.00")]
#[case(dec!(-0.004), "0.00")]
#[case(dec!(-0.005), "(0.01)")]
fn test_format_accounting_parenthesizes_negatives(#[case] amount: Decimal, #[case] expected: &str) {
    let formatter = CurrencyFormatter::default();
    assert_eq!(formatter.format_accounting(amount), expected);
}

#[test]
fn test_format_amount_ignores_currency_symbol() {
    for currency in [Currency::Zar, Currency::Usd, Currency::Eur, Currency::Gbp] {
        assert_eq!(CurrencyFormatter::new(currency).format_amount(dec!(-42)), "-42.00");
    }
}
