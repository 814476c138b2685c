//! Currency and amount formatting with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` end to end; formatting is the last step.

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Formatter, Money, Params, Position, iso};
use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes supported for statement headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// South African Rand
    #[default]
    Zar,
    /// US Dollar
    Usd,
    /// Euro
    Eur,
    /// British Pound
    Gbp,
}

impl Currency {
    /// Returns the display symbol used in column headers.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Zar => "R",
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Zar => write!(f, "ZAR"),
            Self::Usd => write!(f, "USD"),
            Self::Eur => write!(f, "EUR"),
            Self::Gbp => write!(f, "GBP"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ZAR" => Ok(Self::Zar),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

/// Formats a signed amount for display.
///
/// Implementations receive true signed numbers; presentation decides how
/// negatives are shown.
pub trait AmountFormatter {
    /// Formats `amount` as text.
    fn format_amount(&self, amount: Decimal) -> String;

    /// Formats `amount` using the accounting convention: negatives are shown
    /// as the parenthesized absolute value.
    ///
    /// The sign is read from the formatted text, so an amount that rounds to
    /// zero is never parenthesized.
    fn format_accounting(&self, amount: Decimal) -> String {
        let shown = self.format_amount(amount);
        match shown.strip_prefix('-') {
            Some(abs) => format!("({abs})"),
            None => shown,
        }
    }
}

/// Two-decimal formatter with thousands separators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurrencyFormatter {
    /// Currency the amounts are denominated in.
    pub currency: Currency,
}

impl CurrencyFormatter {
    /// Creates a formatter for the given currency.
    #[must_use]
    pub const fn new(currency: Currency) -> Self {
        Self { currency }
    }

    fn params() -> Params {
        Params {
            digit_separator: ',',
            exponent_separator: '.',
            separator_pattern: vec![3; 12],
            positions: vec![Position::Sign, Position::Amount],
            rounding: Some(2),
            ..Default::default()
        }
    }
}

impl AmountFormatter for CurrencyFormatter {
    fn format_amount(&self, amount: Decimal) -> String {
        let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            rounded = Decimal::ZERO;
        }
        rounded.rescale(2);

        match iso::find(&self.currency.to_string()) {
            Some(currency) => Formatter::money(&Money::from_decimal(rounded, currency), Self::params()),
            None => format!("{rounded:.2}"),
        }
    }
}
