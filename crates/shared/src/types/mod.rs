//! Common types used across the application.

pub mod money;

#[cfg(test)]
mod money_tests;

pub use money::{AmountFormatter, Currency, CurrencyFormatter};
