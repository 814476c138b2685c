//! Calculation breakdown formatting.

use std::str::FromStr;

use ledgerview_shared::AmountFormatter;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a computed amount was derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationDetails {
    /// Method key, e.g. "straight_line".
    pub method: String,
    /// Named inputs to the calculation.
    #[serde(default)]
    pub inputs: serde_json::Map<String, Value>,
    /// Formula as written, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

impl CalculationDetails {
    /// Method heading: underscores become spaces, upper-cased.
    #[must_use]
    pub fn method_title(&self) -> String {
        self.method.replace('_', " ").to_uppercase()
    }

    /// Inputs as `(label, value)` pairs ready for display.
    pub fn input_rows(&self, formatter: &impl AmountFormatter) -> Vec<(String, String)> {
        self.inputs
            .iter()
            .map(|(key, value)| (humanize_key(key), render_input(value, formatter)))
            .collect()
    }
}

/// Splits a camelCase key into words: a space goes before every capital.
#[must_use]
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(ch);
    }
    out.trim().to_string()
}

/// Renders one input value.
///
/// Numbers go through `formatter`, booleans read Yes/No, objects, arrays and
/// null are shown as pretty JSON, and strings are shown as-is.
pub fn render_input(value: &Value, formatter: &impl AmountFormatter) -> String {
    match value {
        Value::Number(n) => {
            let text = n.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .map_or(text, |amount| formatter.format_amount(amount))
        }
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) | Value::Null => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
    }
}
