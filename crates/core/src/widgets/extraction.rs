//! Document extraction results.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Confidence band of an extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    /// Below 0.6.
    Low,
    /// From 0.6 up to 0.8.
    Medium,
    /// 0.8 and above.
    High,
}

impl ConfidenceLevel {
    /// Bands a score in `0..=1`.
    #[must_use]
    pub fn from_score(score: Decimal) -> Self {
        if score >= dec!(0.8) {
            Self::High
        } else if score >= dec!(0.6) {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Structured data extracted from an uploaded document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedData {
    /// Detected document type.
    pub document_type: String,
    /// Short summary of the document.
    pub summary: String,
    /// Extracted fields.
    #[serde(default)]
    pub structured_data: serde_json::Map<String, serde_json::Value>,
    /// Extraction confidence in `0..=1`.
    pub confidence: Decimal,
    /// Issues raised during extraction.
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl ExtractedData {
    /// Confidence band.
    #[must_use]
    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_score(self.confidence)
    }

    /// Confidence as a whole percentage, halves rounded up.
    #[must_use]
    pub fn percent(&self) -> Decimal {
        (self.confidence * dec!(100))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
    }

    /// Badge caption, e.g. "86% confidence".
    #[must_use]
    pub fn confidence_label(&self) -> String {
        format!("{}% confidence", self.percent())
    }

    /// Returns true if any warnings were raised.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(dec!(0.95), ConfidenceLevel::High)]
    #[case(dec!(0.8), ConfidenceLevel::High)]
    #[case(dec!(0.7999), ConfidenceLevel::Medium)]
    #[case(dec!(0.6), ConfidenceLevel::Medium)]
    #[case(dec!(0.59), ConfidenceLevel::Low)]
    #[case(dec!(0), ConfidenceLevel::Low)]
    fn test_confidence_level(#[case] score: Decimal, #[case] expected: ConfidenceLevel) {
        assert_eq!(ConfidenceLevel::from_score(score), expected);
    }

    #[test]
    fn test_deserialize_and_label() {
        let data: ExtractedData = serde_json::from_str(
            r#"{
                "documentType": "IRP5",
                "summary": "Employee tax certificate",
                "structuredData": {"grossIncome": 350000, "employer": "Acme"},
                "confidence": 0.855
            }"#,
        )
        .unwrap();

        assert_eq!(data.confidence_level(), ConfidenceLevel::High);
        assert_eq!(data.confidence_label(), "86% confidence");
        assert_eq!(data.structured_data["employer"], "Acme");
        assert!(!data.has_warnings());
    }

    #[test]
    fn test_percent_of_whole_score() {
        let data = ExtractedData {
            document_type: "Invoice".into(),
            summary: String::new(),
            structured_data: serde_json::Map::new(),
            confidence: dec!(1),
            warnings: vec!["Total not found".into()],
        };
        assert_eq!(data.percent(), dec!(100));
        assert_eq!(data.confidence_label(), "100% confidence");
        assert!(data.has_warnings());
    }
}
