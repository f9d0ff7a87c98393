//! Prediction records as returned by the service and persisted to history.

use serde::{Deserialize, Serialize};

/// One persisted prediction: a successfully predicted molecule.
///
/// All fields except `smiles` are optional; the service omits them when a
/// descriptor or depiction could not be computed. Field names match the
/// service's wire format, which is also the history slot encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// Input structure notation, opaque to this tool.
    pub smiles: String,

    /// Predicted log-solubility (logS).
    #[serde(default)]
    pub prediction: Option<f64>,

    /// Human-readable solubility, e.g. a concentration string.
    #[serde(default)]
    pub solubility: Option<String>,

    /// Qualitative class label as emitted by the service.
    #[serde(default)]
    pub solubility_class: Option<String>,

    /// URI of the rendered depiction, typically a `data:image/png` URI.
    #[serde(default)]
    pub image: Option<String>,
}

impl PredictionRecord {
    /// Display style bucket for this record's class label.
    pub fn bucket(&self) -> SolubilityBucket {
        SolubilityBucket::classify(self.solubility_class.as_deref())
    }
}

/// One entry of a batch response: either a prediction or a per-item error.
///
/// Error entries carry the original `smiles` plus a message and are shown
/// in the current-results view but never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    #[serde(default)]
    pub smiles: String,

    #[serde(default)]
    pub prediction: Option<f64>,

    #[serde(default)]
    pub solubility: Option<String>,

    #[serde(default)]
    pub solubility_class: Option<String>,

    #[serde(default)]
    pub image: Option<String>,

    /// Set when the service could not process this item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResultEntry {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Convert into a persistable record. Error entries yield `None`.
    pub fn into_record(self) -> Option<PredictionRecord> {
        if self.error.is_some() {
            return None;
        }
        Some(PredictionRecord {
            smiles: self.smiles,
            prediction: self.prediction,
            solubility: self.solubility,
            solubility_class: self.solubility_class,
            image: self.image,
        })
    }
}

impl From<PredictionRecord> for ResultEntry {
    fn from(record: PredictionRecord) -> Self {
        Self {
            smiles: record.smiles,
            prediction: record.prediction,
            solubility: record.solubility,
            solubility_class: record.solubility_class,
            image: record.image,
            error: None,
        }
    }
}

/// Display style bucket derived from a class label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolubilityBucket {
    High,
    Medium,
    Low,
    /// No marker matched, or the label was absent.
    Neutral,
}

/// Class label markers emitted by the service (Russian display strings).
/// Matching is case-sensitive substring containment; the markers are not
/// mutually exclusive by construction, so the check order is part of the
/// contract: High before Medium before Low.
const HIGH_MARKER: &str = "Высокая";
const MEDIUM_MARKER: &str = "Средняя";
const LOW_MARKER: &str = "Низкая";

impl SolubilityBucket {
    /// Map a class label to its display bucket.
    pub fn classify(label: Option<&str>) -> Self {
        let Some(label) = label else {
            return Self::Neutral;
        };
        if label.contains(HIGH_MARKER) {
            Self::High
        } else if label.contains(MEDIUM_MARKER) {
            Self::Medium
        } else if label.contains(LOW_MARKER) {
            Self::Low
        } else {
            Self::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success_entry(smiles: &str) -> ResultEntry {
        ResultEntry {
            smiles: smiles.to_string(),
            prediction: Some(-0.77),
            solubility: Some("0.1698 моль/л".to_string()),
            solubility_class: Some("Высокая растворимость".to_string()),
            image: Some("data:image/png;base64,iVBOR".to_string()),
            error: None,
        }
    }

    #[test]
    fn classify_high_label() {
        assert_eq!(
            SolubilityBucket::classify(Some("Высокая растворимость")),
            SolubilityBucket::High
        );
    }

    #[test]
    fn classify_medium_label() {
        assert_eq!(
            SolubilityBucket::classify(Some("Средняя растворимость")),
            SolubilityBucket::Medium
        );
    }

    #[test]
    fn classify_low_label() {
        assert_eq!(
            SolubilityBucket::classify(Some("Низкая растворимость")),
            SolubilityBucket::Low
        );
    }

    #[test]
    fn classify_unknown_label_is_neutral() {
        assert_eq!(
            SolubilityBucket::classify(Some("Не определено")),
            SolubilityBucket::Neutral
        );
        assert_eq!(SolubilityBucket::classify(None), SolubilityBucket::Neutral);
    }

    #[test]
    fn classify_is_case_sensitive() {
        // Lowercased marker must not match.
        assert_eq!(
            SolubilityBucket::classify(Some("высокая растворимость")),
            SolubilityBucket::Neutral
        );
    }

    #[test]
    fn classify_checks_high_before_medium_and_low() {
        // A label containing multiple markers resolves by check order.
        assert_eq!(
            SolubilityBucket::classify(Some("Высокая или Низкая")),
            SolubilityBucket::High
        );
        assert_eq!(
            SolubilityBucket::classify(Some("Средняя или Низкая")),
            SolubilityBucket::Medium
        );
    }

    #[test]
    fn error_entry_is_not_persistable() {
        let entry = ResultEntry {
            smiles: "X".to_string(),
            error: Some("invalid structure".to_string()),
            ..success_entry("X")
        };
        assert!(entry.is_error());
        assert!(entry.into_record().is_none());
    }

    #[test]
    fn success_entry_converts_to_record() {
        let record = success_entry("CCO").into_record().unwrap();
        assert_eq!(record.smiles, "CCO");
        assert_eq!(record.prediction, Some(-0.77));
        assert_eq!(record.bucket(), SolubilityBucket::High);
    }

    #[test]
    fn entry_deserializes_from_service_shape() {
        let json = r#"{
            "smiles": "CCO",
            "image": "data:image/png;base64,AAAA",
            "prediction": -0.77,
            "solubility": "0.1698 моль/л",
            "solubility_class": "Высокая растворимость"
        }"#;
        let entry: ResultEntry = serde_json::from_str(json).unwrap();
        assert!(!entry.is_error());
        assert_eq!(entry.prediction, Some(-0.77));
    }

    #[test]
    fn error_entry_deserializes_with_null_fields() {
        let json = r#"{
            "smiles": "not-a-smiles",
            "error": "Некорректная SMILES-строка",
            "image": null,
            "prediction": null,
            "solubility": null,
            "solubility_class": null
        }"#;
        let entry: ResultEntry = serde_json::from_str(json).unwrap();
        assert!(entry.is_error());
        assert!(entry.prediction.is_none());
    }

    #[test]
    fn record_with_missing_optional_fields_parses() {
        let json = r#"{"smiles": "CCO"}"#;
        let record: PredictionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.smiles, "CCO");
        assert!(record.prediction.is_none());
        assert_eq!(record.bucket(), SolubilityBucket::Neutral);
    }
}
