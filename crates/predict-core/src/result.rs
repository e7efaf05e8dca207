//! Prediction Responses
//!
//! The endpoint's JSON reply and the display formatting applied to it.
//! A reply is accepted wholesale: `prediction` must be present, everything
//! else is optional and passed through untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The primary prediction, numeric or textual
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionValue {
    Number(f64),
    Text(String),
}

/// One parsed endpoint reply, replaced wholesale on each submission
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Required model output
    pub prediction: PredictionValue,

    /// Optional confidence fraction in [0, 1]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    /// Optional auxiliary values, kept in the order the server sent them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Map<String, Value>>,
}

impl PredictionResult {
    /// Primary prediction formatted for display
    pub fn formatted_prediction(&self) -> String {
        format_prediction(&self.prediction)
    }

    /// Confidence as a percentage string, when present
    pub fn formatted_confidence(&self) -> Option<String> {
        self.confidence.map(format_confidence)
    }

    /// Detail entries as display-ready `(label, value)` rows
    pub fn detail_rows(&self) -> Vec<(String, String)> {
        self.details
            .iter()
            .flat_map(|details| details.iter())
            .map(|(key, value)| (format_detail_key(key), format_detail_value(value)))
            .collect()
    }
}

/// Numeric predictions render to 4 decimal places, text verbatim
pub fn format_prediction(value: &PredictionValue) -> String {
    match value {
        PredictionValue::Number(n) => format!("{n:.4}"),
        PredictionValue::Text(s) => s.clone(),
    }
}

/// Fraction in [0, 1] rendered as a percentage to 2 decimal places
pub fn format_confidence(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// Detail keys swap underscores for spaces
pub fn format_detail_key(key: &str) -> String {
    key.replace('_', " ")
}

/// Numeric detail values render to 4 decimal places, strings verbatim,
/// anything else as raw JSON
pub fn format_detail_value(value: &Value) -> String {
    match value {
        Value::Number(n) => n
            .as_f64()
            .map_or_else(|| n.to_string(), |f| format!("{f:.4}")),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prediction_and_confidence_formatting() {
        let result: PredictionResult =
            serde_json::from_value(json!({"prediction": 0.8567, "confidence": 0.91})).unwrap();

        assert_eq!(result.formatted_prediction(), "0.8567");
        assert_eq!(result.formatted_confidence(), Some("91.00%".into()));
        assert!(result.detail_rows().is_empty());
    }

    #[test]
    fn test_text_prediction_renders_verbatim() {
        let result: PredictionResult =
            serde_json::from_value(json!({"prediction": "good match"})).unwrap();

        assert_eq!(result.formatted_prediction(), "good match");
        assert_eq!(result.formatted_confidence(), None);
    }

    #[test]
    fn test_detail_rows_formatting() {
        let result: PredictionResult = serde_json::from_value(json!({
            "prediction": 1.0,
            "details": {
                "years_experience": 5,
                "seniority_band": "mid",
            }
        }))
        .unwrap();

        assert_eq!(
            result.detail_rows(),
            vec![
                ("years experience".to_string(), "5.0000".to_string()),
                ("seniority band".to_string(), "mid".to_string()),
            ]
        );
    }

    #[test]
    fn test_detail_rows_keep_server_order() {
        let result: PredictionResult = serde_json::from_str(
            r#"{"prediction": 1.0, "details": {"z_score": 2, "a_score": 1}}"#,
        )
        .unwrap();

        let labels: Vec<String> = result
            .detail_rows()
            .into_iter()
            .map(|(label, _)| label)
            .collect();
        assert_eq!(labels, vec!["z score".to_string(), "a score".to_string()]);
    }

    #[test]
    fn test_missing_prediction_is_rejected() {
        let parsed: Result<PredictionResult, _> =
            serde_json::from_value(json!({"confidence": 0.5}));
        assert!(parsed.is_err());
    }
}
