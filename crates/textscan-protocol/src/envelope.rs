//! The JSON envelope printed once per invocation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Result of one invocation, printed as a single line of JSON.
///
/// Exactly one of `texts` and `error` is present: `texts` when `success`
/// is true, `error` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../../bindings/")]
pub struct Envelope {
    /// Whether recognition and aggregation succeeded.
    pub success: bool,

    /// Recognized text lines, concatenated across all result records.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub texts: Option<Vec<String>>,

    /// Failure description.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub error: Option<String>,
}

impl Envelope {
    /// Create a successful envelope carrying the recognized lines.
    pub fn success(texts: Vec<String>) -> Self {
        Self {
            success: true,
            texts: Some(texts),
            error: None,
        }
    }

    /// Create a failure envelope.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            texts: None,
            error: Some(message.into()),
        }
    }

    /// Serialize to compact single-line JSON.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let env = Envelope::success(vec!["Hello".to_string(), "World".to_string()]);

        let json = env.to_json_line().unwrap();
        assert_eq!(json, r#"{"success":true,"texts":["Hello","World"]}"#);
        assert!(!json.contains("error"));
    }

    #[test]
    fn test_empty_success_keeps_texts_field() {
        let json = Envelope::success(Vec::new()).to_json_line().unwrap();
        assert_eq!(json, r#"{"success":true,"texts":[]}"#);
    }

    #[test]
    fn test_failure_envelope() {
        let env = Envelope::failure("rec_texts is not an array");

        let json = env.to_json_line().unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("\"error\":\"rec_texts is not an array\""));
        assert!(!json.contains("texts\":"));
    }

    #[test]
    fn test_single_line_with_embedded_newlines() {
        let env = Envelope::success(vec!["first\nsecond".to_string()]);

        let json = env.to_json_line().unwrap();
        assert_eq!(json.lines().count(), 1);

        let parsed: Envelope = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, env);
    }

    #[test]
    fn test_parse_failure_without_texts() {
        let parsed: Envelope =
            serde_json::from_str(r#"{"success": false, "error": "boom"}"#).unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.texts, None);
        assert_eq!(parsed.error.as_deref(), Some("boom"));
    }
}
