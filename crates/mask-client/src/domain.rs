//! Wire Types
//!
//! Request and response shapes of the masking service.

use serde::{Deserialize, Serialize};

/// How detected spans are rewritten by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskingOptions {
    /// Replacement token; the service falls back to `＊` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
    /// Repeat the replacement to the original span length
    pub preserve_length: bool,
    /// Force every masked span to this length (wins over `preserve_length`).
    /// Always on the wire, `null` when unset.
    #[serde(default)]
    pub fixed_length: Option<u32>,
}

impl Default for MaskingOptions {
    fn default() -> Self {
        Self {
            replacement: None,
            preserve_length: true,
            fixed_length: None,
        }
    }
}

/// Body of `POST /mask`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskRequest {
    pub text: String,
    /// Category identifiers to mask, in display order
    #[serde(default)]
    pub targets: Vec<String>,
    #[serde(default)]
    pub masking: MaskingOptions,
}

/// One detected entity.
///
/// Offsets are half-open and count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedSpan {
    pub label: String,
    pub text: String,
    pub start_char: usize,
    pub end_char: usize,
    pub masked_start: usize,
    pub masked_end: usize,
}

/// Body returned by `POST /mask`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskResponse {
    pub original: String,
    pub masked: String,
    #[serde(default)]
    pub detected: Vec<DetectedSpan>,
}

impl MaskResponse {
    pub fn masked_len(&self) -> usize {
        self.masked.chars().count()
    }
}

/// Body returned by `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_options_serialize_null_fixed_length() {
        let value = serde_json::to_value(MaskingOptions::default()).unwrap();
        assert_eq!(value, json!({ "preserve_length": true, "fixed_length": null }));
    }

    #[test]
    fn test_zero_fixed_length_is_not_null() {
        let options = MaskingOptions {
            replacement: Some("#".to_string()),
            preserve_length: false,
            fixed_length: Some(0),
        };
        let value = serde_json::to_value(options).unwrap();
        assert_eq!(value["fixed_length"], json!(0));
        assert_eq!(value["replacement"], json!("#"));
    }

    #[test]
    fn test_response_deserialization() {
        let body = json!({
            "original": "東京都の太郎はメール taro@example.com に連絡した。",
            "masked": "＊＊＊の＊＊はメール **************** に連絡した。",
            "detected": [
                {"label": "PERSON", "text": "太郎", "start_char": 4, "end_char": 6,
                 "masked_start": 4, "masked_end": 6}
            ]
        });
        let response: MaskResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.detected.len(), 1);
        assert_eq!(response.detected[0].label, "PERSON");
        assert_eq!(response.masked_len(), 34);
    }

    #[test]
    fn test_missing_detected_defaults_to_empty() {
        let response: MaskResponse =
            serde_json::from_value(json!({ "original": "a", "masked": "a" })).unwrap();
        assert!(response.detected.is_empty());
    }

    #[test]
    fn test_health_status() {
        assert!(HealthStatus { status: "healthy".to_string() }.is_healthy());
        assert!(!HealthStatus { status: "degraded".to_string() }.is_healthy());
    }
}
