//! Client Errors
//!
//! Failure taxonomy of a masking service exchange.

use std::time::Duration;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaskError {
    /// The service could not be reached (connection refused, DNS, reset)
    #[error("could not reach masking service: {0}")]
    Transport(String),

    #[error("masking service did not answer within {} ms", .0.as_millis())]
    Timeout(Duration),

    /// Non-success HTTP status; `body` is kept verbatim
    #[error("masking service returned HTTP {status}: {}", service_detail(.body))]
    Service { status: u16, body: String },

    #[error("could not decode masking service response: {0}")]
    Decode(String),
}

pub type MaskResult<T> = Result<T, MaskError>;

impl MaskError {
    pub fn kind(&self) -> &'static str {
        match self {
            MaskError::Transport(_) => "transport",
            MaskError::Timeout(_) => "timeout",
            MaskError::Service { .. } => "service",
            MaskError::Decode(_) => "decode",
        }
    }

    /// HTTP status for service errors
    pub fn status(&self) -> Option<u16> {
        match self {
            MaskError::Service { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            MaskError::Timeout(timeout)
        } else {
            MaskError::Transport(err.to_string())
        }
    }
}

/// FastAPI puts its message under `detail`; anything else is shown as-is.
fn service_detail(body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| match value.get("detail") {
            Some(serde_json::Value::String(text)) => Some(text.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        });

    match detail {
        Some(detail) => detail,
        None if body.trim().is_empty() => "(empty body)".to_string(),
        None => body.trim().to_string(),
    }
}

// Crosses the Tauri IPC boundary as `{ kind, message }`.
impl Serialize for MaskError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MaskError", 2)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
