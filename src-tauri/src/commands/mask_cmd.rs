//! Tauri Commands for Masking
//!
//! Exposes the masking service to the UI via Tauri IPC. Failures cross the
//! boundary as `{ kind, message }`.

use mask_client::{ClientConfig, HealthStatus, MaskError, MaskRequest, MaskResponse, MaskService};
use serde::Serialize;
use tauri::State;

use crate::AppState;

/// Which service the shell talks to (shown in the UI header)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceInfo {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl From<&ClientConfig> for ServiceInfo {
    fn from(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout_ms: config.timeout.as_millis() as u64,
        }
    }
}

/// Mask a text with the configured service
#[tauri::command]
pub async fn mask_text(
    state: State<'_, AppState>,
    request: MaskRequest,
) -> Result<MaskResponse, MaskError> {
    mask_with(state.service.as_ref(), request).await
}

/// Probe `GET /health`
#[tauri::command]
pub async fn check_health(state: State<'_, AppState>) -> Result<HealthStatus, MaskError> {
    state.service.health().await
}

#[tauri::command]
pub fn service_info(state: State<'_, AppState>) -> ServiceInfo {
    ServiceInfo::from(&state.config)
}

async fn mask_with(service: &dyn MaskService, request: MaskRequest) -> Result<MaskResponse, MaskError> {
    if request.targets.is_empty() {
        tracing::debug!("no categories selected, service default applies");
    }
    service.mask(&request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mask_client::{DetectedSpan, MaskResult, MaskingOptions};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Records every request and answers with a canned outcome
    struct FakeService {
        seen: Mutex<Vec<MaskRequest>>,
        fail: bool,
    }

    impl FakeService {
        fn new(fail: bool) -> Self {
            Self { seen: Mutex::new(Vec::new()), fail }
        }
    }

    #[async_trait]
    impl MaskService for FakeService {
        async fn mask(&self, request: &MaskRequest) -> MaskResult<MaskResponse> {
            self.seen.lock().unwrap().push(request.clone());
            if self.fail {
                return Err(MaskError::Service {
                    status: 501,
                    body: r#"{"detail":"未実装"}"#.to_string(),
                });
            }
            Ok(MaskResponse {
                original: request.text.clone(),
                masked: "＊＊です".to_string(),
                detected: vec![DetectedSpan {
                    label: "PERSON".to_string(),
                    text: "太郎".to_string(),
                    start_char: 0,
                    end_char: 2,
                    masked_start: 0,
                    masked_end: 2,
                }],
            })
        }

        async fn health(&self) -> MaskResult<HealthStatus> {
            Ok(HealthStatus { status: "healthy".to_string() })
        }
    }

    fn request() -> MaskRequest {
        MaskRequest {
            text: "太郎です".to_string(),
            targets: vec!["PERSON".to_string()],
            masking: MaskingOptions::default(),
        }
    }

    #[tokio::test]
    async fn test_mask_with_forwards_request() {
        let service = FakeService::new(false);
        let response = mask_with(&service, request()).await.expect("Mask failed");

        assert_eq!(response.original, "太郎です");
        assert_eq!(service.seen.lock().unwrap().as_slice(), &[request()]);
    }

    #[tokio::test]
    async fn test_mask_with_failure_serializes_for_ipc() {
        let service = FakeService::new(true);
        let err = mask_with(&service, request()).await.unwrap_err();

        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["kind"], "service");
        assert_eq!(value["message"], "masking service returned HTTP 501: 未実装");
    }

    #[test]
    fn test_service_info_from_config() {
        let config = ClientConfig::default()
            .with_base_url("http://masker:9000/")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(
            ServiceInfo::from(&config),
            ServiceInfo { base_url: "http://masker:9000".to_string(), timeout_ms: 5000 }
        );
    }
}
