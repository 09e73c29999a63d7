//! HTTP Masking Client
//!
//! reqwest implementation of `MaskService`.

use std::time::Instant;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::traits::MaskService;
use crate::audit::TextDigest;
use crate::config::ClientConfig;
use crate::domain::{HealthStatus, MaskRequest, MaskResponse};
use crate::error::{MaskError, MaskResult};

const REQUEST_ID_HEADER: &str = "X-Request-ID";

#[derive(Clone)]
pub struct HttpMaskClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpMaskClient {
    pub fn new(config: ClientConfig) -> MaskResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MaskError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn from_env() -> MaskResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn post_mask(&self, request_id: &str, request: &MaskRequest) -> MaskResult<MaskResponse> {
        let response = self
            .client
            .post(self.config.endpoint("mask"))
            .header(REQUEST_ID_HEADER, request_id)
            .json(request)
            .send()
            .await
            .map_err(|e| MaskError::from_reqwest(e, self.config.timeout))?;
        self.read_json(response).await
    }

    /// Status check first, then decode; the body is read in full either way.
    async fn read_json<T: DeserializeOwned>(&self, response: reqwest::Response) -> MaskResult<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| MaskError::from_reqwest(e, self.config.timeout))?;

        if !status.is_success() {
            return Err(MaskError::Service {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| MaskError::Decode(e.to_string()))
    }
}

#[async_trait]
impl MaskService for HttpMaskClient {
    async fn mask(&self, request: &MaskRequest) -> MaskResult<MaskResponse> {
        let request_id = Uuid::new_v4().simple().to_string();
        let text = TextDigest::of(&request.text, &self.config);

        tracing::info!(
            event = "IN",
            request_id = %request_id,
            path = "/mask",
            req_body_len = text.len,
            req_body_digest = %text.digest,
            req_body = text.preview.as_deref(),
            targets = ?request.targets,
            "masking request"
        );

        let started = Instant::now();
        let outcome = self.post_mask(&request_id, request).await;
        let latency_ms = started.elapsed().as_millis() as u64;

        match &outcome {
            Ok(response) => {
                let masked_preview = self
                    .config
                    .log_body
                    .then(|| response.masked.chars().take(self.config.body_max).collect::<String>());
                tracing::info!(
                    event = "OUT",
                    request_id = %request_id,
                    path = "/mask",
                    latency_ms,
                    masked_len = response.masked_len(),
                    detected_count = response.detected.len(),
                    masked_preview = masked_preview.as_deref(),
                    "masking response"
                );
            }
            Err(err) => {
                tracing::warn!(
                    event = "OUT",
                    request_id = %request_id,
                    path = "/mask",
                    status = err.status(),
                    latency_ms,
                    error = err.kind(),
                    "masking failed: {err}"
                );
            }
        }

        outcome
    }

    async fn health(&self) -> MaskResult<HealthStatus> {
        let response = self
            .client
            .get(self.config.endpoint("health"))
            .send()
            .await
            .map_err(|e| MaskError::from_reqwest(e, self.config.timeout))?;
        let health: HealthStatus = self.read_json(response).await?;
        tracing::debug!(status = %health.status, "health check");
        Ok(health)
    }
}
