//! Client Layer - Core Trait

use async_trait::async_trait;

use crate::domain::{HealthStatus, MaskRequest, MaskResponse};
use crate::error::MaskResult;

/// One request/response exchange with a masking backend
#[async_trait]
pub trait MaskService: Send + Sync {
    /// Mask `request.text`, returning the masked text and detected spans
    async fn mask(&self, request: &MaskRequest) -> MaskResult<MaskResponse>;

    /// Liveness probe
    async fn health(&self) -> MaskResult<HealthStatus>;
}
