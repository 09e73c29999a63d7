//! Masking Commands
//!
//! Frontend bindings for the masking service commands.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::invoke;
use crate::models::{FailureKind, HealthStatus, MaskFailure, MaskRequest, MaskResponse, ServiceInfo};

#[derive(Serialize)]
struct MaskTextArgs<'a> {
    request: &'a MaskRequest,
}

/// `None` must reach the shell as `null`, not `undefined`
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, MaskFailure> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| MaskFailure::ipc(format!("Failed to serialize args: {}", e)))
}

fn failure_from_js(err: JsValue) -> MaskFailure {
    serde_wasm_bindgen::from_value::<MaskFailure>(err.clone()).unwrap_or_else(|_| {
        MaskFailure::ipc(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    })
}

pub async fn mask_text(request: &MaskRequest) -> Result<MaskResponse, MaskFailure> {
    let js_args = to_js(&MaskTextArgs { request })?;
    let result = invoke("mask_text", js_args).await.map_err(failure_from_js)?;
    serde_wasm_bindgen::from_value(result)
        .map_err(|e| MaskFailure::new(FailureKind::Decode, format!("Failed to parse result: {}", e)))
}

pub async fn check_health() -> Result<HealthStatus, MaskFailure> {
    let result = invoke("check_health", JsValue::NULL).await.map_err(failure_from_js)?;
    serde_wasm_bindgen::from_value(result)
        .map_err(|e| MaskFailure::new(FailureKind::Decode, format!("Failed to parse result: {}", e)))
}

pub async fn service_info() -> Result<ServiceInfo, MaskFailure> {
    let result = invoke("service_info", JsValue::NULL).await.map_err(failure_from_js)?;
    serde_wasm_bindgen::from_value(result)
        .map_err(|e| MaskFailure::ipc(format!("Failed to parse result: {}", e)))
}
