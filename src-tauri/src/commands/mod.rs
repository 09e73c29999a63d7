//! Commands Layer
//!
//! Tauri command handlers that bridge the UI to the masking service.

mod mask_cmd;

pub use mask_cmd::*;
