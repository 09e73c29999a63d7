//! Masking Service Client
//!
//! Typed access to the PersonalMasker HTTP API.
//! - domain: wire types exchanged with the service (and mirrored by the UI)
//! - client: `MaskService` trait and its reqwest implementation
//! - config: environment-driven client settings
//! - audit: privacy-preserving text summaries for exchange logs

mod audit;
mod client;
mod config;
mod domain;
mod error;

pub use audit::TextDigest;
pub use client::{HttpMaskClient, MaskService};
pub use config::ClientConfig;
pub use domain::{DetectedSpan, HealthStatus, MaskRequest, MaskResponse, MaskingOptions};
pub use error::{MaskError, MaskResult};
