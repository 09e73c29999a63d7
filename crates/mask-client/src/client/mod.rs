//! Client Layer
//!
//! `MaskService` abstracts the masking service; `HttpMaskClient` talks to it
//! over HTTP.

mod http;
mod traits;


pub use http::HttpMaskClient;
pub use traits::MaskService;
