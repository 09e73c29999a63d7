//! Exchange Audit
//!
//! Text passed through the playground is PII by definition. Logs carry its
//! length and a blake3 digest; the text itself only when body logging is on.

use crate::config::ClientConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDigest {
    /// Length in characters
    pub len: usize,
    /// Hex blake3 of the UTF-8 bytes
    pub digest: String,
    /// Leading `body_max` characters, only with body logging enabled
    pub preview: Option<String>,
}

impl TextDigest {
    pub fn of(text: &str, config: &ClientConfig) -> Self {
        Self {
            len: text.chars().count(),
            digest: blake3::hash(text.as_bytes()).to_hex().to_string(),
            preview: config
                .log_body
                .then(|| text.chars().take(config.body_max).collect()),
        }
    }
}
