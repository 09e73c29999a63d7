//! Client Configuration
//!
//! Settings read from the environment, each with a usable default.

use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_BODY_MAX: usize = 256;

const ENV_BASE_URL: &str = "MASK_SERVICE_URL";
const ENV_TIMEOUT_MS: &str = "MASK_SERVICE_TIMEOUT_MS";
const ENV_LOG_BODY: &str = "PLAYGROUND_LOG_BODY";
const ENV_BODY_MAX: &str = "PLAYGROUND_LOG_BODY_MAX";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service root without a trailing slash
    pub base_url: String,
    pub timeout: Duration,
    /// Include raw text previews in exchange logs
    pub log_body: bool,
    /// Preview length in characters
    pub body_max: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            log_body: false,
            body_max: DEFAULT_BODY_MAX,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparseable values keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let base_url = lookup(ENV_BASE_URL)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.base_url);

        let timeout_ms = parse_or(ENV_TIMEOUT_MS, lookup(ENV_TIMEOUT_MS), DEFAULT_TIMEOUT_MS);
        let body_max = parse_or(ENV_BODY_MAX, lookup(ENV_BODY_MAX), DEFAULT_BODY_MAX);

        let log_body = match lookup(ENV_LOG_BODY) {
            None => defaults.log_body,
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                tracing::warn!(key = ENV_LOG_BODY, value = %raw, "ignoring invalid flag");
                defaults.log_body
            }),
        };

        Self::default()
            .with_base_url(base_url)
            .with_timeout(Duration::from_millis(timeout_ms))
            .with_body_logging(log_body, body_max)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_body_logging(mut self, enabled: bool, body_max: usize) -> Self {
        self.log_body = enabled;
        self.body_max = body_max;
        self
    }

    /// Absolute URL for a service path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn parse_or<T: FromStr + Copy>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "ignoring invalid number");
            default
        }),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.endpoint("mask"), "http://localhost:8000/mask");
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("MASK_SERVICE_URL", "https://masker.internal/api/"),
            ("MASK_SERVICE_TIMEOUT_MS", "1500"),
            ("PLAYGROUND_LOG_BODY", "TRUE"),
            ("PLAYGROUND_LOG_BODY_MAX", "32"),
        ]));
        assert_eq!(config.base_url, "https://masker.internal/api");
        assert_eq!(config.endpoint("/health"), "https://masker.internal/api/health");
        assert_eq!(config.timeout, Duration::from_millis(1500));
        assert!(config.log_body);
        assert_eq!(config.body_max, 32);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("MASK_SERVICE_URL", "   "),
            ("MASK_SERVICE_TIMEOUT_MS", "soon"),
            ("PLAYGROUND_LOG_BODY", "maybe"),
            ("PLAYGROUND_LOG_BODY_MAX", "-1"),
        ]));
        assert_eq!(config, ClientConfig::default());
    }
}
