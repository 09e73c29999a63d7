//! Frontend Models
//!
//! Data structures matching the masking service wire format, plus the
//! UI-side input state they are built from.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::compositor::char_slice;

/// Entity categories a user may include or exclude from masking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Person,
    Email,
    Phone,
    Location,
    Organization,
    Url,
}

impl Category {
    /// Canonical display order
    pub const ALL: [Category; 6] = [
        Category::Person,
        Category::Email,
        Category::Phone,
        Category::Location,
        Category::Organization,
        Category::Url,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Person => "PERSON",
            Category::Email => "EMAIL",
            Category::Phone => "PHONE",
            Category::Location => "LOCATION",
            Category::Organization => "ORGANIZATION",
            Category::Url => "URL",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == label)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Inclusion flag for every category; the key set never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskTargets([bool; Category::ALL.len()]);

impl Default for MaskTargets {
    fn default() -> Self {
        Self([true; Category::ALL.len()])
    }
}

impl MaskTargets {
    pub fn none() -> Self {
        Self([false; Category::ALL.len()])
    }

    pub fn is_enabled(&self, category: Category) -> bool {
        self.0[category.index()]
    }

    pub fn set(&mut self, category: Category, enabled: bool) {
        self.0[category.index()] = enabled;
    }

    pub fn toggle(&mut self, category: Category) {
        let flag = &mut self.0[category.index()];
        *flag = !*flag;
    }

    /// Enabled categories in canonical order
    pub fn enabled(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| self.is_enabled(*c))
    }
}

/// Raw masking fields as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskingInput {
    pub replacement: String,
    pub preserve_length: bool,
    /// Free text; parsed by the request builder
    pub fixed_length: String,
}

impl Default for MaskingInput {
    fn default() -> Self {
        Self {
            replacement: "＊".to_string(),
            preserve_length: true,
            fixed_length: String::new(),
        }
    }
}

/// Masking options (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaskingOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
    pub preserve_length: bool,
    /// Serialized as `null` when unset
    pub fixed_length: Option<u32>,
}

/// Mask request (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaskRequest {
    pub text: String,
    pub targets: Vec<Category>,
    pub masking: MaskingOptions,
}

/// Detected entity span (matches backend). Offsets count characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedSpan {
    pub label: String,
    pub text: String,
    pub start_char: usize,
    pub end_char: usize,
    pub masked_start: usize,
    pub masked_end: usize,
}

/// Mask response (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskResponse {
    pub original: String,
    pub masked: String,
    #[serde(default)]
    pub detected: Vec<DetectedSpan>,
}

/// One "original -> masked" line of the diff view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub label: String,
    pub original: String,
    pub masked: String,
}

impl MaskResponse {
    /// Per detected span, in response order
    pub fn replacements(&self) -> Vec<Replacement> {
        self.detected
            .iter()
            .map(|span| Replacement {
                label: span.label.clone(),
                original: span.text.clone(),
                masked: char_slice(&self.masked, span.masked_start, span.masked_end),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Service the desktop shell is configured against
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceInfo {
    pub base_url: String,
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Transport,
    Timeout,
    Service,
    Decode,
    /// Anything the shell did not classify (IPC/serialization problems)
    #[serde(other)]
    Ipc,
}

/// Failed command as reported by the shell (`{ kind, message }`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MaskFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl MaskFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn ipc(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Ipc, message)
    }
}

impl fmt::Display for MaskFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
