//! Request Builder
//!
//! Turns the playground inputs into a `MaskRequest`. Never fails: ambiguous
//! input degrades to the service default.

use crate::models::{MaskRequest, MaskTargets, MaskingInput, MaskingOptions};

pub fn build_request(text: &str, targets: &MaskTargets, masking: &MaskingInput) -> MaskRequest {
    MaskRequest {
        text: text.to_string(),
        targets: targets.enabled().collect(),
        masking: MaskingOptions {
            replacement: normalize_replacement(&masking.replacement),
            preserve_length: masking.preserve_length,
            fixed_length: parse_fixed_length(&masking.fixed_length),
        },
    }
}

/// Blank means "service default"; anything else is passed through untouched.
pub fn normalize_replacement(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Blank, non-numeric, negative or overflowing input is treated as unset.
///
/// Stricter than a numeric-prefix parse: `"5abc"` is unset, not 5.
pub fn parse_fixed_length(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
