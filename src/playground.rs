//! Playground State Machine
//!
//! Owns the submission lifecycle:
//! Idle -> Loading -> Success | Error, and Success | Error -> Loading on the
//! next submit. There is no way back to Idle.
//!
//! Submitting is split in two so the UI can await the shell in between:
//! `begin_submit` builds the request (or refuses while one is in flight),
//! `complete` applies the outcome.

use reactive_stores::Store;

use crate::compositor::{compose, Segment};
use crate::models::{Category, MaskFailure, MaskRequest, MaskResponse, MaskTargets, MaskingInput, Replacement};
use crate::request::build_request;

pub const SAMPLE_TEXT: &str = "太郎のメールは taro@example.com です。";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Result,
    Diff,
}

/// Single edit of the masking option fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskingOption {
    Replacement(String),
    PreserveLength(bool),
    FixedLength(String),
}

/// Playground state with field-level reactivity.
///
/// Only the transition methods below write to it; `response` and
/// `error_message` are never both set.
#[derive(Debug, Clone, PartialEq, Store)]
pub struct PlaygroundState {
    pub input_text: String,
    pub targets: MaskTargets,
    pub masking: MaskingInput,
    pub lifecycle: Lifecycle,
    pub response: Option<MaskResponse>,
    pub error_message: Option<String>,
    pub active_view: ActiveView,
}

impl Default for PlaygroundState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaygroundState {
    pub fn new() -> Self {
        Self {
            input_text: SAMPLE_TEXT.to_string(),
            targets: MaskTargets::default(),
            masking: MaskingInput::default(),
            lifecycle: Lifecycle::Idle,
            response: None,
            error_message: None,
            active_view: ActiveView::Result,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle == Lifecycle::Loading
    }

    pub fn update_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    pub fn toggle_target(&mut self, category: Category) {
        self.targets.toggle(category);
    }

    pub fn update_masking_option(&mut self, option: MaskingOption) {
        match option {
            MaskingOption::Replacement(value) => self.masking.replacement = value,
            MaskingOption::PreserveLength(value) => self.masking.preserve_length = value,
            MaskingOption::FixedLength(value) => self.masking.fixed_length = value,
        }
    }

    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    /// Enter Loading and build the request; `None` while one is in flight.
    pub fn begin_submit(&mut self) -> Option<MaskRequest> {
        if self.is_loading() {
            return None;
        }
        self.lifecycle = Lifecycle::Loading;
        self.error_message = None;
        self.response = None;
        Some(build_request(&self.input_text, &self.targets, &self.masking))
    }

    /// Apply the outcome of the in-flight request. Ignored unless Loading.
    pub fn complete(&mut self, outcome: Result<MaskResponse, MaskFailure>) {
        if !self.is_loading() {
            return;
        }
        match outcome {
            Ok(response) => {
                self.response = Some(response);
                self.error_message = None;
                self.lifecycle = Lifecycle::Success;
                self.active_view = ActiveView::Result;
            }
            Err(failure) => {
                self.response = None;
                self.error_message = Some(failure.message);
                self.lifecycle = Lifecycle::Error;
            }
        }
    }

    /// Highlighted masked text for the result view
    pub fn result_segments(&self) -> Option<Vec<Segment>> {
        self.response
            .as_ref()
            .map(|response| compose(&response.masked, &response.detected))
    }

    pub fn replacements(&self) -> Vec<Replacement> {
        self.response
            .as_ref()
            .map(MaskResponse::replacements)
            .unwrap_or_default()
    }

    pub fn status_label(&self) -> &'static str {
        match self.lifecycle {
            Lifecycle::Idle => "Empty",
            Lifecycle::Loading => "Loading",
            Lifecycle::Success => "Success",
            Lifecycle::Error => "Error",
        }
    }
}
