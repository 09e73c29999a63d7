//! Detected Span Table
//!
//! One row per detected span with original and masked offsets.

use leptos::prelude::*;

use crate::models::DetectedSpan;
use crate::playground::PlaygroundStateStoreFields;
use crate::store::use_playground_store;

/// Display strings for one table row
#[derive(Debug, Clone, PartialEq, Eq)]
struct DetectedRow {
    label: String,
    text: String,
    original_range: String,
    masked_range: String,
}

impl From<DetectedSpan> for DetectedRow {
    fn from(span: DetectedSpan) -> Self {
        Self {
            original_range: format!("{}–{}", span.start_char, span.end_char),
            masked_range: format!("{}–{}", span.masked_start, span.masked_end),
            label: span.label,
            text: span.text,
        }
    }
}

#[component]
pub fn DetectedTable() -> impl IntoView {
    let store = use_playground_store();

    view! {
        <div class="detected-table">
            <div class="detected-row header">
                <div>"Label"</div>
                <div>"Text"</div>
                <div>"[start, end]"</div>
                <div>"[masked_start, masked_end]"</div>
            </div>
            {move || match store.response().get() {
                None => view! { <div class="detected-empty">"No data"</div> }.into_any(),
                Some(response) => response
                    .detected
                    .into_iter()
                    .map(DetectedRow::from)
                    .map(render_row)
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

fn render_row(row: DetectedRow) -> impl IntoView {
    let title = row.text.clone();
    view! {
        <div class="detected-row">
            <div>{row.label}</div>
            <div class="truncate" title=title>{row.text}</div>
            <div>{row.original_range}</div>
            <div>{row.masked_range}</div>
        </div>
    }
}
