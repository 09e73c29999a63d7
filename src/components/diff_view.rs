//! Diff View Component
//!
//! Original and masked text side by side, then one line per replacement.

use leptos::prelude::*;

use crate::playground::PlaygroundStateStoreFields;
use crate::store::use_playground_store;

#[component]
pub fn DiffView() -> impl IntoView {
    let store = use_playground_store();
    let response = move || store.response().get();
    let replacements = move || store.with(|state| state.replacements());

    view! {
        <div class="view-panel">
            <div class="diff-columns">
                <div>
                    <div class="panel-caption">"Original"</div>
                    <div class="text-block">
                        {move || response().map(|r| r.original).unwrap_or_else(|| "original text".to_string())}
                    </div>
                </div>
                <div>
                    <div class="panel-caption">"Masked"</div>
                    <div class="text-block">
                        {move || response().map(|r| r.masked).unwrap_or_else(|| "masked text".to_string())}
                    </div>
                </div>
            </div>

            <div>
                <div class="panel-caption">"Replacements"</div>
                <div class="replacement-list">
                    {move || {
                        let lines = replacements();
                        if lines.is_empty() {
                            view! { <div class="placeholder">"No differences"</div> }.into_any()
                        } else {
                            lines.into_iter().map(|line| view! {
                                <div class="replacement-row">
                                    <span class="replacement-label">"[" {line.label} "]"</span>
                                    <span class="replacement-original">{line.original}</span>
                                    <span>"→"</span>
                                    <span class="replacement-masked">{line.masked}</span>
                                </div>
                            }).collect_view().into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
