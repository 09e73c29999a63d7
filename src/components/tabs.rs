//! Tab Strip Component
//!
//! Switches between the result and diff views.

use leptos::prelude::*;

use crate::playground::{ActiveView, PlaygroundStateStoreFields};
use crate::store::use_playground_store;

#[component]
pub fn Tabs() -> impl IntoView {
    let store = use_playground_store();

    let tab = move |target: ActiveView, label: &'static str| {
        let is_active = move || store.active_view().get() == target;
        view! {
            <button
                role="tab"
                aria-selected=move || is_active().to_string()
                class=move || if is_active() { "tab active" } else { "tab" }
                on:click=move |_| store.update(|state| state.switch_view(target))
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="tab-strip" role="tablist" aria-label="Result / Diff">
            {tab(ActiveView::Result, "Result")}
            {tab(ActiveView::Diff, "Diff")}
        </div>
    }
}
