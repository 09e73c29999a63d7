//! Status Line Component

use leptos::prelude::*;

use crate::store::use_playground_store;

#[component]
pub fn StatusLine() -> impl IntoView {
    let store = use_playground_store();

    view! {
        <div class="status-line">
            "Status: " {move || store.with(|state| state.status_label())}
        </div>
    }
}
