//! Playground Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over
//! `PlaygroundState`. The submit flow lives here because it spans the IPC
//! await.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::playground::PlaygroundState;

/// Type alias for the store
pub type PlaygroundStore = Store<PlaygroundState>;

/// Get the playground store from context
pub fn use_playground_store() -> PlaygroundStore {
    expect_context::<PlaygroundStore>()
}

/// Build the request and send it, unless one is already in flight
pub fn submit(store: PlaygroundStore) {
    let mut request = None;
    store.update(|state| request = state.begin_submit());

    let Some(request) = request else {
        web_sys::console::log_1(&"[PLAYGROUND] Submit ignored, request in flight".into());
        return;
    };

    web_sys::console::log_1(
        &format!(
            "[PLAYGROUND] Submitting {} chars, {} targets",
            request.text.chars().count(),
            request.targets.len()
        )
        .into(),
    );

    spawn_local(async move {
        let outcome = commands::mask_text(&request).await;
        match &outcome {
            Ok(response) => web_sys::console::log_1(
                &format!("[PLAYGROUND] Masked, {} spans detected", response.detected.len()).into(),
            ),
            Err(failure) => web_sys::console::warn_1(
                &format!("[PLAYGROUND] Masking failed ({:?}): {}", failure.kind, failure.message).into(),
            ),
        }
        store.update(|state| state.complete(outcome));
    });
}
