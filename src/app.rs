//! Playground App
//!
//! Two-column layout: controls on the left, result/diff tabs on the right.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{Controls, DiffView, Header, ResultView, StatusLine, Tabs};
use crate::models::ServiceInfo;
use crate::playground::{ActiveView, PlaygroundState, PlaygroundStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(PlaygroundState::new());
    provide_context(store);

    let (service, set_service) = signal::<Option<ServiceInfo>>(None);
    let (healthy, set_healthy) = signal::<Option<bool>>(None);

    // Probe the configured service once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::service_info().await {
                Ok(info) => set_service.set(Some(info)),
                Err(e) => web_sys::console::warn_1(&format!("[APP] Service info unavailable: {}", e).into()),
            }
            let ok = match commands::check_health().await {
                Ok(health) => health.is_healthy(),
                Err(e) => {
                    web_sys::console::warn_1(&format!("[APP] Health check failed: {}", e).into());
                    false
                }
            };
            set_healthy.set(Some(ok));
        });
    });

    view! {
        <div class="app-layout">
            <Header title="PersonalMasker Playground" service=service healthy=healthy />

            <main class="playground">
                <Controls />

                // Right: result / diff tabs
                <section class="output-column">
                    <div class="output-card">
                        <Tabs />
                        {move || match store.active_view().get() {
                            ActiveView::Result => view! { <ResultView /> }.into_any(),
                            ActiveView::Diff => view! { <DiffView /> }.into_any(),
                        }}
                    </div>
                    <StatusLine />
                </section>
            </main>
        </div>
    }
}
