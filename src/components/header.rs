//! Header Component
//!
//! Title bar with the configured service and its health.

use leptos::prelude::*;

use crate::models::ServiceInfo;

#[component]
pub fn Header(
    #[prop(into)] title: String,
    service: ReadSignal<Option<ServiceInfo>>,
    healthy: ReadSignal<Option<bool>>,
) -> impl IntoView {
    let badge = move || match healthy.get() {
        None => ("health-badge pending", "checking…"),
        Some(true) => ("health-badge ok", "healthy"),
        Some(false) => ("health-badge down", "unreachable"),
    };

    view! {
        <header class="app-header">
            <h1>{title}</h1>
            <div class="service-info">
                {move || service.get().map(|info| view! {
                    <span class="service-url" title=format!("timeout {} ms", info.timeout_ms)>
                        {info.base_url}
                    </span>
                })}
                <span class=move || badge().0>{move || badge().1}</span>
            </div>
        </header>
    }
}
