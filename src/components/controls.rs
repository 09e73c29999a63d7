//! Left Controls Component
//!
//! Input text, category toggles, masking options and the submit button.

use leptos::prelude::*;

use crate::models::Category;
use crate::playground::{MaskingOption, PlaygroundStateStoreFields};
use crate::store::{submit, use_playground_store};

#[component]
pub fn Controls() -> impl IntoView {
    let store = use_playground_store();
    let loading = move || store.with(|state| state.is_loading());

    view! {
        <section class="controls-column">
            <div class="card">
                <h2>"Input"</h2>
                <div class="field-caption">"Text"</div>
                <textarea
                    class="input-text"
                    prop:value=move || store.input_text().get()
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        store.update(|state| state.update_text(text));
                    }
                ></textarea>
            </div>

            <div class="card">
                <h3>"Mask targets"</h3>
                <div class="target-list">
                    {Category::ALL.iter().map(|&category| view! {
                        <label class="target-row">
                            <span>{category.as_str()}</span>
                            <input
                                type="checkbox"
                                prop:checked=move || store.targets().get().is_enabled(category)
                                on:change=move |_| store.update(|state| state.toggle_target(category))
                            />
                        </label>
                    }).collect_view()}
                </div>

                <MaskingOptionsForm />

                <button
                    class="submit-btn"
                    disabled=loading
                    on:click=move |_| submit(store)
                >
                    {move || if loading() { "Masking…" } else { "Run masking" }}
                </button>

                {move || store.error_message().get().map(|message| view! {
                    <div class="error-line">"Error: " {message}</div>
                })}
            </div>
        </section>
    }
}

/// replacement / preserve_length / fixed_length
#[component]
fn MaskingOptionsForm() -> impl IntoView {
    let store = use_playground_store();
    let masking = move || store.masking().get();

    view! {
        <div class="masking-options">
            <label class="option-row">
                <span>"replacement"</span>
                <input
                    type="text"
                    class="option-text"
                    prop:value=move || masking().replacement
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        store.update(|state| state.update_masking_option(MaskingOption::Replacement(value)));
                    }
                />
            </label>
            <label class="option-row">
                <span>"preserve_length"</span>
                <input
                    type="checkbox"
                    prop:checked=move || masking().preserve_length
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        store.update(|state| state.update_masking_option(MaskingOption::PreserveLength(checked)));
                    }
                />
            </label>
            <label class="option-row">
                <span>"fixed_length"</span>
                <input
                    type="text"
                    class="option-number"
                    placeholder="empty = off"
                    prop:value=move || masking().fixed_length
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        store.update(|state| state.update_masking_option(MaskingOption::FixedLength(value)));
                    }
                />
            </label>
        </div>
    }
}
