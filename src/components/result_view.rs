//! Result View Component
//!
//! Masked text with detected spans highlighted, plus the span table.

use leptos::prelude::*;

use crate::compositor::{Segment, SegmentKind};
use crate::components::DetectedTable;
use crate::store::use_playground_store;

#[component]
pub fn ResultView() -> impl IntoView {
    let store = use_playground_store();
    let segments = Memo::new(move |_| store.with(|state| state.result_segments()));

    view! {
        <div class="view-panel">
            <div>
                <div class="panel-caption">"Masked result"</div>
                {move || match segments.get() {
                    None => view! {
                        <div class="text-block placeholder">"masked text preview"</div>
                    }.into_any(),
                    Some(segments) => view! {
                        <div class="text-block">
                            {segments.into_iter().map(render_segment).collect_view()}
                        </div>
                    }.into_any(),
                }}
            </div>
            <div>
                <div class="panel-caption">"Detected spans"</div>
                <DetectedTable />
            </div>
        </div>
    }
}

fn render_segment(segment: Segment) -> AnyView {
    match segment.kind {
        SegmentKind::Plain => view! { <span>{segment.text}</span> }.into_any(),
        SegmentKind::Highlighted => view! {
            <mark class="span-highlight" title=segment.label.unwrap_or_default()>
                {segment.text}
            </mark>
        }.into_any(),
    }
}
