//! Sample record viewer: labelled sections with a raw-JSON toggle.
//!
//! Shared by the detail modal and the `/samples/:id` page.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::SampleRecord;
use crate::util::json_view::{JsonEntry, pretty, sections};

fn entries_view(entries: Vec<JsonEntry>) -> AnyView {
    view! {
        <dl class="json-section__list">
            {entries
                .into_iter()
                .map(|entry| match entry {
                    JsonEntry::Field { label, value } => {
                        view! {
                            <div class="json-section__row">
                                <dt class="json-section__label">{label}</dt>
                                <dd class="json-section__value">{value}</dd>
                            </div>
                        }
                            .into_any()
                    }
                    JsonEntry::Section { label, entries } => {
                        view! {
                            <div class="json-section">
                                <div class="json-section__title">{label}</div>
                                {entries_view(entries)}
                            </div>
                        }
                            .into_any()
                    }
                })
                .collect_view()}
        </dl>
    }
    .into_any()
}

#[component]
pub fn SampleDetailViewer(sample: SampleRecord) -> impl IntoView {
    let show_raw = RwSignal::new(false);
    let raw = pretty(&sample);
    let entries = sections(&sample);
    let is_empty = entries.is_empty();

    view! {
        <div class="sample-detail">
            <div class="sample-detail__header">
                <h2>"Details"</h2>
                <button class="sample-detail__toggle" type="button" on:click=move |_| show_raw.update(|v| *v = !*v)>
                    {move || if show_raw.get() { "Hide raw json" } else { "Show raw json" }}
                </button>
            </div>
            <Show when=move || show_raw.get()>
                <div class="sample-detail__raw">
                    <div class="sample-detail__raw-title">"Raw JSON"</div>
                    <pre>{raw.clone()}</pre>
                </div>
            </Show>
            {if is_empty {
                view! { <p class="sample-detail__hint">"Click \"Show raw json\" to view the payload."</p> }.into_any()
            } else {
                entries_view(entries)
            }}
        </div>
    }
}
