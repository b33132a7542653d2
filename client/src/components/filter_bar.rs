//! Samples filter bar: search, access scope, creator, region, clear buttons.

use leptos::prelude::*;

use crate::components::region_selector::RegionSelector;
use crate::components::user_picker::UserPicker;
use crate::net::types::AllowedAccess;
use crate::state::filter::{SampleFilter, update_search_text};

fn access_label(access: AllowedAccess) -> &'static str {
    match access {
        AllowedAccess::Viewable => "Viewable",
        AllowedAccess::Writeable => "Writeable",
        AllowedAccess::Previewable => "Previewable",
    }
}

#[component]
pub fn FilterBar() -> impl IntoView {
    let filter = expect_context::<RwSignal<SampleFilter>>();
    let has_bbox = move || filter.with(|f| f.bbox.live().is_some());

    view! {
        <div class="filter-bar">
            <input
                class="filter-bar__search"
                type="search"
                placeholder="Search name..."
                prop:value=move || filter.with(|f| f.search.live().clone())
                on:input=move |ev| update_search_text(filter, event_target_value(&ev))
            />
            <select
                class="filter-bar__select"
                aria-label="Access"
                prop:value=move || filter.with(|f| f.allowed_access.as_str())
                on:change=move |ev| {
                    if let Some(access) = AllowedAccess::parse(&event_target_value(&ev)) {
                        filter.update(|f| f.set_allowed_access(access));
                    }
                }
            >
                {AllowedAccess::ALL
                    .into_iter()
                    .map(|a| view! { <option value=a.as_str()>{access_label(a)}</option> })
                    .collect_view()}
            </select>
            <UserPicker/>
            <RegionSelector/>
            <Show when=has_bbox>
                <button class="filter-bar__button" type="button" on:click=move |_| filter.update(SampleFilter::clear_bbox)>
                    "Clear area"
                </button>
            </Show>
            <button
                class="filter-bar__button"
                type="button"
                disabled=move || !filter.with(SampleFilter::has_filters)
                on:click=move |_| filter.update(SampleFilter::clear_filters)
            >
                "Clear"
            </button>
        </div>
    }
}
