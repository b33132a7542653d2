//! Region dropdown over the fixed LithoDat region list.

use leptos::prelude::*;

use crate::state::filter::{REGIONS, SampleFilter};

#[component]
pub fn RegionSelector() -> impl IntoView {
    let filter = expect_context::<RwSignal<SampleFilter>>();

    view! {
        <select
            class="filter-bar__select"
            aria-label="Region"
            prop:value=move || filter.with(|f| f.region.clone().unwrap_or_default())
            on:change=move |ev| {
                let value = event_target_value(&ev);
                filter.update(|f| f.set_region(Some(value)));
            }
        >
            <option value="">"Region..."</option>
            {REGIONS.iter().map(|region| view! { <option value=*region>{*region}</option> }).collect_view()}
        </select>
    }
}
