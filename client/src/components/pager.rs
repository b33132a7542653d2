//! Table pager: first/prev/next/last, page label and page size.

use leptos::prelude::*;

use crate::state::filter::SampleFilter;
use crate::state::pagination::{Pager as PagerModel, SIZE_OPTIONS};

#[component]
pub fn Pager() -> impl IntoView {
    let filter = expect_context::<RwSignal<SampleFilter>>();
    let model = move || filter.with(|f| PagerModel::new(f.page, f.size, f.total_count));
    let go = move |page: u32| filter.update(|f| f.set_page(page));

    view! {
        <div class="pager">
            <div class="pager__total">{move || model().total_label()}</div>
            <div class="pager__controls">
                <button class="pager__button" type="button" disabled=move || !model().can_prev() on:click=move |_| go(0)>
                    "« First"
                </button>
                <button
                    class="pager__button"
                    type="button"
                    disabled=move || !model().can_prev()
                    on:click=move |_| go(model().page.saturating_sub(1))
                >
                    "‹ Prev"
                </button>
                <span class="pager__label">{move || model().page_label()}</span>
                <button
                    class="pager__button"
                    type="button"
                    disabled=move || !model().can_next()
                    on:click=move |_| go(model().page + 1)
                >
                    "Next ›"
                </button>
                <button
                    class="pager__button"
                    type="button"
                    disabled=move || !model().can_next()
                    on:click=move |_| go(model().last_page())
                >
                    "Last »"
                </button>
                <select
                    class="pager__size"
                    aria-label="Page size"
                    prop:value=move || model().size.to_string()
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                            filter.update(|f| f.set_size(size));
                        }
                    }
                >
                    {SIZE_OPTIONS
                        .into_iter()
                        .map(|n| view! { <option value=n.to_string()>{format!("{n}/page")}</option> })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}
