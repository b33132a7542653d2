//! Samples screen: filters, count badge, map/table views and detail modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! All server traffic for the screen is driven from here by effects over
//! the shared [`SampleFilter`]:
//!
//! - the table page re-queries when paging or settled criteria change
//! - the count badge and the map re-query when settled criteria change
//! - the map's geo features are fetched only while the map view is shown
//!
//! The map stays mounted while the table is shown so its camera survives a
//! view switch.

#[cfg(test)]
#[path = "samples_test.rs"]
mod samples_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::detail_modal::DetailModal;
use crate::components::error_display::ErrorDisplay;
use crate::components::filter_bar::FilterBar;
use crate::components::samples_map::SamplesMap;
use crate::components::samples_table::SamplesTable;
use crate::components::selection_bar::SelectionBar;
use crate::state::filter::SampleFilter;
use crate::state::pagination::group_thousands;
use crate::state::samples::{ListRequest, SampleQueries};
use crate::state::ui::{UiState, ViewMode};
use crate::util::auth::install_unauth_redirect;
use crate::util::token;

/// Badge text: the grouped total, or nothing until a count has arrived.
fn count_badge(count: Option<u64>) -> String {
    count.map(group_thousands).unwrap_or_default()
}

#[component]
pub fn SamplesPage() -> impl IntoView {
    let filter = expect_context::<RwSignal<SampleFilter>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let queries = expect_context::<SampleQueries>();

    install_unauth_redirect(use_navigate());

    let list_request = Memo::new(move |_| filter.with(ListRequest::from_filter));
    let criteria = Memo::new(move |_| filter.with(SampleFilter::criteria));
    let map_shown = Signal::derive(move || ui.with(|u| u.view_mode == ViewMode::Map));

    Effect::new(move || {
        let request = list_request.get();
        if token::has_token() {
            queries.load_list(request);
        }
    });

    Effect::new(move || {
        let criteria = criteria.get();
        if token::has_token() {
            queries.load_count(criteria);
        }
    });

    Effect::new(move || {
        let criteria = criteria.get();
        if map_shown.get() && token::has_token() {
            queries.load_geo(criteria);
        }
    });

    // Keep the pager's total in step with the latest table page.
    Effect::new(move || {
        let total = queries.list.with(|q| q.data.as_ref().map(|p| p.total_count));
        if let Some(total) = total {
            filter.maybe_update(|f| {
                let before = (f.total_count, f.page);
                f.set_total_count(total);
                before != (f.total_count, f.page)
            });
        }
    });

    let count_loading = move || queries.count.with(|q| q.loading);
    let count_text = move || queries.count.with(|q| count_badge(q.data));
    let set_mode = move |mode: ViewMode| ui.update(|u| u.view_mode = mode);

    view! {
        <div class="samples-page">
            <header class="samples-page__header">
                <span class="count-badge" aria-live="polite" aria-busy=move || count_loading().to_string()>
                    <Show when=count_loading fallback=move || view! { <span>{count_text}</span> }>
                        <span class="spinner spinner--small"></span>
                    </Show>
                </span>
                <h1 class="samples-page__title">"Samples"</h1>
            </header>
            {move || queries.count.with(|q| q.error.clone()).map(|error| view! { <ErrorDisplay error title="Count unavailable"/> })}
            <div class="samples-page__toolbar">
                <FilterBar/>
                <div class="view-toggle" role="tablist" aria-label="View mode">
                    <button
                        type="button"
                        title="Map view"
                        class="view-toggle__button"
                        aria-pressed=move || map_shown.get().to_string()
                        on:click=move |_| set_mode(ViewMode::Map)
                    >
                        "Map"
                    </button>
                    <button
                        type="button"
                        title="Table view"
                        class="view-toggle__button"
                        aria-pressed=move || (!map_shown.get()).to_string()
                        on:click=move |_| set_mode(ViewMode::Table)
                    >
                        "Table"
                    </button>
                </div>
            </div>
            <SelectionBar/>
            <div class:hidden=move || !map_shown.get()>
                {move || queries.geo.with(|q| q.error.clone()).map(|error| view! { <ErrorDisplay error title="Map data unavailable"/> })}
                <SamplesMap visible=map_shown/>
            </div>
            <div class:hidden=move || map_shown.get()>
                <SamplesTable/>
            </div>
            <DetailModal/>
        </div>
    }
}
