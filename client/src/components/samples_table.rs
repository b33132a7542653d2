//! Paged samples table with a checkbox column.
//!
//! DESIGN
//! ======
//! Rows come from `SampleQueries::list`; previous rows stay on screen while
//! the next page loads. The header checkbox selects or deselects the whole
//! page and shows the indeterminate state for a partial page. Clicking a row
//! opens `/samples/{id}`; clicks on the checkbox do not. The click only
//! records the target; an effect performs the navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_display::ErrorDisplay;
use crate::components::pager::Pager;
use crate::state::samples::SampleQueries;
use crate::state::selection::{PageSelection, SelectionState};
use crate::util::sample_record::{format_coord, row_id, row_ids, row_lat, row_lon, row_name};

#[component]
pub fn SamplesTable() -> impl IntoView {
    let queries = expect_context::<SampleQueries>();
    let selection = expect_context::<RwSignal<SelectionState>>();
    let list = queries.list;
    let open_target = RwSignal::new(None::<String>);

    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(href) = open_target.get() {
            open_target.set(None);
            navigate(&href, NavigateOptions::default());
        }
    });

    let rows = move || list.with(|q| q.data.as_ref().map(|p| p.rows.clone()).unwrap_or_default());
    let page_ids = move || list.with(|q| q.data.as_ref().map(|p| row_ids(&p.rows)).unwrap_or_default());
    let page_status = move || {
        let ids = page_ids();
        selection.with(|s| s.page_status(&ids))
    };

    view! {
        <div class="samples-table">
            {move || list.with(|q| q.error.clone()).map(|error| view! { <ErrorDisplay error/> })}
            <Show when=move || list.with(|q| q.is_initial_load())>
                <p class="samples-table__hint">"Loading samples..."</p>
            </Show>
            <table class="samples-table__grid">
                <thead>
                    <tr>
                        <th class="samples-table__check">
                            <input
                                type="checkbox"
                                aria-label="Select all on page"
                                prop:checked=move || page_status() == PageSelection::All
                                prop:indeterminate=move || page_status() == PageSelection::Some
                                on:change=move |_| {
                                    let ids = page_ids();
                                    selection.update(|s| s.toggle_page(&ids));
                                }
                            />
                        </th>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Latitude"</th>
                        <th>"Longitude"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows()
                            .into_iter()
                            .enumerate()
                            .map(|(idx, row)| {
                                let id = row_id(&row, idx);
                                let href = format!("/samples/{}", urlencoding::encode(&id));
                                let id_for_check = id.clone();
                                let id_for_toggle = id.clone();
                                view! {
                                    <tr class="samples-table__row" on:click=move |_| open_target.set(Some(href.clone()))>
                                        <td class="samples-table__check">
                                            <input
                                                type="checkbox"
                                                aria-label=format!("Select sample {id}")
                                                prop:checked=move || selection.with(|s| s.contains(&id_for_check))
                                                on:click=move |ev| ev.stop_propagation()
                                                on:change=move |_| selection.update(|s| s.toggle(&id_for_toggle))
                                            />
                                        </td>
                                        <td class="samples-table__id">{id.clone()}</td>
                                        <td>{row_name(&row)}</td>
                                        <td>{format_coord(row_lat(&row))}</td>
                                        <td>{format_coord(row_lon(&row))}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            <Pager/>
        </div>
    }
}
