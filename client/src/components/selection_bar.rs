//! Selected-count banner with a clear action. Hidden when nothing is selected.

use leptos::prelude::*;

use crate::state::selection::SelectionState;

#[component]
pub fn SelectionBar() -> impl IntoView {
    let selection = expect_context::<RwSignal<SelectionState>>();
    let count = move || selection.with(SelectionState::len);
    let any_selected = move || !selection.with(SelectionState::is_empty);

    view! {
        <Show when=any_selected>
            <div class="selection-bar">
                <span class="selection-bar__count">{count}</span>
                <span class="selection-bar__label">"selected"</span>
                <button class="selection-bar__clear" type="button" on:click=move |_| selection.update(SelectionState::clear)>
                    "Clear selection"
                </button>
            </div>
        </Show>
    }
}
