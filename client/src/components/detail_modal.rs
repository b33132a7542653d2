//! Full-screen sample detail modal opened from the map (double-click).
//!
//! SYSTEM CONTEXT
//! ==============
//! Open while `UiState::detail_id` is set. The record is fetched through
//! `SampleQueries::detail`, so reopening a recently viewed sample renders
//! from cache. Escape, the backdrop and the Close button all close it.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::error_display::ErrorDisplay;
use crate::components::sample_detail_viewer::SampleDetailViewer;
use crate::state::samples::SampleQueries;
use crate::state::ui::UiState;

#[component]
pub fn DetailModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let queries = expect_context::<SampleQueries>();
    let detail = queries.detail;

    Effect::new(move || {
        if let Some(id) = ui.with(|u| u.detail_id.clone()) {
            queries.load_detail(id);
        }
    });

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && ui.with_untracked(|u| u.detail_id.is_some()) {
                ui.update(UiState::close_detail);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let close = move |_: leptos::ev::MouseEvent| ui.update(UiState::close_detail);

    view! {
        <Show when=move || ui.with(|u| u.detail_id.is_some())>
            <div class="modal">
                <div class="modal__backdrop" on:click=close></div>
                <div class="modal__panel" role="dialog" aria-modal="true">
                    <div class="modal__header">
                        <h2>{move || format!("Sample {}", ui.with(|u| u.detail_id.clone().unwrap_or_default()))}</h2>
                        <div class="modal__actions">
                            <Show when=move || detail.with(|d| d.loading)>
                                <span class="spinner" aria-busy="true"></span>
                            </Show>
                            <button class="modal__close" type="button" on:click=close>"Close"</button>
                        </div>
                    </div>
                    <div class="modal__body">
                        {move || {
                            let state = detail.get();
                            if let Some(sample) = state.current_data().cloned() {
                                view! { <SampleDetailViewer sample/> }.into_any()
                            } else if let Some(error) = state.error {
                                view! { <ErrorDisplay error/> }.into_any()
                            } else if state.loading {
                                view! { <p class="modal__hint">"Loading…"</p> }.into_any()
                            } else {
                                view! { <p class="modal__hint">"No details found."</p> }.into_any()
                            }
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}
