//! Stand-alone sample page (`/samples/:id`), reached from the table.
//!
//! Shares the detail query with the modal, so a sample opened in either place
//! is served from cache in the other.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::error_display::ErrorDisplay;
use crate::components::sample_detail_viewer::SampleDetailViewer;
use crate::state::samples::SampleQueries;
use crate::util::auth::install_unauth_redirect;
use crate::util::token;

const SAMPLES_PATH: &str = "/samples";

#[component]
pub fn SampleDetailPage() -> impl IntoView {
    let params = use_params_map();
    let queries = expect_context::<SampleQueries>();
    let detail = queries.detail;
    let go_back = RwSignal::new(false);

    let navigate = use_navigate();
    install_unauth_redirect(navigate.clone());

    let sample_id = Memo::new(move |_| {
        params
            .with(|p| p.get("id"))
            .map(|id| id.trim().to_owned())
            .filter(|id| !id.is_empty())
    });

    Effect::new(move || {
        if let Some(id) = sample_id.get() {
            if token::has_token() {
                queries.load_detail(id);
            }
        }
    });

    // Prefer browser history so the table keeps its page; fall back to the list.
    Effect::new(move || {
        if !go_back.get() {
            return;
        }
        go_back.set(false);
        #[cfg(feature = "hydrate")]
        {
            let history = web_sys::window().and_then(|w| w.history().ok());
            if let Some(history) = history.filter(|h| h.length().unwrap_or(0) > 1) {
                let _ = history.back();
                return;
            }
        }
        navigate(SAMPLES_PATH, NavigateOptions::default());
    });

    view! {
        <div class="sample-page">
            <header class="sample-page__header">
                <button class="sample-page__back" type="button" on:click=move |_| go_back.set(true)>
                    "Back"
                </button>
                <h1>{move || format!("Sample {}", sample_id.get().unwrap_or_default())}</h1>
                <Show when=move || detail.with(|d| d.loading)>
                    <span class="spinner" aria-busy="true"></span>
                </Show>
            </header>
            {move || {
                if sample_id.get().is_none() {
                    return view! { <p class="sample-page__hint">"No sample id provided."</p> }.into_any();
                }
                let state = detail.get();
                if let Some(sample) = state.current_data().cloned() {
                    view! { <SampleDetailViewer sample/> }.into_any()
                } else if let Some(error) = state.error {
                    view! { <ErrorDisplay error/> }.into_any()
                } else {
                    view! { <p class="sample-page__hint">"Loading sample…"</p> }.into_any()
                }
            }}
        </div>
    }
}
