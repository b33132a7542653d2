//! Inline API error with an optional expandable JSON body.

use leptos::prelude::*;

use crate::net::http::ApiError;
use crate::util::json_view::pretty;

/// Renders `title` (or the error message) and, when the server sent a JSON
/// body, a "Show details" toggle revealing it indented.
#[component]
pub fn ErrorDisplay(error: ApiError, #[prop(optional, into)] title: Option<String>) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let heading = title.unwrap_or_else(|| error.message.clone());
    let body = error.body.as_ref().filter(|b| b.is_object() || b.is_array()).map(pretty);
    let has_body = body.is_some();

    view! {
        <div class="error-display" role="alert">
            <p class="error-display__title">{heading}</p>
            <Show when=move || has_body>
                <button class="error-display__toggle" type="button" on:click=move |_| expanded.update(|v| *v = !*v)>
                    {move || if expanded.get() { "Hide details" } else { "Show details" }}
                </button>
            </Show>
            {move || {
                expanded
                    .get()
                    .then(|| body.clone())
                    .flatten()
                    .map(|text| view! { <pre class="error-display__body">{text}</pre> })
            }}
        </div>
    }
}
