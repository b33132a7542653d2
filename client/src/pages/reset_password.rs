//! Password reset request (`/reset-password`).
//!
//! The server answers the same way whether or not the email is known, so the
//! success notice is deliberately non-committal.

use leptos::prelude::*;

use crate::components::error_display::ErrorDisplay;
use crate::net::api;
use crate::net::http::ApiError;

const SENT_NOTICE: &str = "If an account exists for this email, a reset link has been sent.";

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let sent = RwSignal::new(false);
    let error = RwSignal::new(None::<ApiError>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let address = email.get_untracked().trim().to_owned();
        if address.is_empty() {
            return;
        }
        busy.set(true);
        sent.set(false);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::request_password_reset(&address).await {
                Ok(()) => sent.set(true),
                Err(e) => {
                    log::info!("reset request failed: status={} message={}", e.status, e.message);
                    error.set(Some(e));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Reset Password"</h1>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-form__input"
                    placeholder="Email"
                    type="email"
                    autocomplete="email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Sending..." } else { "Reset Password" }}
                </button>
                {move || error.get().map(|error| view! { <ErrorDisplay error/> })}
                <Show when=move || sent.get()>
                    <p class="auth-form__success">{SENT_NOTICE}</p>
                </Show>
            </form>
        </div>
    }
}
