//! Self-service registration against `POST /api/register`.
//!
//! The account is created inactive; the server mails an activation link that
//! lands on `/activate`. The strength hint shows while the typed password is
//! too weak, and submit re-checks strength before the confirmation.

use leptos::prelude::*;

use crate::components::error_display::ErrorDisplay;
use crate::net::api;
use crate::net::http::ApiError;
use crate::net::types::RegisterVm;
use crate::util::validation::{PASSWORD_STRENGTH_HINT, check_new_password, is_strong_password};

const REGISTERED_NOTICE: &str = "Registration successful. Check your email to activate your account.";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let login = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let validation = RwSignal::new(String::new());
    let error = RwSignal::new(None::<ApiError>);
    let registered = RwSignal::new(false);

    let show_hint = move || password.with(|p| !p.is_empty() && !is_strong_password(p));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        registered.set(false);
        error.set(None);
        if let Err(msg) = check_new_password(&password.get_untracked(), &confirm.get_untracked(), true) {
            validation.set(msg.to_owned());
            return;
        }
        validation.set(String::new());
        busy.set(true);

        let vm = RegisterVm {
            login: login.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
            lang_key: "en".to_owned(),
        };
        leptos::task::spawn_local(async move {
            match api::register(vm).await {
                Ok(()) => {
                    login.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    confirm.set(String::new());
                    registered.set(true);
                }
                Err(e) => {
                    log::info!("registration rejected: status={} message={}", e.status, e.message);
                    error.set(Some(e));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Register"</h1>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-form__input"
                    placeholder="Login"
                    autocomplete="username"
                    required
                    prop:value=move || login.get()
                    on:input=move |ev| login.set(event_target_value(&ev))
                />
                <input
                    class="auth-form__input"
                    placeholder="Email"
                    type="email"
                    autocomplete="email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-form__input"
                    placeholder="Password"
                    type="password"
                    autocomplete="new-password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        password.set(event_target_value(&ev));
                        validation.set(String::new());
                    }
                />
                <Show when=show_hint>
                    <p class="auth-form__hint">{PASSWORD_STRENGTH_HINT}</p>
                </Show>
                <input
                    class="auth-form__input"
                    placeholder="Confirm password"
                    type="password"
                    autocomplete="new-password"
                    required
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Registering..." } else { "Register" }}
                </button>
                <Show when=move || !validation.get().is_empty()>
                    <p class="auth-form__error">{move || validation.get()}</p>
                </Show>
                {move || error.get().map(|error| view! { <ErrorDisplay error/> })}
                <Show when=move || registered.get()>
                    <p class="auth-form__success">{REGISTERED_NOTICE}</p>
                </Show>
            </form>
        </div>
    }
}
