//! Second step of a password reset (`/reset/finish?key=...`).
//!
//! The key from the emailed link is captured once on mount. Any server
//! rejection is reported as an invalid or expired link.

#[cfg(test)]
#[path = "reset_finish_test.rs"]
mod reset_finish_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api;
use crate::util::auth::LOGIN_PATH;
use crate::util::validation::check_new_password;

const RESET_DONE: &str = "Your password has been reset. You can now log in.";
const RESET_REJECTED: &str = "Invalid or expired reset link";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
enum ResetOutcome {
    #[default]
    Idle,
    Failed(String),
    Done,
}

/// Local checks before the key is spent. Strength is the server's call here.
fn check_reset_input(password: &str, confirm: &str) -> Result<(), ResetOutcome> {
    check_new_password(password, confirm, false).map_err(|msg| ResetOutcome::Failed(msg.to_owned()))
}

fn outcome_of<E>(result: &Result<(), E>) -> ResetOutcome {
    match result {
        Ok(()) => ResetOutcome::Done,
        Err(_) => ResetOutcome::Failed(RESET_REJECTED.to_owned()),
    }
}

#[component]
pub fn ResetFinishPage() -> impl IntoView {
    let query = use_query_map();
    let key = StoredValue::new(query.with_untracked(|q| q.get("key")).unwrap_or_default());

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let outcome = RwSignal::new(ResetOutcome::Idle);
    let done = RwSignal::new(false);

    let navigate = use_navigate();
    Effect::new(move || {
        if done.get() {
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let new_password = password.get_untracked();
        if let Err(failed) = check_reset_input(&new_password, &confirm.get_untracked()) {
            outcome.set(failed);
            return;
        }
        busy.set(true);
        outcome.set(ResetOutcome::Idle);
        let key = key.get_value();
        leptos::task::spawn_local(async move {
            let result = api::finish_password_reset(&key, &new_password).await;
            if let Err(e) = &result {
                log::info!("password reset rejected: status={} message={}", e.status, e.message);
            }
            outcome.set(outcome_of(&result));
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Set New Password"</h1>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-form__input"
                    placeholder="New password"
                    type="password"
                    autocomplete="new-password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <input
                    class="auth-form__input"
                    placeholder="Confirm new password"
                    type="password"
                    autocomplete="new-password"
                    required
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                    "Save password"
                </button>
            </form>
            {move || match outcome.get() {
                ResetOutcome::Failed(msg) => Some(view! { <p class="auth-form__error">{msg}</p> }.into_any()),
                ResetOutcome::Done => Some(
                    view! {
                        <div class="auth-page__done">
                            <p class="auth-form__success">{RESET_DONE}</p>
                            <button type="button" on:click=move |_| done.set(true)>"OK"</button>
                        </div>
                    }
                    .into_any(),
                ),
                ResetOutcome::Idle => None,
            }}
        </div>
    }
}
