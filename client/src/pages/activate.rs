//! Account activation landing page (`/activate?key=...`).
//!
//! The key is read once on mount and sent to `GET /api/activate`; a reload
//! does not re-send it. OK stays disabled until the outcome is known.

#[cfg(test)]
#[path = "activate_test.rs"]
mod activate_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api;
use crate::util::auth::LOGIN_PATH;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ActivationStatus {
    Pending,
    Activated,
    MissingKey,
    Rejected,
}

impl ActivationStatus {
    fn message(self) -> &'static str {
        match self {
            Self::Pending => "Activating your account...",
            Self::Activated => "Your account has been activated",
            Self::MissingKey => "Invalid Activation Link",
            Self::Rejected => "Invalid Activation Link (Already activated?)",
        }
    }

    fn css_modifier(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Activated => "success",
            Self::MissingKey | Self::Rejected => "error",
        }
    }

    fn from_result<E>(result: &Result<(), E>) -> Self {
        if result.is_ok() { Self::Activated } else { Self::Rejected }
    }
}

/// Activation key from the query string; blank keys count as missing.
fn activation_key(raw: Option<String>) -> Option<String> {
    raw.map(|k| k.trim().to_owned()).filter(|k| !k.is_empty())
}

#[component]
pub fn ActivatePage() -> impl IntoView {
    let query = use_query_map();
    let status = RwSignal::new(ActivationStatus::Pending);
    let started = StoredValue::new(false);
    let done = RwSignal::new(false);

    Effect::new(move || {
        if started.get_value() {
            return;
        }
        started.set_value(true);
        let Some(key) = activation_key(query.with_untracked(|q| q.get("key"))) else {
            status.set(ActivationStatus::MissingKey);
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api::activate_account(&key).await;
            if let Err(e) = &result {
                log::info!("activation rejected: status={} message={}", e.status, e.message);
            }
            status.set(ActivationStatus::from_result(&result));
        });
    });

    let navigate = use_navigate();
    Effect::new(move || {
        if done.get() {
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <div class="auth-page">
            <h1>"Account Activation"</h1>
            <div class=move || format!("auth-page__status auth-page__status--{}", status.get().css_modifier())>
                {move || status.get().message()}
            </div>
            <button
                class="auth-form__submit"
                type="button"
                disabled=move || status.get() == ActivationStatus::Pending
                on:click=move |_| done.set(true)
            >
                "OK"
            </button>
        </div>
    }
}
