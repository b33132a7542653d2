//! Account page: the signed-in user's profile plus logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads `GET /api/account` into [`AuthState`] on mount. Logout forgets the
//! token, drops every cached sample query and the selection, then returns to
//! `/login`. Nothing is sent to the server on logout.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_display::ErrorDisplay;
use crate::net::api;
use crate::net::types::UserDto;
use crate::state::auth::AuthState;
use crate::state::filter::SampleFilter;
use crate::state::samples::SampleQueries;
use crate::state::selection::SelectionState;
use crate::state::ui::UiState;
use crate::util::auth::{LOGIN_PATH, install_unauth_redirect};
use crate::util::config::asset_url;
use crate::util::token;

fn activated_label(activated: Option<bool>) -> &'static str {
    match activated {
        Some(true) => "Yes",
        Some(false) => "No",
        None => "Unknown",
    }
}

/// Profile image URL, with server-relative paths resolved against the API origin.
fn profile_image(account: &UserDto) -> Option<String> {
    account
        .image_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(asset_url)
}

fn account_view(account: UserDto) -> impl IntoView {
    let image = profile_image(&account);
    let name = account.full_name().unwrap_or_default();
    view! {
        <section class="account-card">
            <h2 class="account-card__title">"Profile details"</h2>
            {image.map(|src| view! { <img class="account-card__avatar" src=src alt="Profile"/> })}
            <dl class="account-card__fields">
                <dt>"Login"</dt>
                <dd>{account.login.unwrap_or_default()}</dd>
                <dt>"Name"</dt>
                <dd>{name}</dd>
                <dt>"Email"</dt>
                <dd>{account.email.unwrap_or_default()}</dd>
                <dt>"Activated"</dt>
                <dd>{activated_label(account.activated)}</dd>
            </dl>
        </section>
    }
}

#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let filter = expect_context::<RwSignal<SampleFilter>>();
    let selection = expect_context::<RwSignal<SelectionState>>();
    let queries = expect_context::<SampleQueries>();
    let logged_out = RwSignal::new(false);

    let navigate = use_navigate();
    install_unauth_redirect(navigate.clone());
    Effect::new(move || {
        if logged_out.get() {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });

    Effect::new(move || {
        if !token::has_token() {
            return;
        }
        let Some(ticket) = auth.try_update(AuthState::begin_account_load) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api::fetch_account().await;
            if let Err(e) = &result {
                log::warn!("account load failed: status={} message={}", e.status, e.message);
            }
            auth.maybe_update(|a| a.finish_account_load(ticket, result));
        });
    });

    let on_logout = move |_| {
        api::logout();
        queries.clear();
        selection.update(SelectionState::clear);
        filter.update(SampleFilter::reset_session);
        ui.update(UiState::close_detail);
        auth.update(AuthState::signed_out);
        log::info!("signed out");
        logged_out.set(true);
    };

    view! {
        <div class="account-page">
            <header class="account-page__header">
                <h1>"Account"</h1>
                <button class="account-page__logout" type="button" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            {move || {
                let state = auth.get();
                if state.loading {
                    view! { <p class="account-page__hint">"Loading account..."</p> }.into_any()
                } else if let Some(error) = state.error {
                    view! { <ErrorDisplay error/> }.into_any()
                } else if let Some(account) = state.account {
                    account_view(account).into_any()
                } else {
                    ().into_any()
                }
            }}
        </div>
    }
}
