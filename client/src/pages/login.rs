//! Login page: username + password against `POST /api/authenticate`.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful sign-in stores the returned token (local or session scope per
//! "Remember me") and moves to `/samples`. Visitors who already hold a token
//! see a short notice and are sent to `/account`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::error_display::ErrorDisplay;
use crate::net::api;
use crate::net::http::ApiError;
use crate::net::types::LoginVm;
use crate::state::auth::AuthState;
use crate::util::auth::install_authed_redirect;
use crate::util::token;

const BAD_CREDENTIALS: &str = "Bad credentials";

/// Require both fields; the username is trimmed, the password is not.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter a username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Heading for a failed sign-in. Rejected credentials get a generic heading
/// with the server body behind "Show details"; other errors show their message.
fn auth_error_title(error: &ApiError) -> Option<&'static str> {
    (error.detail() == Some(BAD_CREDENTIALS)).then_some("Authentication failed")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(true);
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let error = RwSignal::new(None::<ApiError>);
    let redirecting = RwSignal::new(false);

    let signed_in = RwSignal::new(false);

    Effect::new(move || redirecting.set(token::has_token()));
    install_authed_redirect(navigate.clone());

    Effect::new(move || {
        if signed_in.get() {
            navigate("/samples", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (user, pass) = match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());
        error.set(None);

        let vm = LoginVm { username: user, password: pass, remember_me: remember_me.get_untracked() };
        leptos::task::spawn_local(async move {
            match api::login(vm).await {
                Ok(_) => {
                    auth.update(AuthState::signed_in);
                    signed_in.set(true);
                }
                Err(e) => {
                    log::info!("login failed: status={} message={}", e.status, e.message);
                    error.set(Some(e));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <Show when=move || redirecting.get()>
                <p class="auth-page__notice">"Redirecting..."</p>
            </Show>
            <div class:hidden=move || redirecting.get()>
                <h1>"Login"</h1>
                <form class="auth-form" on:submit=on_submit autocomplete="on">
                    <label for="username" class="sr-only">"Username"</label>
                    <input
                        id="username"
                        name="username"
                        class="auth-form__input"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <div class="auth-form__password">
                        <label for="password" class="sr-only">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            class="auth-form__input"
                            placeholder="Password"
                            autocomplete="current-password"
                            type=move || if show_password.get() { "text" } else { "password" }
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="auth-form__reveal"
                            aria-label=move || if show_password.get() { "Hide password" } else { "Show password" }
                            aria-pressed=move || show_password.get().to_string()
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <label class="auth-form__check">
                        <input
                            type="checkbox"
                            prop:checked=move || remember_me.get()
                            on:change=move |ev| remember_me.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                    <Show when=move || !info.get().is_empty()>
                        <p class="auth-form__message">{move || info.get()}</p>
                    </Show>
                    {move || {
                        error
                            .get()
                            .map(|error| match auth_error_title(&error) {
                                Some(title) => view! { <ErrorDisplay error title/> }.into_any(),
                                None => view! { <ErrorDisplay error/> }.into_any(),
                            })
                    }}
                </form>
                <p class="auth-page__links">
                    <A href="/reset-password">"Forgot password?"</A>
                </p>
            </div>
        </div>
    }
}
