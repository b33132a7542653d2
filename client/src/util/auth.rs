//! Route guards shared by protected and guest-only pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages (`/account`, `/samples`, `/samples/:id`) send visitors
//! without a stored session token to `/login`. The login page sends visitors
//! who already hold a token to `/account`. The token is the only signal: an
//! expired token is discovered by the first failing request, not here.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::util::token;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/account";

/// Where a visitor should be sent, given whether the page needs a session.
#[must_use]
pub fn redirect_target(requires_auth: bool, has_token: bool) -> Option<&'static str> {
    match (requires_auth, has_token) {
        (true, false) => Some(LOGIN_PATH),
        (false, true) => Some(HOME_PATH),
        _ => None,
    }
}

fn install_redirect<F>(requires_auth: bool, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = redirect_target(requires_auth, token::has_token()) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Redirect to `/login` when no session token is stored.
pub fn install_unauth_redirect<F>(navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_redirect(true, navigate);
}

/// Redirect to `/account` when a session token is already stored.
pub fn install_authed_redirect<F>(navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_redirect(false, navigate);
}
