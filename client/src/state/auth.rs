//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `has_session` mirrors whether a token is stored and drives the sidebar
//! links; `account` is filled by the account page from `GET /api/account`.
//! Route guards read the token directly (see `util::auth`).
//!
//! Each account load carries a ticket. Signing out moves the ticket on, so a
//! response that lands after logout is dropped instead of restoring the old
//! profile.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::http::ApiError;
use crate::net::types::UserDto;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub has_session: bool,
    pub account: Option<UserDto>,
    pub loading: bool,
    pub error: Option<ApiError>,
    load_ticket: u64,
}

impl AuthState {
    pub fn signed_in(&mut self) {
        self.has_session = true;
        self.error = None;
    }

    /// Drop everything tied to the previous session.
    pub fn signed_out(&mut self) {
        *self = Self { load_ticket: self.load_ticket + 1, ..Self::default() };
    }

    /// Returns the ticket to hand back to [`Self::finish_account_load`].
    pub fn begin_account_load(&mut self) -> u64 {
        self.load_ticket += 1;
        self.loading = true;
        self.error = None;
        self.load_ticket
    }

    /// Apply a load result if `ticket` is still current. Returns whether it
    /// was applied.
    pub fn finish_account_load(&mut self, ticket: u64, result: Result<UserDto, ApiError>) -> bool {
        if ticket != self.load_ticket {
            return false;
        }
        self.loading = false;
        match result {
            Ok(account) => {
                self.account = Some(account);
                self.error = None;
            }
            Err(err) => {
                self.account = None;
                self.error = Some(err);
            }
        }
        true
    }
}
