//! Session token persistence.
//!
//! DESIGN
//! ======
//! The token lives under one key in exactly one browser scope:
//! `localStorage` when the user asked to be remembered, `sessionStorage`
//! otherwise. Writing to one scope removes it from the other; lookups prefer
//! `localStorage`. Storage access goes through [`StorageArea`] so the scope
//! rules can be exercised without a browser.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

pub const ACCESS_TOKEN_STORAGE_KEY: &str = "ls_access_token";

/// Minimal key/value surface shared by `localStorage` and `sessionStorage`.
pub trait StorageArea {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[cfg(feature = "hydrate")]
impl StorageArea for web_sys::Storage {
    fn get(&self, key: &str) -> Option<String> {
        self.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.set_item(key, value) {
            log::warn!("storage write failed for {key}: {e:?}");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = self.remove_item(key) {
            log::warn!("storage remove failed for {key}: {e:?}");
        }
    }
}

/// Read the token, preferring the persistent scope.
pub fn read_token(local: &impl StorageArea, session: &impl StorageArea) -> Option<String> {
    local
        .get(ACCESS_TOKEN_STORAGE_KEY)
        .or_else(|| session.get(ACCESS_TOKEN_STORAGE_KEY))
        .filter(|t| !t.is_empty())
}

/// Store the token in the scope chosen by `remember`, clearing the other.
pub fn write_token(local: &impl StorageArea, session: &impl StorageArea, token: &str, remember: bool) {
    if remember {
        local.set(ACCESS_TOKEN_STORAGE_KEY, token);
        session.remove(ACCESS_TOKEN_STORAGE_KEY);
    } else {
        session.set(ACCESS_TOKEN_STORAGE_KEY, token);
        local.remove(ACCESS_TOKEN_STORAGE_KEY);
    }
}

/// Remove the token from both scopes.
pub fn erase_token(local: &impl StorageArea, session: &impl StorageArea) {
    local.remove(ACCESS_TOKEN_STORAGE_KEY);
    session.remove(ACCESS_TOKEN_STORAGE_KEY);
}

#[cfg(feature = "hydrate")]
fn browser_scopes() -> Option<(web_sys::Storage, web_sys::Storage)> {
    let window = web_sys::window()?;
    let local = window.local_storage().ok().flatten()?;
    let session = window.session_storage().ok().flatten()?;
    Some((local, session))
}

/// The stored session token, if any. Always `None` during SSR.
pub fn stored_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let (local, session) = browser_scopes()?;
        read_token(&local, &session)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

pub fn has_token() -> bool {
    stored_token().is_some()
}

/// Persist a freshly issued token.
pub fn store_token(token: &str, remember: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some((local, session)) = browser_scopes() {
            write_token(&local, &session, token, remember);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, remember);
    }
}

/// Forget the session token in every scope.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some((local, session)) = browser_scopes() {
            erase_token(&local, &session);
        }
    }
}
