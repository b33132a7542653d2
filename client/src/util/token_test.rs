use std::cell::RefCell;
use std::collections::HashMap;

use super::*;

#[derive(Default)]
struct MemoryStorage(RefCell<HashMap<String, String>>);

impl StorageArea for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.0.borrow_mut().remove(key);
    }
}

// =============================================================
// write_token
// =============================================================

#[test]
fn remembered_token_goes_to_local_scope() {
    let (local, session) = (MemoryStorage::default(), MemoryStorage::default());
    session.set(ACCESS_TOKEN_STORAGE_KEY, "old");
    write_token(&local, &session, "t1", true);
    assert_eq!(local.get(ACCESS_TOKEN_STORAGE_KEY).as_deref(), Some("t1"));
    assert!(session.get(ACCESS_TOKEN_STORAGE_KEY).is_none());
}

#[test]
fn session_token_goes_to_session_scope() {
    let (local, session) = (MemoryStorage::default(), MemoryStorage::default());
    local.set(ACCESS_TOKEN_STORAGE_KEY, "old");
    write_token(&local, &session, "t2", false);
    assert_eq!(session.get(ACCESS_TOKEN_STORAGE_KEY).as_deref(), Some("t2"));
    assert!(local.get(ACCESS_TOKEN_STORAGE_KEY).is_none());
}

// =============================================================
// read_token / erase_token
// =============================================================

#[test]
fn read_prefers_local_scope() {
    let (local, session) = (MemoryStorage::default(), MemoryStorage::default());
    local.set(ACCESS_TOKEN_STORAGE_KEY, "local");
    session.set(ACCESS_TOKEN_STORAGE_KEY, "session");
    assert_eq!(read_token(&local, &session).as_deref(), Some("local"));
}

#[test]
fn read_falls_back_to_session_scope() {
    let (local, session) = (MemoryStorage::default(), MemoryStorage::default());
    session.set(ACCESS_TOKEN_STORAGE_KEY, "session");
    assert_eq!(read_token(&local, &session).as_deref(), Some("session"));
}

#[test]
fn empty_token_reads_as_absent() {
    let (local, session) = (MemoryStorage::default(), MemoryStorage::default());
    local.set(ACCESS_TOKEN_STORAGE_KEY, "");
    assert!(read_token(&local, &session).is_none());
}

#[test]
fn erase_clears_both_scopes() {
    let (local, session) = (MemoryStorage::default(), MemoryStorage::default());
    local.set(ACCESS_TOKEN_STORAGE_KEY, "a");
    session.set(ACCESS_TOKEN_STORAGE_KEY, "b");
    erase_token(&local, &session);
    assert!(read_token(&local, &session).is_none());
}

#[test]
fn stored_token_is_absent_outside_browser() {
    assert!(stored_token().is_none());
    assert!(!has_token());
}
