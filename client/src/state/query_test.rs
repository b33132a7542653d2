use super::*;

fn err(msg: &str) -> ApiError {
    ApiError::from_response(500, msg)
}

// =============================================================
// RequestTracker
// =============================================================

#[test]
fn tracker_tickets_increase() {
    let mut t = RequestTracker::default();
    let a = t.issue();
    let b = t.issue();
    assert!(b > a);
    assert!(t.is_current(b));
    assert!(!t.is_current(a));
}

// =============================================================
// QueryState
// =============================================================

#[test]
fn resolve_applies_current_ticket() {
    let mut q = QueryState::<u32>::default();
    let ticket = q.begin("k");
    assert!(q.is_initial_load());
    assert!(q.resolve(ticket, "k", Ok(7)));
    assert_eq!(q.data, Some(7));
    assert!(!q.loading);
}

#[test]
fn stale_response_never_overwrites_newer_result() {
    let mut q = QueryState::<u32>::default();
    let old = q.begin("a");
    let new = q.begin("b");
    assert!(q.resolve(new, "b", Ok(2)));
    assert!(!q.resolve(old, "a", Ok(1)));
    assert_eq!(q.data, Some(2));
    assert_eq!(q.key.as_deref(), Some("b"));
}

#[test]
fn stale_response_before_newer_keeps_loading() {
    let mut q = QueryState::<u32>::default();
    let old = q.begin("a");
    let _new = q.begin("b");
    assert!(!q.resolve(old, "a", Ok(1)));
    assert!(q.loading);
    assert_eq!(q.data, None);
}

#[test]
fn previous_data_kept_while_fetching() {
    let mut q = QueryState::<u32>::default();
    let t = q.begin("a");
    q.resolve(t, "a", Ok(1));
    q.begin("b");
    assert!(q.loading);
    assert_eq!(q.data, Some(1));
    assert!(!q.is_initial_load());
}

#[test]
fn error_keeps_previous_data() {
    let mut q = QueryState::<u32>::default();
    let t = q.begin("a");
    q.resolve(t, "a", Ok(1));
    let t = q.begin("b");
    q.resolve(t, "b", Err(err("boom")));
    assert_eq!(q.data, Some(1));
    assert_eq!(q.error.as_ref().map(|e| e.message.as_str()), Some("boom"));
    let t = q.begin("b");
    q.resolve(t, "b", Ok(2));
    assert_eq!(q.error, None);
}

#[test]
fn cached_key_renders_immediately() {
    let mut q = QueryState::<u32>::default();
    let t = q.begin("a");
    q.resolve(t, "a", Ok(1));
    let t = q.begin("b");
    q.resolve(t, "b", Ok(2));
    q.begin("a");
    assert_eq!(q.data, Some(1));
    assert!(q.loading);
}

#[test]
fn stale_success_is_still_cached() {
    let mut q = QueryState::<u32>::default();
    let old = q.begin("a");
    let new = q.begin("b");
    q.resolve(old, "a", Ok(1));
    q.resolve(new, "b", Ok(2));
    assert_eq!(q.cache().get("a"), Some(&1));
}

#[test]
fn clear_forgets_and_invalidates_in_flight() {
    let mut q = QueryState::<u32>::default();
    let t = q.begin("a");
    q.clear();
    assert!(!q.resolve(t, "a", Ok(1)));
    assert_eq!(q.data, None);
    assert!(q.cache().is_empty());
    let t = q.begin("a");
    assert!(q.resolve(t, "a", Ok(2)));
    assert_eq!(q.data, Some(2));
}

// =============================================================
// QueryCache
// =============================================================

#[test]
fn cache_evicts_oldest() {
    let mut c = QueryCache::with_capacity(2);
    c.insert("a".to_owned(), 1);
    c.insert("b".to_owned(), 2);
    c.insert("c".to_owned(), 3);
    assert_eq!(c.len(), 2);
    assert_eq!(c.get("a"), None);
    assert_eq!(c.get("c"), Some(&3));
}

#[test]
fn cache_reinsert_refreshes_position() {
    let mut c = QueryCache::with_capacity(2);
    c.insert("a".to_owned(), 1);
    c.insert("b".to_owned(), 2);
    c.insert("a".to_owned(), 10);
    c.insert("c".to_owned(), 3);
    assert_eq!(c.get("a"), Some(&10));
    assert_eq!(c.get("b"), None);
}

#[test]
fn current_data_hides_previous_key() {
    let mut q = QueryState::<u32>::default();
    let t = q.begin("a");
    q.resolve(t, "a", Ok(1));
    assert_eq!(q.current_data(), Some(&1));
    let t = q.begin("b");
    assert_eq!(q.data, Some(1));
    assert_eq!(q.current_data(), None);
    q.resolve(t, "b", Ok(2));
    assert_eq!(q.current_data(), Some(&2));
}
