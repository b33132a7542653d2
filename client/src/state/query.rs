//! Last-request-wins query state with keep-previous-data and a small cache.
//!
//! DESIGN
//! ======
//! Every fetch takes a ticket from a monotonically increasing
//! [`RequestTracker`]. A response is applied only when its ticket is still
//! the newest, so a slow response for an old filter never overwrites a newer
//! one. Nothing is cancelled on the wire; stale responses are dropped here.
//!
//! While a request is in flight the previous data stays visible. Results are
//! also remembered per query key in a bounded [`QueryCache`], so returning to
//! a key (paging back, undoing a filter) renders at once while the refetch
//! runs.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::collections::VecDeque;
use std::future::Future;

use leptos::prelude::*;

use crate::net::http::ApiError;

/// Default number of results remembered per query.
pub const QUERY_CACHE_CAPACITY: usize = 16;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// Bounded key → value memory, evicting the oldest insert first.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryCache<T> {
    entries: VecDeque<(String, T)>,
    capacity: usize,
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self::with_capacity(QUERY_CACHE_CAPACITY)
    }
}

impl<T> QueryCache<T> {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: VecDeque::new(), capacity: capacity.max(1) }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn insert(&mut self, key: String, value: T) {
        self.entries.retain(|(k, _)| *k != key);
        self.entries.push_back((key, value));
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub loading: bool,
    /// Key of the most recent request.
    pub key: Option<String>,
    /// Key `data` was fetched for; differs from `key` while previous data is
    /// shown for a new request.
    pub data_key: Option<String>,
    tracker: RequestTracker,
    /// Tickets at or below this were issued before the last `clear`.
    floor: u64,
    cache: QueryCache<T>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            loading: false,
            key: None,
            data_key: None,
            tracker: RequestTracker::default(),
            floor: 0,
            cache: QueryCache::default(),
        }
    }
}

impl<T: Clone> QueryState<T> {
    /// Start a request for `key`. A cached result for the key replaces the
    /// visible data immediately; otherwise the previous data stays. Any
    /// earlier error is cleared.
    pub fn begin(&mut self, key: &str) -> u64 {
        if let Some(hit) = self.cache.get(key) {
            self.data = Some(hit.clone());
            self.data_key = Some(key.to_owned());
        }
        self.key = Some(key.to_owned());
        self.error = None;
        self.loading = true;
        self.tracker.issue()
    }

    /// Apply a response. Successful results are cached under their own key
    /// even when stale; only the newest ticket touches the visible state.
    /// Returns whether the visible state changed.
    pub fn resolve(&mut self, ticket: u64, key: &str, result: Result<T, ApiError>) -> bool {
        if ticket <= self.floor {
            return false;
        }
        let current = self.tracker.is_current(ticket);
        match result {
            Ok(value) => {
                if current {
                    self.cache.insert(key.to_owned(), value.clone());
                    self.data = Some(value);
                    self.data_key = Some(key.to_owned());
                    self.error = None;
                } else {
                    self.cache.insert(key.to_owned(), value);
                }
            }
            Err(err) => {
                if current {
                    self.error = Some(err);
                }
            }
        }
        if current {
            self.loading = false;
        }
        current
    }

    /// Data fetched for the most recent request's key, if any.
    #[must_use]
    pub fn current_data(&self) -> Option<&T> {
        if self.data_key.is_some() && self.data_key == self.key {
            self.data.as_ref()
        } else {
            None
        }
    }

    /// True while loading with nothing to show yet.
    #[must_use]
    pub fn is_initial_load(&self) -> bool {
        self.loading && self.data.is_none()
    }

    #[must_use]
    pub fn cache(&self) -> &QueryCache<T> {
        &self.cache
    }

    /// Forget data, errors and cache. Responses still in flight are
    /// discarded entirely, including from the cache.
    pub fn clear(&mut self) {
        self.data = None;
        self.error = None;
        self.loading = false;
        self.key = None;
        self.data_key = None;
        self.cache.clear();
        self.floor = self.tracker.issue();
    }
}

/// Run `fetch` for `key` against `state`, applying the result last-request-wins.
pub fn run_query<T, Fut>(state: RwSignal<QueryState<T>>, key: String, fetch: Fut)
where
    T: Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let Some(ticket) = state.try_update(|s| s.begin(&key)) else {
        return;
    };
    leptos::task::spawn_local(async move {
        let result = fetch.await;
        if let Err(err) = &result {
            log::debug!("query {key}: {}", err.message);
        }
        state.maybe_update(|s| s.resolve(ticket, &key, result));
    });
}
