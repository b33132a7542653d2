//! Query state for the samples screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`QueryState`] per server query: the table page, the total count, the
//! map's geo features and the open sample detail. Each is keyed by its request
//! path, so equal criteria share cache entries and the key doubles as a log
//! label.

#[cfg(test)]
#[path = "samples_test.rs"]
mod samples_test;

use geojson::FeatureCollection;
use leptos::prelude::*;

use super::filter::SampleFilter;
use super::query::{QueryState, run_query};
use crate::net::api;
use crate::net::types::{SampleCriteria, SamplePage, SampleRecord};

/// Cache key and request inputs for the table page.
#[derive(Clone, Debug, PartialEq)]
pub struct ListRequest {
    pub key: String,
    pub page: u32,
    pub size: u32,
    pub criteria: SampleCriteria,
}

impl ListRequest {
    #[must_use]
    pub fn from_filter(filter: &SampleFilter) -> Self {
        let criteria = filter.criteria();
        let key = api::samples_list_path(filter.page, filter.size, &criteria);
        Self { key, page: filter.page, size: filter.size, criteria }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SampleQueries {
    pub list: RwSignal<QueryState<SamplePage>>,
    pub count: RwSignal<QueryState<u64>>,
    pub geo: RwSignal<QueryState<FeatureCollection>>,
    pub detail: RwSignal<QueryState<SampleRecord>>,
}

impl SampleQueries {
    #[must_use]
    pub fn new() -> Self {
        Self {
            list: RwSignal::new(QueryState::default()),
            count: RwSignal::new(QueryState::default()),
            geo: RwSignal::new(QueryState::default()),
            detail: RwSignal::new(QueryState::default()),
        }
    }

    pub fn load_list(&self, request: ListRequest) {
        let ListRequest { key, page, size, criteria } = request;
        run_query(self.list, key, async move { api::fetch_samples(page, size, &criteria).await });
    }

    pub fn load_count(&self, criteria: SampleCriteria) {
        let key = api::sample_count_path(&criteria);
        run_query(self.count, key, async move { api::fetch_sample_count(&criteria).await });
    }

    pub fn load_geo(&self, criteria: SampleCriteria) {
        let key = api::geo_features_path(&criteria);
        run_query(self.geo, key, async move { api::fetch_geo_features(&criteria).await });
    }

    pub fn load_detail(&self, id: String) {
        let key = api::sample_path(&id);
        run_query(self.detail, key, async move { api::fetch_sample(&id).await });
    }

    /// Drop every cached result; used on logout.
    pub fn clear(&self) {
        self.list.update(QueryState::clear);
        self.count.update(QueryState::clear);
        self.geo.update(QueryState::clear);
        self.detail.update(QueryState::clear);
    }
}

impl Default for SampleQueries {
    fn default() -> Self {
        Self::new()
    }
}
