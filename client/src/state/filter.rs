//! Sample filter store: search, access scope, creator, region, bbox, paging.
//!
//! SYSTEM CONTEXT
//! ==============
//! The table, the count badge and the map all query with the same criteria,
//! built by [`SampleFilter::criteria`] from the *settled* search text and
//! bounding box. The live values drive the inputs; the settled values drive
//! the network.
//!
//! DESIGN
//! ======
//! Edits that change the result set reset `page` to 0, and a shrinking
//! total clamps it to the last page. Search text settles
//! after 300 ms (trimmed) and the map bounding box after 2500 ms; both go
//! through [`Debounced`] generation guards, so clearing a field also
//! invalidates any timer still in flight for it.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use leptos::prelude::*;

use super::debounce::Debounced;
use super::pagination::Pager;
use crate::net::types::{AllowedAccess, BBox, SampleCriteria};

pub const SEARCH_DEBOUNCE_MS: u32 = 300;
pub const BBOX_DEBOUNCE_MS: u32 = 2_500;
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// LithoDat region names accepted by `lithoRegion.equals`.
pub const REGIONS: [&str; 9] = [
    "Africa",
    "Antarctica",
    "Arabian Region & West Asia",
    "Central Asia and Siberia",
    "Europe",
    "North America",
    "Oceania",
    "South America",
    "South and East Asia",
];

#[derive(Clone, Debug, PartialEq)]
pub struct SampleFilter {
    pub search: Debounced<String>,
    pub allowed_access: AllowedAccess,
    pub created_by_id: Option<String>,
    /// Display label for the picked creator, kept so the picker can show it
    /// without re-fetching the user.
    pub created_by_label: Option<String>,
    pub region: Option<String>,
    pub bbox: Debounced<Option<BBox>>,
    pub page: u32,
    pub size: u32,
    pub total_count: u64,
}

impl Default for SampleFilter {
    fn default() -> Self {
        Self {
            search: Debounced::new(String::new()),
            allowed_access: AllowedAccess::Viewable,
            created_by_id: None,
            created_by_label: None,
            region: None,
            bbox: Debounced::new(None),
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            total_count: 0,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl SampleFilter {
    /// Returns the generation to pass to [`Self::settle_search`].
    pub fn set_search_text(&mut self, text: String) -> u64 {
        self.page = 0;
        self.search.set(text)
    }

    pub fn settle_search(&mut self, generation: u64) -> bool {
        self.search.settle_with(generation, |s| s.trim().to_owned())
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    /// Zero sizes are ignored.
    pub fn set_size(&mut self, size: u32) {
        if size == 0 {
            return;
        }
        self.size = size;
        self.page = 0;
    }

    pub fn set_allowed_access(&mut self, access: AllowedAccess) {
        self.allowed_access = access;
        self.page = 0;
    }

    pub fn set_created_by(&mut self, id: Option<String>, label: Option<String>) {
        self.created_by_id = non_blank(id);
        self.created_by_label = if self.created_by_id.is_some() { label } else { None };
        self.page = 0;
    }

    pub fn set_region(&mut self, region: Option<String>) {
        self.region = non_blank(region);
        self.page = 0;
    }

    /// Store the list total and pull `page` back onto the last page if the
    /// result set shrank underneath it.
    pub fn set_total_count(&mut self, total: u64) {
        self.total_count = total;
        let last = Pager::new(self.page, self.size, total).last_page();
        if self.page > last {
            self.page = last;
        }
    }

    /// Returns the generation to pass to [`Self::settle_bbox`].
    pub fn set_bbox(&mut self, bbox: BBox) -> u64 {
        self.page = 0;
        self.bbox.set(Some(bbox))
    }

    pub fn settle_bbox(&mut self, generation: u64) -> bool {
        self.bbox.settle(generation)
    }

    pub fn clear_bbox(&mut self) {
        self.bbox.reset(None);
        self.page = 0;
    }

    /// Reset search, creator, region, bbox and page. Access scope and page
    /// size are preferences and survive.
    pub fn clear_filters(&mut self) {
        self.search.reset(String::new());
        self.created_by_id = None;
        self.created_by_label = None;
        self.region = None;
        self.bbox.reset(None);
        self.page = 0;
    }

    /// Back to the defaults for a new session. Debounce generations keep
    /// counting, so timers scheduled before the reset cannot settle edits
    /// made after it.
    pub fn reset_session(&mut self) {
        self.clear_filters();
        self.allowed_access = AllowedAccess::Viewable;
        self.size = DEFAULT_PAGE_SIZE;
        self.total_count = 0;
    }

    #[must_use]
    pub fn has_filters(&self) -> bool {
        !self.search.live().is_empty()
            || self.created_by_id.is_some()
            || self.region.is_some()
            || self.bbox.live().is_some()
    }

    /// Query criteria from the settled values.
    #[must_use]
    pub fn criteria(&self) -> SampleCriteria {
        let search = self.search.settled();
        SampleCriteria {
            name_contains: (!search.is_empty()).then(|| search.clone()),
            allowed_access: Some(self.allowed_access),
            created_by_id: self.created_by_id.clone(),
            litho_region: self.region.clone(),
            bbox: *self.bbox.settled(),
        }
    }
}

// =============================================================
// Browser scheduling
// =============================================================

/// Record a search edit and schedule its settle.
pub fn update_search_text(filter: RwSignal<SampleFilter>, text: String) {
    let generation = filter.try_update(|f| f.set_search_text(text));
    #[cfg(feature = "hydrate")]
    if let Some(generation) = generation {
        gloo_timers::callback::Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            filter.maybe_update(|f| f.settle_search(generation));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = generation;
}

/// Record a map viewport change and schedule its settle.
pub fn update_bbox(filter: RwSignal<SampleFilter>, bbox: BBox) {
    let generation = filter.try_update(|f| f.set_bbox(bbox));
    #[cfg(feature = "hydrate")]
    if let Some(generation) = generation {
        gloo_timers::callback::Timeout::new(BBOX_DEBOUNCE_MS, move || {
            filter.maybe_update(|f| f.settle_bbox(generation));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = generation;
}
