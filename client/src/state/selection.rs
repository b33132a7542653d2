//! Sample selection shared by the table and the map.
//!
//! The set holds sample ids as strings. The map engine mirrors it for
//! highlighting; this store is the canonical copy.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::HashSet;

/// How much of a page is selected, for the header checkbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSelection {
    None,
    Some,
    All,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionState {
    ids: HashSet<String>,
}

impl SelectionState {
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_owned());
        }
    }

    pub fn select_many<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids.extend(ids.into_iter().map(Into::into));
    }

    pub fn deselect_many<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for id in ids {
            self.ids.remove(id.as_ref());
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn ids(&self) -> &HashSet<String> {
        &self.ids
    }

    /// Selection status of `page_ids`. An empty page counts as `None`.
    #[must_use]
    pub fn page_status(&self, page_ids: &[String]) -> PageSelection {
        let selected = page_ids.iter().filter(|id| self.ids.contains(id.as_str())).count();
        match selected {
            0 => PageSelection::None,
            n if n == page_ids.len() => PageSelection::All,
            _ => PageSelection::Some,
        }
    }

    /// Header checkbox click: deselect the page when it is fully selected,
    /// otherwise select all of it.
    pub fn toggle_page(&mut self, page_ids: &[String]) {
        if self.page_status(page_ids) == PageSelection::All {
            self.deselect_many(page_ids);
        } else {
            self.select_many(page_ids.iter().cloned());
        }
    }
}
