//! Local UI chrome state (view mode, detail modal, sidebar).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the filter and selection
//! stores so view controls can change without touching query inputs.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which samples view is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Map,
    Table,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub view_mode: ViewMode,
    /// Sample shown in the detail modal, if open.
    pub detail_id: Option<String>,
    pub sidebar_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { view_mode: ViewMode::Map, detail_id: None, sidebar_open: true }
    }
}

impl UiState {
    pub fn open_detail(&mut self, id: String) {
        self.detail_id = Some(id);
    }

    pub fn close_detail(&mut self) {
        self.detail_id = None;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}
