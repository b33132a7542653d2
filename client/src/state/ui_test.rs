use super::*;

#[test]
fn defaults_to_map_with_sidebar_open() {
    let state = UiState::default();
    assert_eq!(state.view_mode, ViewMode::Map);
    assert!(state.sidebar_open);
    assert!(state.detail_id.is_none());
}

#[test]
fn detail_open_and_close() {
    let mut state = UiState::default();
    state.open_detail("42".to_owned());
    assert_eq!(state.detail_id.as_deref(), Some("42"));
    state.close_detail();
    assert!(state.detail_id.is_none());
}

#[test]
fn sidebar_toggles() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(!state.sidebar_open);
    state.toggle_sidebar();
    assert!(state.sidebar_open);
}
