use super::*;

// =============================================================
// BandMode
// =============================================================

#[test]
fn band_mode_defaults_to_add() {
    assert_eq!(BandMode::from_modifiers(Modifiers { shift: true, ..Default::default() }), BandMode::Add);
}

#[test]
fn band_mode_alt_removes() {
    let modifiers = Modifiers { shift: true, alt: true, ..Default::default() };
    assert_eq!(BandMode::from_modifiers(modifiers), BandMode::Remove);
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert!(matches!(InputState::default(), InputState::Idle));
}

#[test]
fn ui_state_default_is_empty() {
    let ui = UiState::default();
    assert!(ui.selected_ids.is_empty());
    assert!(ui.marquee.is_none());
    assert!(ui.hovered_id.is_none());
}

#[test]
fn modifiers_default_all_released() {
    let m = Modifiers::default();
    assert!(!m.shift && !m.ctrl && !m.alt && !m.meta);
}

#[test]
fn key_wraps_browser_name() {
    assert_eq!(Key("Escape".to_owned()), Key("Escape".to_owned()));
    assert_ne!(Key("+".to_owned()), Key("-".to_owned()));
}
