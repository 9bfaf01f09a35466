use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_tool_is_pencil() {
    let state = UiState::default();
    assert_eq!(state.active_tool, Tool::Pencil);
    assert!(state.is_active(Tool::Pencil));
    assert!(!state.is_active(Tool::Eraser));
}

#[test]
fn ui_state_default_theme_is_dark() {
    assert_eq!(UiState::default().theme, Theme::Dark);
}

#[test]
fn ui_state_default_has_no_clear_request() {
    assert_eq!(UiState::default().clear_seq, 0);
}

#[test]
fn with_theme_keeps_other_defaults() {
    let state = UiState::with_theme(Theme::Light);
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.active_tool, Tool::Pencil);
    assert_eq!(state.clear_seq, 0);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn select_switches_active_tool() {
    let mut state = UiState::default();
    state.select(Tool::Eraser);
    assert!(state.is_active(Tool::Eraser));
    assert!(!state.is_active(Tool::Pencil));
    state.select(Tool::Pencil);
    assert!(state.is_active(Tool::Pencil));
}

#[test]
fn request_clear_bumps_sequence_each_time() {
    let mut state = UiState::default();
    state.request_clear();
    state.request_clear();
    assert_eq!(state.clear_seq, 2);
}

#[test]
fn request_clear_wraps_instead_of_overflowing() {
    let mut state = UiState { clear_seq: u64::MAX, ..UiState::default() };
    state.request_clear();
    assert_eq!(state.clear_seq, 0);
}

#[test]
fn request_clear_does_not_touch_tool() {
    let mut state = UiState::default();
    state.select(Tool::Eraser);
    state.request_clear();
    assert_eq!(state.active_tool, Tool::Eraser);
}
