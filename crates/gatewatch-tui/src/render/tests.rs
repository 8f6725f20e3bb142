//! Full-frame rendering tests for `view`

use super::*;
use crate::test_utils::{create_test_state, TestTerminal};
use gatewatch_app::view::ActiveView;
use gatewatch_core::GateCommand;

fn render(term: &mut TestTerminal, state: &AppState) {
    term.draw_with(|frame| view(frame, state));
}

#[test]
fn test_initial_frame_is_dashboard() {
    let state = create_test_state();
    let mut term = TestTerminal::wide();
    render(&mut term, &state);

    assert!(term.buffer_contains("GATEWATCH"));
    assert!(term.buffer_contains("Railway Gate Monitoring System"));
    assert!(term.buffer_contains("Live Map View"));
    assert!(term.buffer_contains("Gate Status Overview"));
}

#[test]
fn test_gate_list_frame_filters_cards() {
    let mut state = create_test_state();
    state.navigate(ActiveView::List);
    state.gate_list.query = "bekasi".to_string();

    let mut term = TestTerminal::wide();
    render(&mut term, &state);

    assert!(term.buffer_contains("Gate List"));
    assert!(term.buffer_contains("Gate 2 - Bekasi Line"));
    assert!(!term.buffer_contains("Gate 4 - Depok Crossing"));
}

#[test]
fn test_search_mode_shows_cursor() {
    let mut state = create_test_state();
    state.navigate(ActiveView::List);
    state.ui_mode = UiMode::SearchInput;
    state.gate_list.query = "dep".to_string();

    let mut term = TestTerminal::wide();
    render(&mut term, &state);

    assert!(term.buffer_contains("dep_"));
}

#[test]
fn test_settings_frame() {
    let mut state = create_test_state();
    state.navigate(ActiveView::Settings);

    let mut term = TestTerminal::wide();
    render(&mut term, &state);

    assert!(term.buffer_contains("Configure system preferences and options"));
    assert!(term.buffer_contains("System Information"));
}

#[test]
fn test_detail_frame_with_pending_command() {
    let mut state = create_test_state();
    state.select_gate("G003");
    if let Some(detail) = state.detail.as_mut() {
        detail.pending = Some(GateCommand::Alarm);
    }

    let mut term = TestTerminal::wide();
    render(&mut term, &state);

    assert!(term.buffer_contains("Gate 3 - Tangerang Junction"));
    assert!(term.buffer_contains("Processing command..."));
    assert!(term.buffer_contains("CAM3A"));
}

#[test]
fn test_unknown_gate_frame() {
    let mut state = create_test_state();
    state.select_gate("G404");

    let mut term = TestTerminal::wide();
    render(&mut term, &state);

    assert!(term.buffer_contains("Gate not found"));
    // Sidebar stays in place
    assert!(term.buffer_contains("GATEWATCH"));
}

#[test]
fn test_notification_overlay() {
    let mut state = create_test_state();
    state.select_gate("G003");
    state.show_notification(GateCommand::Open.acknowledgment("Gate 3 - Tangerang Junction"));

    let mut term = TestTerminal::wide();
    render(&mut term, &state);

    assert!(term.buffer_contains("Manual Open command sent to Gate 3 - Tangerang Junction"));
}

#[test]
fn test_confirm_dialog_overlay() {
    let mut state = create_test_state();
    state.select_gate("G002");
    if let Some(detail) = state.detail.as_mut() {
        detail.pending = Some(GateCommand::Open);
    }
    state.request_quit();

    let mut term = TestTerminal::wide();
    render(&mut term, &state);

    assert!(term.buffer_contains("Quit gatewatch?"));
    assert!(term.buffer_contains("[y] Yes"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut state = create_test_state();
    for size in [(20, 5), (40, 10), (80, 24)] {
        let mut term = TestTerminal::with_size(size.0, size.1);
        render(&mut term, &state);
        state.select_gate("G001");
        render(&mut term, &state);
        state.navigate(ActiveView::List);
        render(&mut term, &state);
        state.navigate(ActiveView::Settings);
        render(&mut term, &state);
        state.back();
    }
}
