//! End-to-end state scenarios through the message loop
//!
//! Keys go through `process_message` exactly as the runner feeds them, and
//! command timers run on tokio's paused clock.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use gatewatch::app::actions::CommandTaskMap;
use gatewatch::app::message::Message;
use gatewatch::app::process::process_message;
use gatewatch::app::{ActiveView, AppState, InputKey, Screen, UiMode};
use gatewatch::core::{GateCommand, GateStatus};
use tokio::sync::mpsc;

struct Harness {
    state: AppState,
    tx: mpsc::Sender<Message>,
    rx: mpsc::Receiver<Message>,
    tasks: CommandTaskMap,
}

impl Harness {
    fn new() -> Self {
        let (tx, rx) = mpsc::channel(16);
        Self {
            state: AppState::new(),
            tx,
            rx,
            tasks: Arc::new(std::sync::Mutex::new(HashMap::new())),
        }
    }

    fn send(&mut self, message: Message) {
        process_message(&mut self.state, message, &self.tx, &self.tasks);
    }

    fn press(&mut self, key: InputKey) {
        self.send(Message::Key(key));
    }

    fn pending_timers(&self) -> usize {
        self.tasks.lock().unwrap().len()
    }

    /// Wait for the next timer message and feed it back in
    async fn deliver_next(&mut self) {
        let message = self.rx.recv().await.unwrap();
        self.send(message);
    }
}

#[tokio::test(start_paused = true)]
async fn test_maintenance_gate_manual_open_round_trip() {
    let mut h = Harness::new();
    h.send(Message::SelectGate("G003".to_string()));
    assert!(h.state.is_command_enabled(GateCommand::Open));

    h.press(InputKey::Char('o'));
    assert!(h.state.has_command_in_flight());
    assert_eq!(h.pending_timers(), 1);

    // Every command is locked out while busy
    for command in GateCommand::ALL {
        assert!(!h.state.is_command_enabled(command));
    }

    let started = tokio::time::Instant::now();
    h.deliver_next().await;
    assert!(started.elapsed() >= Duration::from_millis(1500));

    assert!(!h.state.has_command_in_flight());
    assert_eq!(h.pending_timers(), 0);
    assert_eq!(h.state.ui_mode, UiMode::Notification);
    assert_eq!(
        h.state.notification.as_deref(),
        Some("Manual Open command sent to Gate 3 - Tangerang Junction")
    );
    // Simulated only: the record never changes
    assert_eq!(
        h.state.catalog.by_id("G003").unwrap().status,
        GateStatus::Maintenance
    );

    h.press(InputKey::Enter);
    assert_eq!(h.state.ui_mode, UiMode::Normal);
    assert!(h.state.notification.is_none());
    assert!(h.state.is_command_enabled(GateCommand::Open));
}

#[tokio::test(start_paused = true)]
async fn test_back_cancels_pending_timer() {
    let mut h = Harness::new();
    h.send(Message::SelectGate("G002".to_string()));
    h.press(InputKey::Char('o'));
    assert_eq!(h.pending_timers(), 1);

    h.press(InputKey::Esc);
    assert_eq!(h.state.screen(), Screen::Overview);
    assert_eq!(h.pending_timers(), 0);

    // Nothing ever arrives
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(h.rx.try_recv().is_err());
    assert!(h.state.notification.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_configured_delay_is_used() {
    let mut h = Harness::new();
    h.state.settings.commands.delay_ms = 200;
    h.send(Message::SelectGate("G001".to_string()));
    h.press(InputKey::Char('a'));

    let started = tokio::time::Instant::now();
    h.deliver_next().await;
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(200));
    assert!(elapsed < Duration::from_millis(1500));
    assert_eq!(
        h.state.notification.as_deref(),
        Some("Emergency Alarm command sent to Gate 1 - Central Station")
    );
}

#[tokio::test(start_paused = true)]
async fn test_disabled_command_schedules_nothing() {
    let mut h = Harness::new();
    // G001 is Open
    h.send(Message::SelectGate("G001".to_string()));
    h.press(InputKey::Char('o'));

    assert!(!h.state.has_command_in_flight());
    assert_eq!(h.pending_timers(), 0);
}

#[tokio::test]
async fn test_navigation_scenario() {
    let mut h = Harness::new();

    h.send(Message::Navigate(ActiveView::Settings));
    h.send(Message::SelectGate("G001".to_string()));
    // Detail wins over the active view
    assert_eq!(h.state.screen(), Screen::Detail("G001".to_string()));

    h.send(Message::Back);
    assert_eq!(h.state.view.active_view(), ActiveView::Overview);
    assert_eq!(h.state.view.selected_gate_id(), None);
}

#[tokio::test]
async fn test_search_then_open_from_list() {
    let mut h = Harness::new();

    h.press(InputKey::Char('3'));
    assert_eq!(h.state.screen(), Screen::List);

    h.press(InputKey::Char('/'));
    assert_eq!(h.state.ui_mode, UiMode::SearchInput);
    for c in "bekasi".chars() {
        h.press(InputKey::Char(c));
    }
    h.press(InputKey::Enter);

    let ids: Vec<String> = h.state.filtered_gates().iter().map(|g| g.id.clone()).collect();
    assert_eq!(ids, vec!["G002".to_string()]);

    h.press(InputKey::Enter);
    assert_eq!(h.state.screen(), Screen::Detail("G002".to_string()));
}

#[tokio::test]
async fn test_quit_with_confirmation() {
    let mut h = Harness::new();
    h.send(Message::SelectGate("G004".to_string()));
    h.press(InputKey::Char('c'));

    h.press(InputKey::Char('q'));
    assert_eq!(h.state.ui_mode, UiMode::ConfirmDialog);
    assert!(!h.state.should_quit());

    h.press(InputKey::Char('y'));
    assert!(h.state.should_quit());

    gatewatch::app::actions::abort_all(&h.tasks);
    assert_eq!(h.pending_timers(), 0);
}
