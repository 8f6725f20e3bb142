//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::view::{ActiveView, Screen, ViewState};
use gatewatch_core::{AppPhase, GateCatalog, GateCommand, GateRecord};

/// Identifies one opening of the detail screen
pub type DetailInstanceId = u64;

/// Train marker positions per lap
pub const TRAIN_TRACK_STEPS: u8 = 100;

/// Number of cards on the settings screen
pub const SETTINGS_CARD_COUNT: usize = 5;

/// Input routing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Normal,

    /// Search input on the gate list is capturing text
    SearchInput,

    /// Command acknowledgment popup is showing
    Notification,

    /// Quit confirmation dialog
    ConfirmDialog,
}

/// Overview screen: status table highlight and map animation
#[derive(Debug, Clone, Default)]
pub struct OverviewState {
    pub selected: usize,
    /// Train marker position, 0..TRAIN_TRACK_STEPS
    pub train_position: u8,
}

impl OverviewState {
    pub fn advance_train(&mut self) {
        self.train_position = (self.train_position + 1) % TRAIN_TRACK_STEPS;
    }
}

/// Gate list screen: search term and highlighted row
#[derive(Debug, Clone, Default)]
pub struct GateListState {
    pub query: String,
    pub selected: usize,
}

/// Settings screen: cosmetic card highlight
#[derive(Debug, Clone, Default)]
pub struct SettingsViewState {
    pub selected: usize,
}

/// One opening of the detail screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailState {
    pub instance_id: DetailInstanceId,
    pub gate_id: String,
    /// Command waiting on its simulated delay
    pub pending: Option<GateCommand>,
}

impl DetailState {
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,

    /// Read-only gate data
    pub catalog: GateCatalog,

    pub settings: Settings,

    pub view: ViewState,

    pub overview: OverviewState,
    pub gate_list: GateListState,
    pub settings_view: SettingsViewState,

    /// Present exactly when a gate is selected
    pub detail: Option<DetailState>,

    /// Acknowledgment text of the last completed command
    pub notification: Option<String>,

    pub confirm_dialog_state: Option<ConfirmDialogState>,

    next_detail_instance: DetailInstanceId,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// State over the reference catalog with default settings
    pub fn new() -> Self {
        Self::with_catalog(GateCatalog::reference(), Settings::default())
    }

    pub fn with_catalog(catalog: GateCatalog, settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            catalog,
            settings,
            view: ViewState::new(),
            overview: OverviewState::default(),
            gate_list: GateListState::default(),
            settings_view: SettingsViewState::default(),
            detail: None,
            notification: None,
            confirm_dialog_state: None,
            next_detail_instance: 1,
        }
    }

    pub fn screen(&self) -> Screen {
        self.view.render_target()
    }

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────

    /// Open the detail screen for `id` with a fresh instance.
    ///
    /// Returns the replaced instance if it still had a command in flight.
    pub fn select_gate(&mut self, id: &str) -> Option<DetailInstanceId> {
        let replaced = self.take_busy_detail();

        let instance_id = self.next_detail_instance;
        self.next_detail_instance += 1;

        self.view.select_gate(id);
        self.detail = Some(DetailState {
            instance_id,
            gate_id: id.to_string(),
            pending: None,
        });
        self.leave_search_input();

        replaced
    }

    pub fn navigate(&mut self, view: ActiveView) {
        self.view.navigate(view);
        self.leave_search_input();
    }

    /// Leave the detail screen.
    ///
    /// Returns the torn-down instance if it still had a command in flight.
    pub fn back(&mut self) -> Option<DetailInstanceId> {
        let cancelled = self.take_busy_detail();
        self.detail = None;
        self.view.back();
        self.leave_search_input();
        cancelled
    }

    fn take_busy_detail(&mut self) -> Option<DetailInstanceId> {
        self.detail
            .take()
            .filter(DetailState::is_busy)
            .map(|d| d.instance_id)
    }

    fn leave_search_input(&mut self) {
        if self.ui_mode == UiMode::SearchInput {
            self.ui_mode = UiMode::Normal;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Lookups
    // ─────────────────────────────────────────────────────────

    /// Gate shown by the detail screen, `None` for an unknown id
    pub fn detail_gate(&self) -> Option<&GateRecord> {
        self.detail
            .as_ref()
            .and_then(|d| self.catalog.by_id(&d.gate_id))
    }

    /// Gate list rows for the current search term
    pub fn filtered_gates(&self) -> Vec<&GateRecord> {
        self.catalog.search(&self.gate_list.query)
    }

    /// Whether `command` can be sent from the current detail screen
    pub fn is_command_enabled(&self, command: GateCommand) -> bool {
        match (&self.detail, self.detail_gate()) {
            (Some(detail), Some(gate)) => {
                !detail.is_busy() && command.is_available_for(gate.status)
            }
            _ => false,
        }
    }

    pub fn has_command_in_flight(&self) -> bool {
        self.detail.as_ref().is_some_and(DetailState::is_busy)
    }

    // ─────────────────────────────────────────────────────────
    // Notifications
    // ─────────────────────────────────────────────────────────

    pub fn show_notification(&mut self, text: String) {
        self.notification = Some(text);
        // A confirm dialog keeps focus; the popup takes over once it closes
        if self.ui_mode != UiMode::ConfirmDialog {
            self.ui_mode = UiMode::Notification;
        }
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
        if self.ui_mode == UiMode::Notification {
            self.ui_mode = UiMode::Normal;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Quit
    // ─────────────────────────────────────────────────────────

    /// Request application quit
    ///
    /// If a command is in flight and confirm_quit is enabled, shows the
    /// confirmation dialog. Otherwise quits immediately.
    pub fn request_quit(&mut self) {
        let pending = self
            .detail
            .as_ref()
            .and_then(|d| d.pending.map(|cmd| (cmd, d.gate_id.clone())));

        match pending {
            Some((command, gate_id)) if self.settings.behavior.confirm_quit => {
                let gate_name = self
                    .catalog
                    .by_id(&gate_id)
                    .map(|g| g.name.clone())
                    .unwrap_or(gate_id);
                self.confirm_dialog_state =
                    Some(ConfirmDialogState::quit_confirmation(command, &gate_name));
                self.ui_mode = UiMode::ConfirmDialog;
                self.phase = AppPhase::QuitRequested;
            }
            _ => self.phase = AppPhase::Quitting,
        }
    }

    /// Force quit without confirmation
    pub fn force_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Confirm quit (from confirmation dialog)
    pub fn confirm_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Cancel quit (from confirmation dialog)
    pub fn cancel_quit(&mut self) {
        self.confirm_dialog_state = None;
        self.phase = AppPhase::Running;
        self.ui_mode = if self.notification.is_some() {
            UiMode::Notification
        } else {
            UiMode::Normal
        };
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
