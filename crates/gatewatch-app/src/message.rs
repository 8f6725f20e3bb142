//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::state::DetailInstanceId;
use crate::view::ActiveView;
use gatewatch_core::GateCommand;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for animations
    Tick,

    /// Request to quit (may show confirmation dialog)
    RequestQuit,
    /// Force quit without confirmation
    Quit,
    ConfirmQuit,
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Change the base view
    Navigate(ActiveView),
    /// Activate a sidebar entry by index
    SelectMenuEntry(usize),
    NextView,
    PreviousView,
    /// Open the detail screen for a gate
    SelectGate(String),
    /// Close the detail screen and return to the overview
    Back,

    // ─────────────────────────────────────────────────────────
    // Per-screen selection (routed by the current screen)
    // ─────────────────────────────────────────────────────────
    SelectPrevious,
    SelectNext,
    ActivateSelection,

    // ─────────────────────────────────────────────────────────
    // Gate list search
    // ─────────────────────────────────────────────────────────
    StartSearch,
    /// Replace the search term
    SearchInput { text: String },
    /// Leave search input mode, keeping the term
    EndSearch,

    // ─────────────────────────────────────────────────────────
    // Gate commands
    // ─────────────────────────────────────────────────────────
    ExecuteCommand(GateCommand),
    /// A simulated command's delay elapsed
    CommandCompleted {
        instance_id: DetailInstanceId,
        command: GateCommand,
    },
    DismissNotification,
}
