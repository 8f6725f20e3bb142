//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget lives in
//! gatewatch-tui.

use gatewatch_core::GateCommand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub detail: String,
}

impl ConfirmDialogState {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// Quit confirmation shown while a command is still in flight
    pub fn quit_confirmation(command: GateCommand, gate_name: &str) -> Self {
        Self::new(
            "Quit gatewatch?",
            format!("{} to {} is still processing.", command.label(), gate_name),
            "The pending command will be discarded.",
        )
    }
}
