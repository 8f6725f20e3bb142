//! Main update function - handles state transitions (TEA pattern)

use std::time::Duration;

use crate::message::Message;
use crate::state::{AppState, UiMode, SETTINGS_CARD_COUNT};
use crate::view::{Screen, MENU_ENTRIES};
use gatewatch_core::prelude::*;
use gatewatch_core::GateCommand;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.screen() == Screen::Overview {
                state.overview.advance_train();
            }
            UpdateResult::none()
        }

        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.force_quit();
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate(view) => {
            debug!("Navigate to {:?}", view);
            state.navigate(view);
            UpdateResult::none()
        }

        Message::SelectMenuEntry(index) => match MENU_ENTRIES.get(index) {
            Some(entry) => UpdateResult::message(Message::Navigate(entry.target)),
            None => UpdateResult::none(),
        },

        Message::NextView => {
            let next = state.view.active_view().next();
            UpdateResult::message(Message::Navigate(next))
        }

        Message::PreviousView => {
            let previous = state.view.active_view().previous();
            UpdateResult::message(Message::Navigate(previous))
        }

        Message::SelectGate(id) => {
            if state.catalog.by_id(&id).is_none() {
                warn!("Opening detail for unknown gate {}", id);
            }
            let replaced = state.select_gate(&id);
            UpdateResult::cancel(replaced)
        }

        Message::Back => {
            let cancelled = state.back();
            UpdateResult::cancel(cancelled)
        }

        // ─────────────────────────────────────────────────────────
        // Per-screen selection
        // ─────────────────────────────────────────────────────────
        Message::SelectPrevious => {
            if let Some(selected) = selection_mut(state) {
                *selected = selected.saturating_sub(1);
            }
            UpdateResult::none()
        }

        Message::SelectNext => {
            let len = selection_len(state);
            if let Some(selected) = selection_mut(state) {
                if *selected + 1 < len {
                    *selected += 1;
                }
            }
            UpdateResult::none()
        }

        Message::ActivateSelection => {
            let gate_id = match state.screen() {
                Screen::Overview => state
                    .catalog
                    .all()
                    .get(state.overview.selected)
                    .map(|g| g.id.clone()),
                Screen::List => state
                    .filtered_gates()
                    .get(state.gate_list.selected)
                    .map(|g| g.id.clone()),
                Screen::Settings | Screen::Detail(_) => None,
            };
            match gate_id {
                Some(id) => UpdateResult::message(Message::SelectGate(id)),
                None => UpdateResult::none(),
            }
        }

        // ─────────────────────────────────────────────────────────
        // Gate list search
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => {
            if state.screen() == Screen::List {
                state.ui_mode = UiMode::SearchInput;
            }
            UpdateResult::none()
        }

        Message::SearchInput { text } => {
            state.gate_list.query = text;
            state.gate_list.selected = 0;
            UpdateResult::none()
        }

        Message::EndSearch => {
            if state.ui_mode == UiMode::SearchInput {
                state.ui_mode = UiMode::Normal;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Gate commands
        // ─────────────────────────────────────────────────────────
        Message::ExecuteCommand(command) => handle_execute_command(state, command),

        Message::CommandCompleted {
            instance_id,
            command,
        } => {
            let Some(detail) = state
                .detail
                .as_mut()
                .filter(|d| d.instance_id == instance_id && d.pending == Some(command))
            else {
                debug!(
                    "Ignoring stale completion of {} for detail instance {}",
                    command, instance_id
                );
                return UpdateResult::none();
            };

            detail.pending = None;
            let gate_id = detail.gate_id.clone();
            let gate_name = state
                .catalog
                .by_id(&gate_id)
                .map(|g| g.name.clone())
                .unwrap_or(gate_id);

            let text = command.acknowledgment(&gate_name);
            info!("{}", text);
            state.show_notification(text);
            UpdateResult::none()
        }

        Message::DismissNotification => {
            state.dismiss_notification();
            UpdateResult::none()
        }
    }
}

fn handle_execute_command(state: &mut AppState, command: GateCommand) -> UpdateResult {
    if !state.is_command_enabled(command) {
        debug!("{} is disabled, ignoring", command);
        return UpdateResult::none();
    }

    let delay = Duration::from_millis(state.settings.commands.delay_ms);
    let Some(detail) = state.detail.as_mut() else {
        return UpdateResult::none();
    };

    detail.pending = Some(command);
    info!(
        "Sending {} to gate {} (instance {})",
        command, detail.gate_id, detail.instance_id
    );

    UpdateResult::action(UpdateAction::ScheduleCommand {
        instance_id: detail.instance_id,
        command,
        delay,
    })
}

/// Highlight index of the current screen, if it has one
fn selection_mut(state: &mut AppState) -> Option<&mut usize> {
    match state.screen() {
        Screen::Overview => Some(&mut state.overview.selected),
        Screen::List => Some(&mut state.gate_list.selected),
        Screen::Settings => Some(&mut state.settings_view.selected),
        Screen::Detail(_) => None,
    }
}

fn selection_len(state: &AppState) -> usize {
    match state.screen() {
        Screen::Overview => state.catalog.len(),
        Screen::List => state.filtered_gates().len(),
        Screen::Settings => SETTINGS_CARD_COUNT,
        Screen::Detail(_) => 0,
    }
}
