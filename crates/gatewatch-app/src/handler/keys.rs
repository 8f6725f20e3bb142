//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};
use crate::view::Screen;
use gatewatch_core::GateCommand;

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
        UiMode::Notification => handle_key_notification(key),
        UiMode::SearchInput => handle_key_search_input(state, key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_notification(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => {
            Some(Message::DismissNotification)
        }
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in search input mode
fn handle_key_search_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Both keep the term and leave input mode
        InputKey::Esc | InputKey::Enter => Some(Message::EndSearch),

        InputKey::Backspace => {
            let mut query = state.gate_list.query.clone();
            query.pop();
            Some(Message::SearchInput { text: query })
        }

        InputKey::CharCtrl('u') => Some(Message::SearchInput {
            text: String::new(),
        }),

        InputKey::Char(c) => {
            let mut query = state.gate_list.query.clone();
            query.push(c);
            Some(Message::SearchInput { text: query })
        }

        InputKey::Up => Some(Message::SelectPrevious),
        InputKey::Down => Some(Message::SelectNext),

        InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    let screen = state.screen();

    let screen_msg = match &screen {
        Screen::Overview | Screen::Settings => handle_key_selectable(key),
        Screen::List => match key {
            InputKey::Char('/') => Some(Message::StartSearch),
            _ => handle_key_selectable(key),
        },
        Screen::Detail(_) => handle_key_detail(key),
    };
    if screen_msg.is_some() {
        return screen_msg;
    }

    match key {
        // Request quit (may show confirmation dialog if a command is in flight)
        InputKey::Char('q') => Some(Message::RequestQuit),

        // Force quit (bypass confirmation)
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Sidebar entries
        InputKey::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            Some(Message::SelectMenuEntry(index))
        }

        InputKey::Tab => Some(Message::NextView),
        InputKey::BackTab => Some(Message::PreviousView),

        _ => None,
    }
}

/// Screens with a highlighted row or card
fn handle_key_selectable(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Enter => Some(Message::ActivateSelection),
        _ => None,
    }
}

fn handle_key_detail(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Backspace | InputKey::Char('b') => Some(Message::Back),
        InputKey::Char(c) => GateCommand::ALL
            .into_iter()
            .find(|cmd| cmd.shortcut() == c)
            .map(Message::ExecuteCommand),
        _ => None,
    }
}
