//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use gatewatch_app::state::{AppState, UiMode};
use gatewatch_app::view::Screen;
use gatewatch_core::GateCommand;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};

/// Clock format stamped on the camera panels
const CAMERA_CLOCK_FORMAT: &str = "%H:%M:%S";

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`; the only outside input is the wall clock
/// shown on the detail screen's cameras.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(widgets::Sidebar::new(&state.view, icons), areas.sidebar);

    match state.screen() {
        Screen::Overview => {
            let dashboard =
                widgets::Dashboard::new(state.catalog.all(), &state.overview, icons);
            frame.render_widget(dashboard, areas.content);
        }
        Screen::List => {
            let gates = state.filtered_gates();
            let list = widgets::GateList::new(&gates, &state.gate_list.query, icons)
                .selected(state.gate_list.selected)
                .searching(state.ui_mode == UiMode::SearchInput);
            frame.render_widget(list, areas.content);
        }
        Screen::Settings => {
            let settings = widgets::SettingsView::new(&state.settings.system, icons)
                .selected(state.settings_view.selected);
            frame.render_widget(settings, areas.content);
        }
        Screen::Detail(_) => {
            let enabled = GateCommand::ALL.map(|command| state.is_command_enabled(command));
            let clock = chrono::Local::now().format(CAMERA_CLOCK_FORMAT).to_string();
            let detail = widgets::GateDetail::new(state.detail_gate(), icons)
                .pending(state.detail.as_ref().and_then(|d| d.pending))
                .enabled(enabled)
                .clock(clock);
            frame.render_widget(detail, areas.content);
        }
    }

    // Render modal overlays based on UI mode
    match state.ui_mode {
        UiMode::Notification => {
            if let Some(ref message) = state.notification {
                frame.render_widget(widgets::Notification::new(message), area);
            }
        }
        UiMode::ConfirmDialog => {
            if let Some(ref dialog_state) = state.confirm_dialog_state {
                frame.render_widget(widgets::ConfirmDialog::new(dialog_state), area);
            }
        }
        UiMode::Normal | UiMode::SearchInput => {}
    }
}
