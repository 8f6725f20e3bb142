//! Quit confirmation dialog widget

use gatewatch_app::confirm_dialog::ConfirmDialogState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay;
use crate::theme::styles;

const DIALOG_WIDTH: u16 = 56;
const DIALOG_HEIGHT: u16 = 8;

/// Centered yes/no modal over a dimmed screen
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog_area = modal_overlay::centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        modal_overlay::prepare_modal(buf, area, dialog_area);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title);
        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        Paragraph::new(vec![
            Line::styled(self.state.message.as_str(), styles::text_primary()),
            Line::styled(self.state.detail.as_str(), styles::text_muted()),
            Line::from(""),
            Line::from(vec![
                Span::styled("[y]", styles::keybinding()),
                Span::styled(" Yes    ", styles::text_secondary()),
                Span::styled("[n]", styles::keybinding()),
                Span::styled(" No", styles::text_secondary()),
            ]),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use gatewatch_core::GateCommand;

    #[test]
    fn test_confirm_dialog_renders_question_and_keys() {
        let state = ConfirmDialogState::quit_confirmation(GateCommand::Open, "Gate 3");
        let mut term = TestTerminal::new();
        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("Quit gatewatch?"));
        assert!(term.buffer_contains("Manual Open to Gate 3 is still processing."));
        assert!(term.buffer_contains("[y] Yes"));
        assert!(term.buffer_contains("[n] No"));
    }
}
