//! Command acknowledgment popup

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::modal_overlay;
use crate::theme::styles;

const MIN_WIDTH: u16 = 36;
const HEIGHT: u16 = 7;

/// Blocking popup carrying one acknowledgment message
pub struct Notification<'a> {
    message: &'a str,
}

impl<'a> Notification<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Widget for Notification<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Grow with the message, up to the screen width
        let width = (self.message.width() as u16 + 6).max(MIN_WIDTH);
        let popup = modal_overlay::centered_rect(width, HEIGHT, area);
        modal_overlay::prepare_modal(buf, area, popup);

        let block = styles::modal_block(" Command Sent ");
        let inner = block.inner(popup);
        block.render(popup, buf);

        Paragraph::new(vec![
            Line::from(""),
            Line::styled(self.message, styles::text_primary()),
            Line::from(""),
            Line::from(vec![
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" OK", styles::text_muted()),
            ]),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
    }
}
