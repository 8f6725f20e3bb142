//! Search bar for the gate list

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{icons::IconSet, styles};

const PLACEHOLDER: &str = "Search by gate name or location...";

/// Bordered search bar showing the current term
pub struct SearchInput<'a> {
    query: &'a str,
    /// Input mode is capturing keys
    active: bool,
    icons: IconSet,
}

impl<'a> SearchInput<'a> {
    pub fn new(query: &'a str, icons: IconSet) -> Self {
        Self {
            query,
            active: false,
            icons,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.active);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![
            Span::styled(self.icons.search(), styles::keybinding()),
            Span::raw(" "),
        ];

        if self.query.is_empty() && !self.active {
            spans.push(Span::styled(PLACEHOLDER, styles::text_muted()));
            spans.push(Span::styled("  (press / to search)", styles::text_muted()));
        } else {
            // Keep the tail of long queries visible
            let budget = (inner.width as usize).saturating_sub(4);
            let mut shown = self.query;
            while shown.width() > budget {
                let mut chars = shown.chars();
                chars.next();
                shown = chars.as_str();
            }
            spans.push(Span::styled(shown, styles::text_primary()));
            if self.active {
                spans.push(Span::styled("_", styles::keybinding()));
            }
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
