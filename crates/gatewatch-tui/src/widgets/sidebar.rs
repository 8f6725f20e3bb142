//! Navigation sidebar

use gatewatch_app::view::{ViewState, MENU_ENTRIES};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, palette, styles};

/// Sidebar with the four fixed navigation entries
pub struct Sidebar<'a> {
    view: &'a ViewState,
    icons: IconSet,
}

impl<'a> Sidebar<'a> {
    pub fn new(view: &'a ViewState, icons: IconSet) -> Self {
        Self { view, icons }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(vec![
                Span::styled(self.icons.train(), styles::accent_bold()),
                Span::raw(" "),
                Span::styled("GATEWATCH", styles::title()),
            ]),
            Line::from(""),
        ];

        for (index, entry) in MENU_ENTRIES.iter().enumerate() {
            let label = format!(" {} {}", index + 1, entry.label);
            let line = if entry.is_active(self.view) {
                let padded = format!("{:<width$}", label, width = inner.width as usize);
                Line::from(Span::styled(padded, styles::focused_selected()))
            } else {
                Line::from(Span::styled(label, styles::text_secondary()))
            };
            lines.push(line);
        }

        Paragraph::new(lines)
            .style(Style::default().bg(palette::DEEPEST_BG))
            .render(inner, buf);

        // Key hints pinned to the bottom
        if inner.height > MENU_ENTRIES.len() as u16 + 4 {
            let hint_area = Rect::new(inner.x, inner.bottom() - 2, inner.width, 2);
            Paragraph::new(vec![
                Line::from(vec![
                    Span::styled("Tab", styles::keybinding()),
                    Span::styled(" cycle", styles::text_muted()),
                ]),
                Line::from(vec![
                    Span::styled("q", styles::keybinding()),
                    Span::styled(" quit", styles::text_muted()),
                ]),
            ])
            .render(hint_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use gatewatch_app::view::ActiveView;

    fn highlighted_rows(term: &TestTerminal) -> Vec<&'static str> {
        MENU_ENTRIES
            .iter()
            .filter(|entry| {
                term.find_line(entry.label)
                    .map(|y| {
                        let buf = term.buffer();
                        (1..buf.area.width - 1)
                            .any(|x| buf[(x, y)].bg == palette::ACCENT)
                    })
                    .unwrap_or(false)
            })
            .map(|entry| entry.label)
            .collect()
    }

    #[test]
    fn test_sidebar_lists_all_entries() {
        let mut term = TestTerminal::with_size(22, 16);
        let view = ViewState::new();
        term.render_widget(Sidebar::new(&view, IconSet::default()), term.area());

        for label in ["Dashboard", "Map View", "Gate List", "Settings"] {
            assert!(term.buffer_contains(label), "missing {}", label);
        }
    }

    #[test]
    fn test_overview_highlights_dashboard_and_map_view() {
        let mut term = TestTerminal::with_size(22, 16);
        let view = ViewState::new();
        term.render_widget(Sidebar::new(&view, IconSet::default()), term.area());

        assert_eq!(highlighted_rows(&term), vec!["Dashboard", "Map View"]);
    }

    #[test]
    fn test_list_highlights_gate_list_only() {
        let mut term = TestTerminal::with_size(22, 16);
        let mut view = ViewState::new();
        view.navigate(ActiveView::List);
        term.render_widget(Sidebar::new(&view, IconSet::default()), term.area());

        assert_eq!(highlighted_rows(&term), vec!["Gate List"]);
    }
}
