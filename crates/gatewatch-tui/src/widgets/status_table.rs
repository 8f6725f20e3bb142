//! "Gate Status Overview" table on the dashboard

use gatewatch_core::GateRecord;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Cell, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::theme::{icons::IconSet, styles};

/// One row per gate with the highlighted row ready to open
pub struct StatusTable<'a> {
    gates: &'a [GateRecord],
    selected: usize,
    icons: IconSet,
}

impl<'a> StatusTable<'a> {
    pub fn new(gates: &'a [GateRecord], icons: IconSet) -> Self {
        Self {
            gates,
            selected: 0,
            icons,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for StatusTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(Span::styled(" Gate Status Overview ", styles::title()))
            .title_bottom(Line::from(vec![
                Span::styled(" Enter", styles::keybinding()),
                Span::styled(" view details ", styles::text_muted()),
            ]));

        let header = Row::new(["Gate ID", "Gate Name", "Location", "Status", "Action"])
            .style(styles::text_muted());

        let rows = self.gates.iter().map(|gate| {
            Row::new(vec![
                Cell::from(Span::styled(gate.id.as_str(), styles::accent())),
                Cell::from(Span::styled(gate.name.as_str(), styles::text_primary())),
                Cell::from(Span::styled(gate.location.as_str(), styles::text_secondary())),
                Cell::from(Line::from(vec![
                    Span::styled(self.icons.dot(), styles::gate_status(gate.status)),
                    Span::raw(" "),
                    Span::styled(gate.status.label(), styles::gate_status(gate.status)),
                ])),
                Cell::from(Span::styled("View Details", styles::text_muted())),
            ])
        });

        let widths = [
            Constraint::Length(8),
            Constraint::Fill(3),
            Constraint::Fill(2),
            Constraint::Length(14),
            Constraint::Length(13),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(1)
            .row_highlight_style(styles::focused_selected());

        let mut state = TableState::default();
        if !self.gates.is_empty() {
            state.select(Some(self.selected.min(self.gates.len() - 1)));
        }
        StatefulWidget::render(table, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette;
    use gatewatch_core::GateCatalog;

    #[test]
    fn test_table_lists_every_gate() {
        let catalog = GateCatalog::reference();
        let mut term = TestTerminal::with_size(100, 12);
        term.render_widget(StatusTable::new(catalog.all(), IconSet::default()), term.area());

        assert!(term.buffer_contains("Gate Status Overview"));
        assert!(term.buffer_contains("Gate ID"));
        for id in ["G001", "G002", "G003", "G004", "G005"] {
            assert!(term.buffer_contains(id));
        }
        assert!(term.buffer_contains("Maintenance"));
        assert!(term.buffer_contains("Enter"));
    }

    #[test]
    fn test_selected_row_is_highlighted() {
        let catalog = GateCatalog::reference();
        let mut term = TestTerminal::with_size(100, 12);
        term.render_widget(
            StatusTable::new(catalog.all(), IconSet::default()).selected(2),
            term.area(),
        );

        let row = term.find_line("G003").unwrap();
        let buffer = term.buffer();
        assert!((0..buffer.area.width).any(|x| buffer[(x, row)].bg == palette::ACCENT));

        let other = term.find_line("G001").unwrap();
        assert!((0..buffer.area.width).all(|x| buffer[(x, other)].bg != palette::ACCENT));
    }

    #[test]
    fn test_empty_catalog_renders_frame_only() {
        let mut term = TestTerminal::with_size(60, 8);
        term.render_widget(StatusTable::new(&[], IconSet::default()), term.area());
        assert!(term.buffer_contains("Gate Status Overview"));
    }
}
