//! Gate List screen: search box and one card per matching gate

use gatewatch_core::GateRecord;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::dashboard::render_page_header;
use super::SearchInput;
use crate::theme::{icons::IconSet, styles};

/// Rows taken by one card, borders included
pub const CARD_HEIGHT: u16 = 5;

pub struct GateList<'a> {
    gates: &'a [&'a GateRecord],
    query: &'a str,
    selected: usize,
    searching: bool,
    icons: IconSet,
}

impl<'a> GateList<'a> {
    pub fn new(gates: &'a [&'a GateRecord], query: &'a str, icons: IconSet) -> Self {
        Self {
            gates,
            query,
            selected: 0,
            searching: false,
            icons,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    pub fn searching(mut self, searching: bool) -> Self {
        self.searching = searching;
        self
    }

    fn render_cards(&self, area: Rect, buf: &mut Buffer) {
        if self.gates.is_empty() {
            let block = styles::glass_block(false);
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(Line::styled(
                "No gates found matching your search.",
                styles::text_muted(),
            ))
            .alignment(Alignment::Center)
            .render(inner, buf);
            return;
        }

        let visible = (area.height / CARD_HEIGHT).max(1) as usize;
        let selected = self.selected.min(self.gates.len() - 1);
        // Scroll just far enough to keep the highlighted card on screen
        let first = selected.saturating_sub(visible - 1);

        for (slot, (index, gate)) in self
            .gates
            .iter()
            .enumerate()
            .skip(first)
            .take(visible)
            .enumerate()
        {
            let y = area.y + slot as u16 * CARD_HEIGHT;
            let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
            if height < 3 {
                break;
            }
            let card_area = Rect::new(area.x, y, area.width, height);
            GateCard::new(gate, self.icons)
                .highlighted(index == selected)
                .render(card_area, buf);
        }
    }
}

impl Widget for GateList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header_area, search_area, cards_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .areas(area);

        render_page_header(
            "Gate List",
            "Browse and manage all railway gates",
            header_area,
            buf,
        );

        SearchInput::new(self.query, self.icons)
            .active(self.searching)
            .render(search_area, buf);

        self.render_cards(cards_area, buf);
    }
}

/// Compact card: name and status, id and location, sensor health chips
struct GateCard<'a> {
    gate: &'a GateRecord,
    highlighted: bool,
    icons: IconSet,
}

impl<'a> GateCard<'a> {
    fn new(gate: &'a GateRecord, icons: IconSet) -> Self {
        Self {
            gate,
            highlighted: false,
            icons,
        }
    }

    fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }
}

impl Widget for GateCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let gate = self.gate;
        let block = styles::glass_block(self.highlighted);
        let inner = block.inner(area);
        block.render(area, buf);

        let status = format!("[{}]", gate.status.label());
        let name_width = (inner.width as usize).saturating_sub(status.len() + 1);
        let name = format!(" {:<width$}", gate.name, width = name_width.saturating_sub(1));
        let name_style = if self.highlighted {
            styles::focused_selected()
        } else {
            styles::title()
        };

        let mut sensors = vec![Span::styled(" Sensor Health ", styles::text_muted())];
        for sensor in &gate.sensors {
            sensors.push(Span::styled(self.icons.dot(), styles::sensor_status(sensor.status)));
            sensors.push(Span::styled(
                format!(" {}%  ", sensor.health),
                styles::text_secondary(),
            ));
        }

        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(name, name_style),
                Span::raw(" "),
                Span::styled(status, styles::gate_status(gate.status)),
            ]),
            Line::from(vec![
                Span::styled(format!(" {}", gate.id), styles::accent()),
                Span::styled("  ", styles::text_muted()),
                Span::styled(gate.location.as_str(), styles::text_secondary()),
            ]),
            Line::from(sensors),
        ])
        .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette;
    use gatewatch_core::GateCatalog;

    fn render(gates: &[&GateRecord], query: &str, selected: usize, height: u16) -> TestTerminal {
        let mut term = TestTerminal::with_size(90, height);
        term.render_widget(
            GateList::new(gates, query, IconSet::default()).selected(selected),
            term.area(),
        );
        term
    }

    #[test]
    fn test_list_header_and_search_placeholder() {
        let catalog = GateCatalog::reference();
        let gates = catalog.search("");
        let term = render(&gates, "", 0, 40);

        assert!(term.buffer_contains("Gate List"));
        assert!(term.buffer_contains("Browse and manage all railway gates"));
        assert!(term.buffer_contains("Search by gate name or location..."));
    }

    #[test]
    fn test_cards_show_sensor_health() {
        let catalog = GateCatalog::reference();
        let gates = catalog.search("tangerang");
        let term = render(&gates, "tangerang", 0, 20);

        assert!(term.buffer_contains("Gate 3 - Tangerang Junction"));
        assert!(term.buffer_contains("[Maintenance]"));
        assert!(term.buffer_contains("Sensor Health"));
        assert!(term.buffer_contains("45%"));
        assert!(!term.buffer_contains("Gate 1 - Central Station"));
    }

    #[test]
    fn test_empty_result_message() {
        let catalog = GateCatalog::reference();
        let gates = catalog.search("surabaya");
        let term = render(&gates, "surabaya", 0, 20);

        assert!(term.buffer_contains("No gates found matching your search."));
        assert!(term.buffer_contains("surabaya"));
    }

    #[test]
    fn test_highlighted_card_scrolls_into_view() {
        let catalog = GateCatalog::reference();
        let gates = catalog.search("");
        // Room for two cards only
        let term = render(&gates, "", 4, 6 + CARD_HEIGHT * 2);

        assert!(term.buffer_contains("Gate 5 - Bogor Terminal"));
        assert!(!term.buffer_contains("Gate 1 - Central Station"));

        let row = term.find_line("Gate 5 - Bogor Terminal").unwrap();
        let buffer = term.buffer();
        assert!((0..buffer.area.width).any(|x| buffer[(x, row)].bg == palette::ACCENT));
    }
}
