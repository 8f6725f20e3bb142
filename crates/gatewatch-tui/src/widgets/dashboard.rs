//! Overview screen: page header, live map and status table

use gatewatch_app::state::OverviewState;
use gatewatch_core::GateRecord;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use super::{GateMap, StatusTable};
use crate::theme::{icons::IconSet, styles};

/// Two-line title block shared by the content screens
pub(crate) fn render_page_header(title: &str, subtitle: &str, area: Rect, buf: &mut Buffer) {
    Paragraph::new(vec![
        Line::styled(title.to_string(), styles::title()),
        Line::styled(subtitle.to_string(), styles::text_muted()),
    ])
    .render(area, buf);
}

pub struct Dashboard<'a> {
    gates: &'a [GateRecord],
    overview: &'a OverviewState,
    icons: IconSet,
}

impl<'a> Dashboard<'a> {
    pub fn new(gates: &'a [GateRecord], overview: &'a OverviewState, icons: IconSet) -> Self {
        Self {
            gates,
            overview,
            icons,
        }
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Header + border rows + one row per gate
        let table_height = (self.gates.len() as u16 + 4).min(area.height / 2).max(4);

        let [header_area, map_area, table_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(table_height),
        ])
        .areas(area);

        render_page_header(
            "Railway Gate Monitoring System",
            "Real-time monitoring and control dashboard",
            header_area,
            buf,
        );

        GateMap::new(self.gates, self.icons)
            .train_position(self.overview.train_position)
            .render(map_area, buf);

        StatusTable::new(self.gates, self.icons)
            .selected(self.overview.selected)
            .render(table_area, buf);
    }
}
