//! Schematic "Live Map View": gate markers and the animated train
//!
//! Positions are percentages of the map's inner area, so the picture keeps
//! its shape at any terminal size.

use gatewatch_core::{GateRecord, GateStatus};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{icons::IconSet, palette, styles};

/// Marker placement (x%, y%) by catalog position
pub const GATE_MARKER_POSITIONS: [(f64, f64); 5] = [
    (15.0, 25.0),
    (35.0, 40.0),
    (50.0, 55.0),
    (70.0, 50.0),
    (85.0, 65.0),
];

/// Placement for gates beyond the fixed slots
pub const FALLBACK_MARKER_POSITION: (f64, f64) = (50.0, 50.0);

/// Marker placement for the gate at `index`
pub fn marker_percent(index: usize) -> (f64, f64) {
    GATE_MARKER_POSITIONS
        .get(index)
        .copied()
        .unwrap_or(FALLBACK_MARKER_POSITION)
}

/// Train placement for animation step `position` (0..100)
pub fn train_percent(position: u8) -> (f64, f64) {
    let p = f64::from(position);
    (15.0 + p * 0.7, 25.0 + (p * 0.1).sin() * 15.0)
}

/// Map a percentage point onto a cell of `area`
pub fn percent_to_cell(area: Rect, x_pct: f64, y_pct: f64) -> (u16, u16) {
    let max_x = f64::from(area.width.saturating_sub(1));
    let max_y = f64::from(area.height.saturating_sub(1));
    let x = (x_pct.clamp(0.0, 100.0) / 100.0 * max_x).round() as u16;
    let y = (y_pct.clamp(0.0, 100.0) / 100.0 * max_y).round() as u16;
    (area.x + x, area.y + y)
}

/// Map panel over the whole catalog
pub struct GateMap<'a> {
    gates: &'a [GateRecord],
    train_position: u8,
    icons: IconSet,
}

impl<'a> GateMap<'a> {
    pub fn new(gates: &'a [GateRecord], icons: IconSet) -> Self {
        Self {
            gates,
            train_position: 0,
            icons,
        }
    }

    pub fn train_position(mut self, position: u8) -> Self {
        self.train_position = position;
        self
    }

    fn render_track(&self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(palette::TRACK);
        for step in 0..100u8 {
            let (x_pct, y_pct) = train_percent(step);
            let (x, y) = percent_to_cell(area, x_pct, y_pct);
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char('·');
                cell.set_style(style);
            }
        }
    }

    fn render_markers(&self, area: Rect, buf: &mut Buffer) {
        for (index, gate) in self.gates.iter().enumerate() {
            let (x_pct, y_pct) = marker_percent(index);
            let (x, y) = percent_to_cell(area, x_pct, y_pct);
            let color = styles::gate_status_color(gate.status);

            buf.set_string(
                x,
                y,
                self.icons.gate_marker(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            );

            // Label to the right when it fits, otherwise to the left
            let label = gate.id.as_str();
            let label_width = label.width() as u16;
            let label_x = if x + 2 + label_width <= area.right() {
                x + 2
            } else {
                x.saturating_sub(label_width + 1).max(area.x)
            };
            buf.set_string(label_x, y, label, styles::text_secondary());
        }
    }

    fn render_train(&self, area: Rect, buf: &mut Buffer) {
        let (x_pct, y_pct) = train_percent(self.train_position);
        let (x, y) = percent_to_cell(area, x_pct, y_pct);
        buf.set_string(
            x,
            y,
            self.icons.train(),
            Style::default()
                .fg(palette::TRAIN)
                .add_modifier(Modifier::BOLD),
        );
    }

    fn render_legend(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for status in [GateStatus::Open, GateStatus::Closed, GateStatus::Maintenance] {
            spans.push(Span::styled(
                self.icons.dot(),
                Style::default().fg(styles::gate_status_color(status)),
            ));
            spans.push(Span::styled(
                format!(" {}  ", status.label()),
                styles::text_muted(),
            ));
        }
        buf.set_line(area.x, area.bottom() - 1, &Line::from(spans), area.width);
    }
}

impl Widget for GateMap<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Span::styled(" Live Map View ", styles::title()))
            .style(Style::default().bg(palette::MAP_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height < 3 {
            return;
        }

        // Bottom row is the legend
        let map_area = Rect::new(inner.x, inner.y, inner.width, inner.height - 1);

        self.render_track(map_area, buf);
        self.render_markers(map_area, buf);
        self.render_train(map_area, buf);
        self.render_legend(inner, buf);
    }
}
