//! Semantic style builders.

use gatewatch_core::{GateStatus, SensorStatus};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn title() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// Highlighted row, card or sidebar entry
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn disabled() -> Style {
    Style::default()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::DIM)
}

// --- Domain colors ---
pub fn gate_status_color(status: GateStatus) -> Color {
    match status {
        GateStatus::Open => palette::STATUS_GREEN,
        GateStatus::Closed => palette::STATUS_RED,
        GateStatus::Maintenance => palette::STATUS_YELLOW,
    }
}

pub fn sensor_status_color(status: SensorStatus) -> Color {
    match status {
        SensorStatus::Good => palette::STATUS_GREEN,
        SensorStatus::Warning => palette::STATUS_YELLOW,
        SensorStatus::Error => palette::STATUS_RED,
    }
}

/// Bold text in the status color
pub fn gate_status(status: GateStatus) -> Style {
    Style::default()
        .fg(gate_status_color(status))
        .add_modifier(Modifier::BOLD)
}

pub fn sensor_status(status: SensorStatus) -> Style {
    Style::default().fg(sensor_status_color(status))
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_status_colors() {
        assert_eq!(gate_status_color(GateStatus::Open), palette::STATUS_GREEN);
        assert_eq!(gate_status_color(GateStatus::Closed), palette::STATUS_RED);
        assert_eq!(
            gate_status_color(GateStatus::Maintenance),
            palette::STATUS_YELLOW
        );
    }

    #[test]
    fn test_sensor_status_style_uses_status_color() {
        assert_eq!(
            sensor_status(SensorStatus::Error).fg,
            Some(palette::STATUS_RED)
        );
    }
}
