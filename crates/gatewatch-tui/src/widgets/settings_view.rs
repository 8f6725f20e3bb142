//! Settings screen: preference cards and the System Information panel

use gatewatch_app::config::SystemInfo;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::dashboard::render_page_header;
use crate::theme::{icons::IconSet, palette, styles};

pub struct SettingsCard {
    pub title: &'static str,
    pub description: &'static str,
    pub color: Color,
}

/// Cosmetic cards, in display order
pub const SETTINGS_CARDS: [SettingsCard; 5] = [
    SettingsCard {
        title: "Notifications",
        description: "Configure alert and notification preferences",
        color: Color::LightRed,
    },
    SettingsCard {
        title: "Security",
        description: "Manage access control and authentication",
        color: palette::STATUS_BLUE,
    },
    SettingsCard {
        title: "User Management",
        description: "Add or remove system operators",
        color: palette::STATUS_GREEN,
    },
    SettingsCard {
        title: "Data Management",
        description: "Configure data storage and backup",
        color: Color::Magenta,
    },
    SettingsCard {
        title: "Network Settings",
        description: "Configure network and connectivity options",
        color: palette::STATUS_RED,
    },
];

const CARD_HEIGHT: u16 = 4;

pub struct SettingsView<'a> {
    system: &'a SystemInfo,
    selected: usize,
    icons: IconSet,
}

impl<'a> SettingsView<'a> {
    pub fn new(system: &'a SystemInfo, icons: IconSet) -> Self {
        Self {
            system,
            selected: 0,
            icons,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    fn render_cards(&self, area: Rect, buf: &mut Buffer) {
        let columns = columns_for(area.width);
        let width = area.width / columns as u16;

        for (index, card) in SETTINGS_CARDS.iter().enumerate() {
            let col = (index % columns) as u16;
            let row = (index / columns) as u16;
            let y = area.y + row * CARD_HEIGHT;
            if y + CARD_HEIGHT > area.bottom() {
                break;
            }
            let card_area = Rect::new(area.x + col * width, y, width, CARD_HEIGHT);
            self.render_card(card, index == self.selected, card_area, buf);
        }
    }

    fn render_card(&self, card: &SettingsCard, selected: bool, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(selected);
        let inner = block.inner(area);
        block.render(area, buf);

        let title = if selected {
            Span::styled(
                format!(" {:<width$}", card.title, width = (inner.width as usize).saturating_sub(3)),
                styles::focused_selected(),
            )
        } else {
            Span::styled(format!(" {}", card.title), styles::title())
        };

        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(self.icons.dot(), Style::default().fg(card.color)),
                title,
            ]),
            Line::styled(format!("  {}", card.description), styles::text_muted()),
        ])
        .render(inner, buf);
    }

    fn render_system_info(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(Line::from(vec![
            Span::styled(format!(" {} ", self.icons.settings()), styles::accent()),
            Span::styled("System Information ", styles::title()),
        ]));
        let inner = block.inner(area);
        block.render(area, buf);

        let [version, updated, uptime] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ])
        .areas(inner);

        for (label, value, cell) in [
            ("Version", self.system.version.as_str(), version),
            ("Last Update", self.system.last_update.as_str(), updated),
            ("Uptime", self.system.uptime.as_str(), uptime),
        ] {
            Paragraph::new(vec![
                Line::styled(label, styles::text_muted()),
                Line::styled(value, styles::text_primary()),
            ])
            .render(cell, buf);
        }
    }
}

fn columns_for(width: u16) -> usize {
    match width {
        0..=59 => 1,
        60..=119 => 2,
        _ => 3,
    }
}

impl Widget for SettingsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = columns_for(area.width);
        let card_rows = SETTINGS_CARDS.len().div_ceil(columns) as u16;

        let [header_area, cards_area, info_area, _] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(card_rows * CARD_HEIGHT),
            Constraint::Length(4),
            Constraint::Fill(1),
        ])
        .areas(area);

        render_page_header(
            "Settings",
            "Configure system preferences and options",
            header_area,
            buf,
        );
        self.render_cards(cards_area, buf);
        self.render_system_info(info_area, buf);
    }
}
