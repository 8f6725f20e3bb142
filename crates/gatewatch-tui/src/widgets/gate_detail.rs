//! Gate detail screen
//!
//! Header with status badge, two mock CCTV panels, the Control Center,
//! sensor health gauges and the activity log. An unknown gate id renders
//! a "Gate not found" placeholder instead.

use gatewatch_core::{CctvFeed, GateCommand, GateLogEntry, GateRecord, GateStatus, Sensor};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::{icons::IconSet, palette, styles};

/// A labelled box drawn over a mock camera frame, in percent of the frame
struct Detection {
    label: &'static str,
    x: u16,
    y: u16,
    width: u16,
    height: u16,
    color: Color,
}

const PRIMARY_CAMERA_DETECTIONS: [Detection; 2] = [
    Detection {
        label: "Vehicle Detected",
        x: 20,
        y: 30,
        width: 25,
        height: 35,
        color: palette::STATUS_GREEN,
    },
    Detection {
        label: "Pedestrian",
        x: 55,
        y: 45,
        width: 20,
        height: 30,
        color: palette::STATUS_YELLOW,
    },
];

const SECONDARY_CAMERA_DETECTIONS: [Detection; 1] = [Detection {
    label: "Track Clear",
    x: 15,
    y: 40,
    width: 70,
    height: 15,
    color: palette::STATUS_BLUE,
}];

const GAUGE_FILLED: &str = "█";
const GAUGE_EMPTY: &str = "░";

pub struct GateDetail<'a> {
    gate: Option<&'a GateRecord>,
    pending: Option<GateCommand>,
    /// Enablement per entry of `GateCommand::ALL`
    enabled: [bool; 3],
    clock: String,
    icons: IconSet,
}

impl<'a> GateDetail<'a> {
    pub fn new(gate: Option<&'a GateRecord>, icons: IconSet) -> Self {
        Self {
            gate,
            pending: None,
            enabled: [false; 3],
            clock: String::new(),
            icons,
        }
    }

    pub fn pending(mut self, pending: Option<GateCommand>) -> Self {
        self.pending = pending;
        self
    }

    pub fn enabled(mut self, enabled: [bool; 3]) -> Self {
        self.enabled = enabled;
        self
    }

    /// Wall-clock text stamped on the camera panels
    pub fn clock(mut self, clock: impl Into<String>) -> Self {
        self.clock = clock.into();
        self
    }

    fn render_not_found(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let top = inner.y + inner.height.saturating_sub(2) / 2;
        let text_area = Rect::new(inner.x, top, inner.width, inner.bottom().saturating_sub(top));
        Paragraph::new(vec![
            Line::styled("Gate not found", styles::title()),
            Line::from(vec![
                Span::styled(self.icons.back_arrow(), styles::keybinding()),
                Span::styled(" Esc  Back to Dashboard", styles::text_muted()),
            ]),
        ])
        .alignment(Alignment::Center)
        .render(text_area, buf);
    }

    fn render_header(&self, gate: &GateRecord, area: Rect, buf: &mut Buffer) {
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(self.icons.back_arrow(), styles::keybinding()),
                Span::styled(" Back to Dashboard", styles::accent()),
                Span::styled("  (Esc)", styles::text_muted()),
            ]),
            Line::styled(gate.name.as_str(), styles::title()),
            Line::from(vec![
                Span::styled(gate.id.as_str(), styles::accent()),
                Span::styled("  ", styles::text_muted()),
                Span::styled(gate.location.as_str(), styles::text_secondary()),
            ]),
        ])
        .render(area, buf);

        let badge = status_badge(gate.status);
        let width = badge.width() as u16;
        if area.width > width && area.height > 1 {
            buf.set_line(area.right() - width, area.y + 1, &badge, width);
        }
    }

    fn render_controls(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(Span::styled(" Control Center ", styles::title()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        for (command, enabled) in GateCommand::ALL.iter().zip(self.enabled) {
            let icon = match command {
                GateCommand::Open => self.icons.unlock(),
                GateCommand::Close => self.icons.lock(),
                GateCommand::Alarm => self.icons.alert(),
            };
            let style = if enabled {
                command_style(*command)
            } else {
                styles::disabled()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("[{}] ", command.shortcut()), if enabled {
                    styles::keybinding()
                } else {
                    styles::disabled()
                }),
                Span::styled(icon, style),
                Span::raw(" "),
                Span::styled(command.button_caption(), style),
            ]));
            lines.push(Line::from(""));
        }

        if self.pending.is_some() {
            lines.push(Line::from(vec![
                Span::styled(self.icons.clock(), styles::accent()),
                Span::styled(" Processing command...", styles::accent()),
            ]));
        }

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_sensors(&self, sensors: &[Sensor], area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(Line::from(vec![
            Span::styled(format!(" {} ", self.icons.activity()), styles::accent()),
            Span::styled("Sensor Health ", styles::title()),
        ]));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        for sensor in sensors {
            let color = styles::sensor_status_color(sensor.status);
            lines.push(Line::from(vec![
                Span::styled(format!("{:<16}", sensor.name), styles::text_primary()),
                Span::styled(
                    format!("{:>4}%", sensor.health),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(self.icons.dot(), Style::default().fg(color)),
                Span::styled(format!(" {}", sensor.status.label()), styles::text_secondary()),
            ]));
            lines.push(gauge_line(sensor.health, inner.width, color));
        }

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_logs(&self, logs: &[GateLogEntry], area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(Line::from(vec![
            Span::styled(format!(" {} ", self.icons.clock()), styles::accent()),
            Span::styled("Activity Logs ", styles::title()),
        ]));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = logs
            .iter()
            .flat_map(|log| {
                [
                    Line::from(vec![
                        Span::styled(self.icons.dot(), styles::accent()),
                        Span::raw(" "),
                        Span::styled(log.action.as_str(), styles::text_primary()),
                    ]),
                    Line::from(vec![
                        Span::styled(format!("  {}", log.user), styles::text_secondary()),
                        Span::styled(format!("  {}", log.timestamp), styles::text_muted()),
                    ]),
                ]
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for GateDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(gate) = self.gate else {
            self.render_not_found(area, buf);
            return;
        };

        let lower_height = (gate.sensors.len().max(gate.logs.len()) as u16 * 2 + 2).max(6);
        let [header_area, upper_area, lower_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(9),
            Constraint::Length(lower_height),
        ])
        .areas(area);

        self.render_header(gate, header_area, buf);

        let [camera_a, camera_b, controls] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Length(26),
        ])
        .areas(upper_area);

        CameraPanel::new(&gate.cctv_feeds[0], &PRIMARY_CAMERA_DETECTIONS, &self.clock, self.icons)
            .render(camera_a, buf);
        CameraPanel::new(&gate.cctv_feeds[1], &SECONDARY_CAMERA_DETECTIONS, &self.clock, self.icons)
            .render(camera_b, buf);
        self.render_controls(controls, buf);

        let [sensors_area, logs_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(lower_area);
        self.render_sensors(&gate.sensors, sensors_area, buf);
        self.render_logs(&gate.logs, logs_area, buf);
    }
}

/// Mock camera frame with detection overlays
struct CameraPanel<'a> {
    feed: &'a CctvFeed,
    detections: &'a [Detection],
    clock: &'a str,
    icons: IconSet,
}

impl<'a> CameraPanel<'a> {
    fn new(feed: &'a CctvFeed, detections: &'a [Detection], clock: &'a str, icons: IconSet) -> Self {
        Self {
            feed,
            detections,
            clock,
            icons,
        }
    }
}

impl Widget for CameraPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Line::from(vec![
                Span::styled(format!(" {} ", self.icons.camera()), styles::accent()),
                Span::styled(format!("{} ", self.feed.name), styles::title()),
            ]))
            .title(
                Line::from(vec![
                    Span::styled(self.icons.dot(), Style::default().fg(palette::STATUS_RED)),
                    Span::styled(" LIVE ", styles::text_primary()),
                ])
                .right_aligned(),
            )
            .style(Style::default().bg(palette::MAP_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 || inner.width < 8 {
            return;
        }

        // Bottom row carries the feed id and clock
        let frame = Rect::new(inner.x, inner.y, inner.width, inner.height - 1);
        for detection in self.detections {
            render_detection(detection, frame, buf);
        }

        let info = Line::from(vec![
            Span::styled(self.feed.id.as_str(), styles::accent()),
            Span::styled(format!("  {}", self.clock), styles::text_secondary()),
        ]);
        buf.set_line(inner.x, inner.bottom() - 1, &info, inner.width);
    }
}

fn render_detection(detection: &Detection, frame: Rect, buf: &mut Buffer) {
    let x = frame.x + frame.width * detection.x / 100;
    let y = frame.y + frame.height * detection.y / 100;
    let width = (frame.width * detection.width / 100).max(2);
    let height = (frame.height * detection.height / 100).max(2);
    let rect = Rect::new(x, y, width, height).intersection(frame);

    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(detection.color))
        .render(rect, buf);

    // Label above the box, or on its top edge when there is no room
    let label_y = if rect.y > frame.y { rect.y - 1 } else { rect.y };
    buf.set_string(
        rect.x,
        label_y,
        detection.label,
        Style::default().fg(detection.color),
    );
}

fn status_badge(status: GateStatus) -> Line<'static> {
    let color = styles::gate_status_color(status);
    Line::from(Span::styled(
        format!(" {} ", status.label()),
        Style::default()
            .fg(palette::CONTRAST_FG)
            .bg(color)
            .add_modifier(Modifier::BOLD),
    ))
}

fn command_style(command: GateCommand) -> Style {
    let color = match command {
        GateCommand::Open => palette::STATUS_GREEN,
        GateCommand::Close => palette::STATUS_RED,
        GateCommand::Alarm => palette::STATUS_YELLOW,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Horizontal bar filled in proportion to `health`
fn gauge_line(health: u16, width: u16, color: Color) -> Line<'static> {
    let total = width as usize;
    let filled = total * usize::from(health.min(100)) / 100;
    Line::from(vec![
        Span::styled(GAUGE_FILLED.repeat(filled), Style::default().fg(color)),
        Span::styled(GAUGE_EMPTY.repeat(total - filled), styles::text_muted()),
    ])
}
