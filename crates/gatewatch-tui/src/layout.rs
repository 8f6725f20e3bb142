//! Screen layout: fixed sidebar on the left, screen content on the right

use ratatui::layout::{Constraint, Layout, Rect};

/// Preferred sidebar width
pub const SIDEBAR_WIDTH: u16 = 22;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub sidebar: Rect,
    pub content: Rect,
}

/// Split the terminal into sidebar and content.
///
/// Narrow terminals give the sidebar at most a third of the width.
pub fn create(area: Rect) -> ScreenAreas {
    let sidebar_width = SIDEBAR_WIDTH.min(area.width / 3);
    let chunks =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(1)]).split(area);

    ScreenAreas {
        sidebar: chunks[0],
        content: chunks[1],
    }
}
