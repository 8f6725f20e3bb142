//! Icon set for the TUI.
//!
//! `IconSet` resolves glyphs at runtime from the configured `IconMode`:
//! - `IconMode::Unicode`: safe characters that work in all terminals
//! - `IconMode::NerdFonts`: Nerd Font glyphs (requires a Nerd Font)

use gatewatch_app::config::IconMode;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn train(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f238}", // nf-fa-train
            IconMode::Unicode => "\u{25b6}",   // ▶
        }
    }

    pub fn gate_marker(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f111}", // nf-fa-circle
            IconMode::Unicode => "\u{25c9}",   // ◉
        }
    }

    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }

    pub fn back_arrow(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f060}", // nf-fa-arrow_left
            IconMode::Unicode => "\u{2190}",   // ←
        }
    }

    pub fn camera(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f03d}", // nf-fa-video_camera
            IconMode::Unicode => "\u{25a3}",   // ▣
        }
    }

    pub fn unlock(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f09c}", // nf-fa-unlock
            IconMode::Unicode => "\u{25cb}",   // ○
        }
    }

    pub fn lock(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f023}", // nf-fa-lock
            IconMode::Unicode => "\u{25a0}",   // ■
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    pub fn activity(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0f1}", // nf-fa-heartbeat
            IconMode::Unicode => "~",
        }
    }

    pub fn clock(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f017}", // nf-fa-clock_o
            IconMode::Unicode => "\u{25f7}",   // ◷
        }
    }

    pub fn search(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f002}", // nf-fa-search
            IconMode::Unicode => "/",
        }
    }

    pub fn settings(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f013}", // nf-fa-cog
            IconMode::Unicode => "\u{2699}",   // ⚙
        }
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}
