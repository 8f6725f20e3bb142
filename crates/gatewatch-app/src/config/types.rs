//! Configuration types for `.gatewatch/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application settings (.gatewatch/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub commands: CommandSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub system: SystemInfo,
}

/// Behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before quitting while a gate command is in flight
    #[serde(default = "default_true")]
    pub confirm_quit: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self { confirm_quit: true }
    }
}

/// Icon rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals
    #[default]
    Unicode,
    /// Nerd Font glyphs, requires a Nerd Font in the terminal
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Event poll timeout, also the animation tick period
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    #[serde(default)]
    pub icons: IconMode,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            icons: IconMode::default(),
        }
    }
}

/// Simulated command settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommandSettings {
    /// How long a simulated command stays in flight
    #[serde(default = "default_command_delay_ms")]
    pub delay_ms: u64,
}

impl Default for CommandSettings {
    fn default() -> Self {
        Self {
            delay_ms: default_command_delay_ms(),
        }
    }
}

/// Gate catalog source
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Payload file, relative to the base directory. `None` uses the
    /// embedded reference catalog.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Values shown in the Settings screen's System Information panel
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SystemInfo {
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default = "default_last_update")]
    pub last_update: String,

    #[serde(default = "default_uptime")]
    pub uptime: String,
}

impl Default for SystemInfo {
    fn default() -> Self {
        Self {
            version: default_version(),
            last_update: default_last_update(),
            uptime: default_uptime(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_command_delay_ms() -> u64 {
    1500
}

fn default_version() -> String {
    "v2.5.3".to_string()
}

fn default_last_update() -> String {
    "Dec 15, 2025".to_string()
}

fn default_uptime() -> String {
    "45 days, 12 hours".to_string()
}
