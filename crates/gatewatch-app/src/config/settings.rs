//! Settings parser for .gatewatch/config.toml

use super::types::Settings;
use gatewatch_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const GATEWATCH_DIR: &str = ".gatewatch";

/// Path of the config file under `base_path`
pub fn config_file_path(base_path: &Path) -> PathBuf {
    base_path.join(GATEWATCH_DIR).join(CONFIG_FILENAME)
}

/// Load settings from .gatewatch/config.toml
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(base_path: &Path) -> Settings {
    let config_path = config_file_path(base_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Resolve the catalog payload to load.
///
/// An explicit override wins over `catalog.path`; relative config paths are
/// taken from `base_path`. `None` means the embedded reference catalog.
pub fn resolve_catalog_path(
    base_path: &Path,
    settings: &Settings,
    override_path: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path.to_path_buf());
    }
    settings.catalog.path.as_ref().map(|p| {
        if p.is_absolute() {
            p.clone()
        } else {
            base_path.join(p)
        }
    })
}

/// Create the default config file in .gatewatch/
///
/// An existing config file is left untouched.
pub fn init_config_dir(base_path: &Path) -> Result<()> {
    let gatewatch_dir = base_path.join(GATEWATCH_DIR);

    if !gatewatch_dir.exists() {
        std::fs::create_dir_all(&gatewatch_dir)
            .map_err(|e| Error::config(format!("Failed to create .gatewatch dir: {}", e)))?;
    }

    let config_path = gatewatch_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# gatewatch configuration

[behavior]
confirm_quit = true     # Ask before quitting while a gate command is in flight

[ui]
tick_rate_ms = 50       # Input poll timeout and map animation period
icons = "unicode"       # "unicode" or "nerd_fonts"

[commands]
delay_ms = 1500         # Simulated command round-trip

[catalog]
# Gate payload (.toml or .json), relative to this directory's parent.
# Leave unset to use the built-in reference gates.
# path = "gates.toml"

[system]
version = "v2.5.3"
last_update = "Dec 15, 2025"
uptime = "45 days, 12 hours"
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Wrote default config to {:?}", config_path);
    }

    Ok(())
}
