//! gatewatch Library
//!
//! Terminal dashboard for monitoring railway level-crossing gates. The
//! binary resolves settings and the gate catalog here, then hands the
//! resulting state to the TUI runner.

use std::path::Path;

use gatewatch_app::config::{load_settings, resolve_catalog_path};
use gatewatch_app::state::AppState;
use gatewatch_core::prelude::*;
use gatewatch_core::GateCatalog;

// Re-export workspace crates
pub use gatewatch_app as app;
pub use gatewatch_core as core;
pub use gatewatch_tui as tui;

/// Build the initial state for `base_path`.
///
/// Settings come from `.gatewatch/config.toml` (defaults when missing). The
/// catalog comes from `gates_override`, else `catalog.path` from the config,
/// else the embedded reference gates. An explicitly configured payload that
/// fails to load is an error.
pub fn load_state(base_path: &Path, gates_override: Option<&Path>) -> Result<AppState> {
    let settings = load_settings(base_path);

    let catalog = match resolve_catalog_path(base_path, &settings, gates_override) {
        Some(path) => GateCatalog::load(&path)
            .with_context(|| format!("Failed to load gate catalog {}", path.display()))?,
        None => {
            info!("Using the embedded reference gate catalog");
            GateCatalog::reference()
        }
    };

    Ok(AppState::with_catalog(catalog, settings))
}

/// Run the dashboard for `base_path` until the operator quits
pub async fn run(base_path: &Path, gates_override: Option<&Path>) -> Result<()> {
    let state = load_state(base_path, gates_override)?;
    gatewatch_tui::run(state).await
}
