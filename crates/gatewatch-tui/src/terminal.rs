//! Raw mode and alternate screen around the dashboard's lifetime

use gatewatch_core::prelude::*;
use ratatui::DefaultTerminal;

/// Take over the terminal. A panic afterwards hands it back before the
/// report is printed.
pub fn enter() -> Result<DefaultTerminal> {
    install_panic_hook();
    ratatui::try_init().map_err(Error::TerminalInit)
}

/// Hand the terminal back to the shell
pub fn leave() {
    if let Err(e) = ratatui::try_restore() {
        warn!("Failed to restore terminal: {}", e);
    }
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::try_restore();
        error!("Dashboard panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}
