//! gatewatch-tui - Terminal UI for gatewatch
//!
//! This crate provides the ratatui-based dashboard. It owns the terminal,
//! polls input, renders `AppState` every frame and feeds messages into the
//! gatewatch-app update loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::run;
