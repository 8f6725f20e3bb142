//! gatewatch-app - Application state and orchestration for gatewatch
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: messages, the view-selection state machine, per-screen
//! state, the update function, simulated command timers, configuration
//! loading and signal handling. It has no terminal dependencies.

pub mod actions;
pub mod config;
pub mod confirm_dialog;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod view;

// Re-export primary types
pub use actions::CommandTaskMap;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, UiMode};
pub use view::{ActiveView, MenuEntry, Screen, ViewState, MENU_ENTRIES};
