//! Custom widget components

mod confirm_dialog;
mod dashboard;
pub mod gate_detail;
pub mod gate_list;
pub mod gate_map;
pub mod modal_overlay;
mod notification;
mod search_input;
pub mod settings_view;
mod sidebar;
mod status_table;

pub use confirm_dialog::ConfirmDialog;
pub use dashboard::Dashboard;
pub use gate_detail::GateDetail;
pub use gate_list::GateList;
pub use gate_map::GateMap;
pub use notification::Notification;
pub use search_input::SearchInput;
pub use settings_view::SettingsView;
pub use sidebar::Sidebar;
pub use status_table::StatusTable;

// Re-export state types from app layer (these are used by render/)
pub use gatewatch_app::confirm_dialog::ConfirmDialogState;
