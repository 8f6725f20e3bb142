//! Configuration file parsing for gatewatch
//!
//! Supports `.gatewatch/config.toml` in the base directory.

pub mod settings;
pub mod types;

pub use settings::{config_file_path, init_config_dir, load_settings, resolve_catalog_path};
pub use types::*;
