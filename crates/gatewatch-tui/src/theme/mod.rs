//! Centralized theme system.
//!
//! - `palette`: raw color constants
//! - `styles`: semantic style builders
//! - `icons`: glyphs with Nerd Font and Unicode variants

pub mod icons;
pub mod palette;
pub mod styles;
