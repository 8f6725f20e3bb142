//! # gatewatch-core - Core Domain Types
//!
//! Foundation crate for gatewatch. Provides the gate record model, the
//! read-only gate catalog, simulated command rules, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`GateRecord`] - A level-crossing gate with cameras, sensors and logs
//! - [`GateStatus`], [`SensorStatus`] - Authored status values
//! - [`AppPhase`] - Application lifecycle phase
//!
//! ### Catalog (`catalog`)
//! - [`GateCatalog`] - Ordered gate collection with lookup and search
//!
//! ### Commands (`command`)
//! - [`GateCommand`] - Manual Open / Manual Close / Emergency Alarm
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use gatewatch_core::prelude::*;
//! ```

pub mod catalog;
pub mod command;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all gatewatch crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use catalog::{CatalogFile, GateCatalog};
pub use command::GateCommand;
pub use error::{Error, Result, ResultExt};
pub use types::{AppPhase, CctvFeed, GateLogEntry, GateRecord, GateStatus, Sensor, SensorStatus};
