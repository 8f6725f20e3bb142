//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(#[source] std::io::Error),

    #[error("Failed to install signal handler: {message}")]
    Signal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Catalog Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Malformed JSON gate catalog: {0}")]
    CatalogJson(#[from] serde_json::Error),

    #[error("Malformed TOML gate catalog: {0}")]
    CatalogToml(#[from] toml::de::Error),

    #[error("Invalid gate catalog: {message}")]
    CatalogInvalid { message: String },

    #[error("Duplicate gate id in catalog: {id}")]
    DuplicateGateId { id: String },

    #[error("Sensor '{sensor}' on gate {gate_id} has health {health}, expected 0-100")]
    SensorHealthOutOfRange {
        gate_id: String,
        sensor: String,
        health: u16,
    },

    #[error("Unsupported catalog format (expected .toml or .json): {path}")]
    UnsupportedCatalogFormat { path: PathBuf },

    #[error("Gate not found: {id}")]
    GateNotFound { id: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn catalog(message: impl Into<String>) -> Self {
        Self::CatalogInvalid {
            message: message.into(),
        }
    }

    pub fn gate_not_found(id: impl Into<String>) -> Self {
        Self::GateNotFound { id: id.into() }
    }

    pub fn signal(message: impl Into<String>) -> Self {
        Self::Signal {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::GateNotFound { .. } // Detail screen shows a placeholder
                | Error::Signal { .. }
                | Error::Config { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::TerminalInit(_)
                | Error::CatalogJson(_)
                | Error::CatalogToml(_)
                | Error::CatalogInvalid { .. }
                | Error::DuplicateGateId { .. }
                | Error::SensorHealthOutOfRange { .. }
                | Error::UnsupportedCatalogFormat { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::gate_not_found("G404");
        assert_eq!(err.to_string(), "Gate not found: G404");

        let err = Error::DuplicateGateId {
            id: "G001".to_string(),
        };
        assert!(err.to_string().contains("G001"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_malformed_payloads_are_fatal_catalog_errors() {
        let toml_err = toml::from_str::<toml::Value>("not valid {{{{").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::CatalogToml(_)));
        assert!(err.is_fatal());

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::CatalogJson(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_signal_setup_failure_is_recoverable() {
        let err = Error::signal("SIGTERM listener unavailable");
        assert!(err.is_recoverable());
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("SIGTERM"));
    }

    #[test]
    fn test_gate_not_found_is_recoverable_not_fatal() {
        let err = Error::gate_not_found("nonexistent");
        assert!(err.is_recoverable());
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_catalog_errors_are_fatal() {
        assert!(Error::catalog("empty id").is_fatal());
        assert!(Error::DuplicateGateId {
            id: "G001".to_string()
        }
        .is_fatal());
        assert!(Error::UnsupportedCatalogFormat {
            path: PathBuf::from("gates.yaml")
        }
        .is_fatal());
        let no_tty = std::io::Error::new(std::io::ErrorKind::Unsupported, "no tty");
        assert!(Error::TerminalInit(no_tty).is_fatal());
    }

    #[test]
    fn test_sensor_health_message() {
        let err = Error::SensorHealthOutOfRange {
            gate_id: "G003".to_string(),
            sensor: "Gate Motor".to_string(),
            health: 300,
        };
        let msg = err.to_string();
        assert!(msg.contains("Gate Motor"));
        assert!(msg.contains("300"));
    }

    #[test]
    fn test_context_preserves_error() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result.context("reading catalog").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
