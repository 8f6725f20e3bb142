//! File logging for the dashboard
//!
//! The terminal is fully owned by the UI, so every log line goes to a daily
//! rolling file. `GATEWATCH_LOG` takes an `EnvFilter` directive and
//! `GATEWATCH_LOG_DIR` moves the files elsewhere.
//!
//! ```bash
//! GATEWATCH_LOG=debug gatewatch
//! GATEWATCH_LOG=gatewatch_app=trace GATEWATCH_LOG_DIR=/tmp/gw gatewatch
//! ```

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the tracing filter directive
pub const LOG_ENV_VAR: &str = "GATEWATCH_LOG";

/// Environment variable overriding the log directory
pub const LOG_DIR_ENV_VAR: &str = "GATEWATCH_LOG_DIR";

/// Filter used when `GATEWATCH_LOG` is unset or does not parse
pub const DEFAULT_FILTER: &str =
    "gatewatch=info,gatewatch_core=info,gatewatch_app=info,gatewatch_tui=info,warn";

const LOG_FILE_PREFIX: &str = "gatewatch.log";

/// Start writing logs, returning the directory they land in
pub fn init() -> Result<PathBuf> {
    let log_dir = log_directory(
        std::env::var_os(LOG_DIR_ENV_VAR).map(PathBuf::from),
        dirs::data_local_dir(),
    );
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|e| {
        if std::env::var_os(LOG_ENV_VAR).is_some() {
            eprintln!("Ignoring {}: {}", LOG_ENV_VAR, e);
        }
        EnvFilter::new(DEFAULT_FILTER)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_file = %log_file_prefix(&log_dir).display(),
        "gatewatch starting"
    );

    Ok(log_dir)
}

/// Where log files go: the explicit override, else `<data dir>/gatewatch/logs`,
/// else `./gatewatch/logs` on systems without a data directory.
pub fn log_directory(override_dir: Option<PathBuf>, data_dir: Option<PathBuf>) -> PathBuf {
    match override_dir {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => data_dir
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gatewatch")
            .join("logs"),
    }
}

/// Today's file is this prefix plus a `.YYYY-MM-DD` suffix
pub fn log_file_prefix(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE_PREFIX)
}
