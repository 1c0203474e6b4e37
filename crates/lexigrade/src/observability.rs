//! Logging and tracing setup.
//!
//! Human-readable diagnostics go to stderr; structured JSONL events go to a
//! daily-rotated file so runs can be inspected after the fact. File logging
//! is best-effort: if no writable location exists the CLI still runs with
//! stderr output only.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Where log output should land.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path; takes precedence over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for rotated JSONL logs.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables, with a config-file override for
    /// the log directory.
    ///
    /// `LEXIGRADE_LOG_PATH` names an exact file; `LEXIGRADE_LOG_DIR` (or the
    /// config override) names a directory for daily rotation. Without either
    /// the platform data directory is used.
    pub fn from_env_with_overrides(log_dir_override: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("LEXIGRADE_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("LEXIGRADE_LOG_DIR")
            .map(PathBuf::from)
            .or(log_dir_override)
            .or_else(default_log_dir);
        Self { log_path, log_dir }
    }
}

fn default_log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "lexigrade")
        .map(|dirs| dirs.data_local_dir().join("logs"))
}

/// Build the level filter from CLI flags and the configured level.
///
/// `RUST_LOG` wins when set; otherwise `--quiet` pins to `error`, each `-v`
/// steps the configured level up (info, debug, trace).
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// Returns the appender guard; dropping it flushes buffered file output, so
/// hold it for the life of the process.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let file_writer = match (&config.log_path, &config.log_dir) {
        (Some(path), _) => {
            let dir = path.parent().unwrap_or(std::path::Path::new("."));
            std::fs::create_dir_all(dir)?;
            let file_name = path
                .file_name()
                .map_or_else(|| "lexigrade.jsonl".into(), ToOwned::to_owned);
            Some(tracing_appender::rolling::never(dir, file_name))
        }
        (None, Some(dir)) => std::fs::create_dir_all(dir)
            .ok()
            .map(|()| tracing_appender::rolling::daily(dir, "lexigrade.jsonl")),
        (None, None) => None,
    };

    match file_writer {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = fmt::layer().json().with_writer(writer);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(file_layer)
                .try_init()?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .try_init()?;
            Ok(None)
        }
    }
}
