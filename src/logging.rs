//! File logging bootstrap.
//!
//! One log file per notebook directory, truncated at the start of each run.
//! Writes are unbuffered: the handle lives in a static and is never dropped.
//! Initialization is idempotent and never panics; callers decide what to do
//! when it fails.

use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};
use log::info;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static LOGGING_STATE: OnceLock<LoggingState> = OnceLock::new();

struct LoggingState {
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Start logging at `level` into `<log_dir>/<basename>.log`.
///
/// `off` disables logging entirely and is not an error. A second call is a
/// no-op.
pub fn init_logging(
    level: &str,
    log_dir: &Path,
    basename: &str,
) -> Result<(), String> {
    let level = normalize_level(level)?;
    if level == "off" {
        return Ok(());
    }
    if let Some(state) = LOGGING_STATE.get() {
        if state.log_dir != log_dir {
            return Err(format!(
                "logging already initialized at `{}`",
                state.log_dir.display()
            ));
        }
        return Ok(());
    }

    std::fs::create_dir_all(log_dir).map_err(|err| {
        format!("failed to create log directory `{}`: {err}", log_dir.display())
    })?;

    let logger = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(basename)
                .suppress_timestamp(),
        )
        .write_mode(WriteMode::Direct)
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    let _ = LOGGING_STATE.set(LoggingState {
        log_dir: log_dir.to_path_buf(),
        _logger: logger,
    });
    info!(
        "cup {} started, level={level} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        log_dir.display()
    );
    Ok(())
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) { "debug" } else { "info" }
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        "off" | "none" => Ok("off"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error|off"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_level_accepts_known_values() {
        assert_eq!(normalize_level("INFO").unwrap(), "info");
        assert_eq!(normalize_level(" warning ").unwrap(), "warn");
        assert_eq!(normalize_level("off").unwrap(), "off");
    }

    #[test]
    fn normalize_level_rejects_unknown_values() {
        let err = normalize_level("loud").unwrap_err();
        assert!(err.contains("unsupported"));
    }

    #[test]
    fn off_level_never_touches_the_filesystem() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("logs");
        init_logging("off", &dir, "cup").unwrap();
        assert!(!dir.exists());
    }
}
