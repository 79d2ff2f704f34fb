//! Logging init: file under XDG state dir, or graceful fallback to stderr.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// File log filter: `urlrisk` is the binary, `urlrisk_core` this library.
pub const FILE_FILTER: &str = "info,urlrisk=debug,urlrisk_core=debug";
pub const STDERR_FILTER: &str = "warn";

const LOG_FILE_NAME: &str = "urlrisk.log";

fn env_filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Opens (creating as needed) the append-only log file inside `log_dir`.
pub fn open_log_file(log_dir: &Path) -> Result<(File, PathBuf)> {
    fs::create_dir_all(log_dir).with_context(|| format!("create {}", log_dir.display()))?;
    let path = log_dir.join(LOG_FILE_NAME);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;
    Ok((file, path))
}

/// Initialize structured logging to `~/.local/state/urlrisk/urlrisk.log`.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlrisk")?;
    let (file, log_file_path) = open_log_file(&xdg_dirs.get_state_home().join("urlrisk"))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter_or(FILE_FILTER))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install tracing subscriber: {e}"))?;

    tracing::info!("urlrisk logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr only (no file). Use when init_logging() fails so the CLI doesn't crash.
pub fn init_logging_stderr() {
    // Ignore the error: a subscriber may already be installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter_or(STDERR_FILTER))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
