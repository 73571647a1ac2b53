//! Logging init: file under the XDG state dir, or graceful fallback to stderr.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,ebs=debug"))
}

/// Initialize structured logging to `~/.local/state/ebs/ebs.log`.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ebs")?;
    let log_path: PathBuf = xdg_dirs.place_state_file("ebs.log")?;

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("ebs logging initialized at {}", log_path.display());

    Ok(())
}

/// Initialize logging to stderr only (no file). Use when init_logging() fails so the CLI doesn't crash.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
