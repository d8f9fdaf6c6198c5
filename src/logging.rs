//! File logging
//!
//! The terminal is owned by the UI, so log lines go to
//! `~/.rickmorty-tui/rickmorty-tui.log`. Verbosity follows `RUST_LOG`
//! and defaults to `info`.

use anyhow::Result;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "rickmorty-tui.log";

const DEFAULT_DIRECTIVE: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Open (append) the log file inside `dir`, creating the directory
pub fn open_log_file(dir: &Path) -> Result<(File, PathBuf)> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

/// Install the global subscriber. Without a log directory nothing is
/// installed and tracing events are discarded.
pub fn init(dir: Option<&Path>) -> Result<Option<PathBuf>> {
    let Some(dir) = dir else {
        return Ok(None);
    };
    let (file, path) = open_log_file(dir)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_log_file_creates_directory_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        let (mut file, path) = open_log_file(&log_dir).unwrap();
        writeln!(file, "first").unwrap();
        drop(file);

        let (mut file, _) = open_log_file(&log_dir).unwrap();
        writeln!(file, "second").unwrap();
        drop(file);

        assert_eq!(path, log_dir.join(LOG_FILE_NAME));
        assert_eq!(fs::read_to_string(path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_init_without_directory_is_a_no_op() {
        assert!(init(None).unwrap().is_none());
    }
}
