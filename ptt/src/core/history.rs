// src/core/history.rs
use anyhow::{Context as _, Result};
use std::fs::{self, OpenOptions};
use std::io::{self, Write as _};
use std::path::Path;

use crate::models::Snapshot;

/// Recovers the most recent snapshot from the history log.
///
/// A missing log is the normal first-run case and only produces an
/// informational message. Any other read problem, or a malformed final
/// line, degrades to "no previous snapshot" with a warning; history
/// problems never abort the run.
#[must_use]
pub fn read_last_snapshot(path: &Path) -> Option<Snapshot> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            println!("First run, starting a new history log");
            return None;
        }
        Err(err) => {
            eprintln!(
                "Warning: could not read history log {}: {err}",
                path.display()
            );
            return None;
        }
    };

    let last_line = content.lines().rev().find(|line| !line.trim().is_empty())?;

    match Snapshot::parse_line(last_line) {
        Ok(snapshot) => Some(snapshot),
        Err(err) => {
            eprintln!("Warning: ignoring malformed history line: {err:#}");
            None
        }
    }
}

/// Appends one snapshot line to the history log, creating the log's
/// parent directory if it does not exist yet.
///
/// # Errors
///
/// This function may return an error if:
/// * The parent directory cannot be created
/// * The log cannot be opened for appending or written
pub fn append_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create log directory: {}", parent.display())
            })?;
        }
    }

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("Failed to open history log: {}", path.display()))?;
    writeln!(file, "{}", snapshot.to_line())
        .with_context(|| format!("Failed to append to history log: {}", path.display()))?;

    Ok(())
}
