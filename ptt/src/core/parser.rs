// src/core/parser.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

use crate::models::{LineOutcome, StatusTotals};

/// Column separator in the status file.
pub const FIELD_SEPARATOR: char = '\t';

/// Status value marking a completed item.
pub const STATUS_DONE: &str = "done";

/// Status value marking an item skipped for exceeding the page limit.
pub const STATUS_SKIPPED_TOO_MANY_PAGES: &str = "skipped_too_many_pages";

/// Reads a status file and totals completed pages per completion state.
///
/// # Arguments
///
/// * `path` - The status file to read
///
/// # Returns
///
/// * `Ok(StatusTotals)` - Counts per completion state plus the page sum
///
/// # Errors
///
/// This function may return an error if:
/// * The status file does not exist
/// * The file cannot be read as UTF-8 text
pub fn scan_status_file(path: &Path) -> Result<StatusTotals> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read status file: {}", path.display()))?;
    Ok(scan_status_lines(&content))
}

/// Folds every line of the status file content into a single
/// `StatusTotals`, warning on stderr for each unparsable numeric field.
#[must_use]
pub fn scan_status_lines(content: &str) -> StatusTotals {
    content
        .lines()
        .map(classify_line)
        .fold(StatusTotals::new(), |totals, outcome| {
            if let LineOutcome::Malformed(warning) = &outcome {
                eprintln!("Warning: {warning}");
            }
            totals.absorb(&outcome)
        })
}

/// Classifies one line of the status file.
///
/// Three shapes are accepted: `name<TAB>pages<TAB>status`, the legacy
/// `name<TAB>pages`, and the oldest format of a bare page count. The
/// status comparison is case-insensitive; any status other than the
/// recognized two counts as "not yet done".
#[must_use]
pub fn classify_line(line: &str) -> LineOutcome {
    let line = line.trim();
    if line.is_empty() {
        return LineOutcome::Blank;
    }

    if line.contains(FIELD_SEPARATOR) {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        match fields.as_slice() {
            [_, pages, status, ..] => match status.to_lowercase().as_str() {
                STATUS_DONE => parse_page_count(pages, line),
                STATUS_SKIPPED_TOO_MANY_PAGES => LineOutcome::SkippedTooManyPages,
                _ => LineOutcome::Incomplete,
            },
            [_, pages] => parse_page_count(pages, line),
            _ => LineOutcome::Malformed(format!("could not parse line: {line}")),
        }
    } else {
        line.parse::<i64>().map_or_else(
            |_| LineOutcome::Malformed(format!("could not parse number '{line}'")),
            LineOutcome::Counted,
        )
    }
}

fn parse_page_count(pages: &str, line: &str) -> LineOutcome {
    pages.parse::<i64>().map_or_else(
        |_| {
            LineOutcome::Malformed(format!(
                "could not parse page count '{pages}' in line: {line}"
            ))
        },
        LineOutcome::Counted,
    )
}
