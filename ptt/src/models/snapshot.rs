// src/models/snapshot.rs
use anyhow::{Context as _, Result, anyhow};
use chrono::{Local, NaiveDateTime, Timelike as _};

/// Separator between the timestamp and sum fields in the history log.
pub const LOG_FIELD_SEPARATOR: char = ',';

const TIMESTAMP_WRITE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const TIMESTAMP_READ_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// One recorded `(timestamp, cumulative sum)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub sum: i64,
    pub timestamp: NaiveDateTime,
}

impl Snapshot {
    /// Captures the current local time for the given sum.
    ///
    /// The timestamp is held at microsecond precision so a written
    /// record reads back identically.
    #[must_use]
    pub fn now(sum: i64) -> Self {
        let timestamp = Local::now().naive_local();
        let timestamp = timestamp
            .with_nanosecond(timestamp.nanosecond() / 1000 * 1000)
            .unwrap_or(timestamp);
        Self { sum, timestamp }
    }

    /// Parses one history log line of the form `<timestamp>,<sum>`.
    /// Fields beyond the second are ignored.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The line has fewer than two fields
    /// * The timestamp is not ISO-8601
    /// * The sum is not an integer
    pub fn parse_line(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.trim().split(LOG_FIELD_SEPARATOR).collect();
        match fields.as_slice() {
            [timestamp, sum, ..] => {
                let timestamp = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_READ_FORMAT)
                    .with_context(|| format!("Invalid timestamp '{timestamp}'"))?;
                let sum = sum
                    .trim()
                    .parse::<i64>()
                    .with_context(|| format!("Invalid sum '{sum}'"))?;
                Ok(Self { sum, timestamp })
            }
            _ => Err(anyhow!("Expected '<timestamp>,<sum>', got: {line}")),
        }
    }

    /// Serializes the snapshot as one history log line, without the
    /// trailing newline.
    #[must_use]
    pub fn to_line(&self) -> String {
        format!(
            "{}{LOG_FIELD_SEPARATOR}{}",
            self.timestamp.format(TIMESTAMP_WRITE_FORMAT),
            self.sum
        )
    }
}
