// src/models/line_outcome.rs

/// Classification of a single status file line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Empty after trimming; ignored.
    Blank,
    /// A completed item contributing this many pages.
    Counted(i64),
    /// A recognized row whose status is anything other than done.
    Incomplete,
    /// A row with an unparsable numeric field; carries the warning text.
    Malformed(String),
    /// Explicitly skipped for exceeding the page limit.
    SkippedTooManyPages,
}
