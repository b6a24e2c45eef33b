//! Queue entries and the remote snapshot format.
//!
//! A snapshot is newline-delimited text with one `username: id` record per
//! line, in queue order. The remote store treats it as an opaque blob; the
//! widget treats the whole blob as authoritative on load.

#[cfg(test)]
#[path = "entry_test.rs"]
mod entry_test;

use std::fmt;

/// A single queued `(username, id)` pair.
///
/// Both fields hold sanitized text; escaping happens only at render time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueueEntry {
    pub username: String,
    pub id: String,
}

impl QueueEntry {
    #[must_use]
    pub fn new(username: impl Into<String>, id: impl Into<String>) -> Self {
        Self { username: username.into(), id: id.into() }
    }
}

impl fmt::Display for QueueEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.username, self.id)
    }
}

/// Why a snapshot line was not turned into an entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryParseError {
    #[error("blank line")]
    Blank,
    #[error("expected `username: id`, found {0} colon-separated field(s)")]
    FieldCount(usize),
    #[error("username or id is empty")]
    EmptyField,
}

/// Parse one `username: id` record.
///
/// The line must split on `:` into exactly two fields, and both must be
/// non-empty after trimming. A username that itself contains `:` therefore
/// does not survive a snapshot round trip.
///
/// # Errors
///
/// Returns [`EntryParseError`] for blank lines, lines with the wrong number of
/// fields, or lines with an empty field.
pub fn parse_line(line: &str) -> Result<QueueEntry, EntryParseError> {
    if line.trim().is_empty() {
        return Err(EntryParseError::Blank);
    }
    let fields: Vec<&str> = line.split(':').map(str::trim).collect();
    let [username, id] = fields.as_slice() else {
        return Err(EntryParseError::FieldCount(fields.len()));
    };
    if username.is_empty() || id.is_empty() {
        return Err(EntryParseError::EmptyField);
    }
    Ok(QueueEntry::new(*username, *id))
}

/// Serialize entries, in order, to snapshot text.
pub fn serialize_snapshot<'a>(entries: impl IntoIterator<Item = &'a QueueEntry>) -> String {
    entries
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse snapshot text into entries, skipping lines that do not parse.
#[must_use]
pub fn parse_snapshot(text: &str) -> Vec<QueueEntry> {
    text.split('\n')
        .filter_map(|line| match parse_line(line) {
            Ok(entry) => Some(entry),
            Err(EntryParseError::Blank) => None,
            Err(err) => {
                log::debug!("skipping snapshot line {line:?}: {err}");
                None
            }
        })
        .collect()
}
