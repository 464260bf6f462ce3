//! The evolution diary: an append-only, timestamp-prefixed event log.
//!
//! Entries are plain pre-formatted strings (`[YYYY-MM-DD HH:MM] message`) so
//! the diary round-trips through snapshots byte-for-byte. Backed by a
//! persistent vector; insertion order is preserved and nothing is ever
//! removed or rewritten.

use chrono::Local;
use im::Vector;
use serde::Serialize;

/// Timestamp format used for diary entries.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Append-only event log for a creature.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diary {
    entries: Vector<String>,
}

impl Diary {
    /// Create an empty diary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a diary from already-formatted entries, preserving order.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = String>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Append a message, prefixing it with the current local timestamp.
    ///
    /// Returns the formatted entry that was recorded.
    pub fn record(&mut self, message: &str) -> String {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let entry = format!("[{timestamp}] {message}");
        self.entries.push_back(entry.clone());
        entry
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the diary has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
