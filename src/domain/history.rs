//! Password history log.

use std::collections::HashSet;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Format used when rendering capture times.
pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A password together with the time it was captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The recorded password.
    pub password: String,
    /// When the password was recorded.
    pub captured_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Capture time rendered in the host's local time zone.
    #[must_use]
    pub fn display_timestamp(&self) -> String {
        self.captured_at
            .with_timezone(&Local)
            .format(DISPLAY_TIMESTAMP_FORMAT)
            .to_string()
    }
}

/// Most-recent-first log of recorded passwords, unique by password.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record `password` at the front, dropping any earlier entry with the
    /// same value and anything beyond `capacity`.
    pub fn push(&mut self, password: &str, captured_at: DateTime<Utc>, capacity: usize) {
        self.entries.retain(|entry| entry.password != password);
        self.entries.insert(
            0,
            HistoryEntry {
                password: password.to_string(),
                captured_at,
            },
        );
        self.entries.truncate(capacity);
    }

    /// Drop entries beyond `capacity`.
    pub fn truncate(&mut self, capacity: usize) {
        self.entries.truncate(capacity);
    }

    /// Entries, newest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any password appears more than once.
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.entries.len());
        !self
            .entries
            .iter()
            .all(|entry| seen.insert(entry.password.as_str()))
    }

    /// Whether `password` is in the log.
    #[must_use]
    pub fn contains(&self, password: &str) -> bool {
        self.entries.iter().any(|entry| entry.password == password)
    }
}
