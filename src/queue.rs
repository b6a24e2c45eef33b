//! Ordered queue rows.
//!
//! Each row gets a [`RowKey`] at insertion that never changes and is never
//! reused, so panel controls can address a row regardless of where it has
//! been moved. Ids are not used as keys: a rehydrated snapshot may contain
//! the same id twice.

#[cfg(test)]
#[path = "queue_test.rs"]
mod queue_test;

use std::fmt;

use crate::entry::{QueueEntry, serialize_snapshot};

/// Stable handle for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(pub u64);

impl RowKey {
    /// Parse a key from its `data-key` attribute form.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse().ok().map(Self)
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: RowKey,
    pub entry: QueueEntry,
}

#[derive(Debug, Clone, Default)]
pub struct Queue {
    rows: Vec<Row>,
    next_key: u64,
}

impl Queue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the bottom of the queue.
    pub fn push(&mut self, entry: QueueEntry) -> RowKey {
        let key = RowKey(self.next_key);
        self.next_key += 1;
        self.rows.push(Row { key, entry });
        key
    }

    /// Current index of the row with `key`.
    #[must_use]
    pub fn position(&self, key: RowKey) -> Option<usize> {
        self.rows.iter().position(|row| row.key == key)
    }

    #[must_use]
    pub fn get(&self, key: RowKey) -> Option<&QueueEntry> {
        self.rows.iter().find(|row| row.key == key).map(|row| &row.entry)
    }

    /// Swap the row with its upper neighbor. Returns `false` if the row is
    /// already first or does not exist.
    pub fn move_up(&mut self, key: RowKey) -> bool {
        match self.position(key) {
            Some(idx) if idx > 0 => {
                self.rows.swap(idx - 1, idx);
                true
            }
            _ => false,
        }
    }

    /// Swap the row with its lower neighbor. Returns `false` if the row is
    /// already last or does not exist.
    pub fn move_down(&mut self, key: RowKey) -> bool {
        match self.position(key) {
            Some(idx) if idx + 1 < self.rows.len() => {
                self.rows.swap(idx, idx + 1);
                true
            }
            _ => false,
        }
    }

    /// Remove the row with `key`, returning its entry.
    pub fn remove(&mut self, key: RowKey) -> Option<QueueEntry> {
        let idx = self.position(key)?;
        Some(self.rows.remove(idx).entry)
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    pub fn entries(&self) -> impl Iterator<Item = &QueueEntry> {
        self.rows.iter().map(|row| &row.entry)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Serialize the queue, in display order, to snapshot text.
    #[must_use]
    pub fn snapshot(&self) -> String {
        serialize_snapshot(self.entries())
    }
}
