//! Per-widget session state and the message acceptance pipeline.
//!
//! DESIGN
//! ======
//! Everything the widget remembers between events lives here: the queue, the
//! set of ids currently queued, per-user cooldowns and the active pointer
//! gesture. One session is created per injection and dropped on destroy, so
//! two widgets on one page never share state.
//!
//! [`QueueSession::evaluate`] is the observer callback's decision as a pure
//! function of the newest message, the session and the current time. It does
//! not mutate anything; [`QueueSession::accept`] applies an accepted result.
//!
//! TRADE-OFFS
//! ==========
//! Cooldowns are keyed by the sender name as read from the page (trimmed, not
//! sanitized) and are not primed by rehydration: a user whose entry was just
//! restored from the remote snapshot can be accepted again immediately.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashSet;

use crate::chat::ChatMessage;
use crate::command::{CommandError, CommandMatcher};
use crate::consts::COMMAND_PREFIXES;
use crate::cooldown::Cooldowns;
use crate::entry::{QueueEntry, parse_snapshot};
use crate::gesture::Gesture;
use crate::panel::RowAction;
use crate::queue::{Queue, RowKey};
use crate::sanitize::Sanitizer;

/// Why the newest message did not produce an entry. None of these are
/// failures; they are logged at debug level and dropped.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Skip {
    #[error("message has no text element")]
    MissingMessageText,
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("id {id} is already queued")]
    DuplicateId { id: String },
    #[error("{username} is cooling down for another {remaining_ms}ms")]
    Cooldown { username: String, remaining_ms: f64 },
}

/// What a row control asks the host to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowEffect {
    /// Nothing changed.
    Nothing,
    /// The queue changed (or was re-asserted); re-render and push a snapshot.
    Sync,
    /// Copy this raw id to the clipboard.
    Copy(String),
}

#[derive(Debug, Clone)]
pub struct QueueSession {
    sanitizer: Sanitizer,
    matcher: CommandMatcher,
    seen: HashSet<String>,
    cooldowns: Cooldowns,
    queue: Queue,
    pub gesture: Gesture,
}

impl QueueSession {
    /// A session using the default prefixes and cooldown.
    ///
    /// # Errors
    ///
    /// Returns the regex error if a built-in pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        Self::with_parts(CommandMatcher::new(COMMAND_PREFIXES)?, Cooldowns::default())
    }

    /// A session with an explicit matcher and cooldown window.
    ///
    /// # Errors
    ///
    /// Returns the regex error if the sanitizer pattern fails to compile.
    pub fn with_parts(matcher: CommandMatcher, cooldowns: Cooldowns) -> Result<Self, regex::Error> {
        Ok(Self {
            sanitizer: Sanitizer::new()?,
            matcher,
            seen: HashSet::new(),
            cooldowns,
            queue: Queue::new(),
            gesture: Gesture::Idle,
        })
    }

    // --- Observer path ---

    /// Decide whether `message`, observed at `now_ms`, becomes an entry.
    ///
    /// The returned entry holds the sender name and id as read; they are
    /// sanitized by [`Self::add_item`].
    ///
    /// # Errors
    ///
    /// Returns the [`Skip`] reason when the message is not accepted.
    pub fn evaluate(&self, message: &ChatMessage, now_ms: f64) -> Result<QueueEntry, Skip> {
        let text = message.text.as_deref().ok_or(Skip::MissingMessageText)?;
        let command = self.matcher.extract(text)?;
        if self.seen.contains(&command.id) {
            return Err(Skip::DuplicateId { id: command.id });
        }
        let username = message.resolved_username();
        if let Some(remaining_ms) = self.cooldowns.remaining(username, now_ms) {
            return Err(Skip::Cooldown { username: username.to_owned(), remaining_ms });
        }
        Ok(QueueEntry::new(username, command.id))
    }

    /// Evaluate `message` and, if accepted, start the sender's cooldown and
    /// queue the entry.
    ///
    /// # Errors
    ///
    /// Returns the [`Skip`] reason when the message is not accepted; the
    /// session is unchanged in that case.
    pub fn accept(&mut self, message: &ChatMessage, now_ms: f64) -> Result<RowKey, Skip> {
        let entry = self.evaluate(message, now_ms)?;
        self.cooldowns.record(&entry.username, now_ms);
        Ok(self.add_item(&entry.username, &entry.id))
    }

    // --- Queue mutations ---

    /// Sanitize and append an entry, marking its id as seen.
    pub fn add_item(&mut self, username: &str, id: &str) -> RowKey {
        // Trimmed after stripping so a trailing pictograph leaves no edge space.
        let entry = QueueEntry::new(
            self.sanitizer.sanitize(username).trim(),
            self.sanitizer.sanitize(id).trim(),
        );
        self.seen.insert(entry.id.clone());
        self.queue.push(entry)
    }

    /// Replay a remote snapshot through [`Self::add_item`], in order.
    ///
    /// Malformed lines are skipped. Cooldowns are left untouched.
    pub fn rehydrate(&mut self, snapshot: &str) -> Vec<RowKey> {
        parse_snapshot(snapshot)
            .into_iter()
            .map(|entry| self.add_item(&entry.username, &entry.id))
            .collect()
    }

    pub fn move_up(&mut self, key: RowKey) -> bool {
        self.queue.move_up(key)
    }

    pub fn move_down(&mut self, key: RowKey) -> bool {
        self.queue.move_down(key)
    }

    /// Remove a row and forget its id, so the same id can be queued again.
    pub fn delete(&mut self, key: RowKey) -> Option<QueueEntry> {
        let entry = self.queue.remove(key)?;
        self.seen.remove(&entry.id);
        Some(entry)
    }

    /// Apply a row control.
    ///
    /// Moves always ask for a sync, even at the list boundary where the order
    /// does not change. Deleting an unknown row does nothing.
    pub fn apply_row_action(&mut self, action: RowAction, key: RowKey) -> RowEffect {
        match action {
            RowAction::MoveUp => {
                self.move_up(key);
                RowEffect::Sync
            }
            RowAction::MoveDown => {
                self.move_down(key);
                RowEffect::Sync
            }
            RowAction::Copy => self
                .queue
                .get(key)
                .map_or(RowEffect::Nothing, |entry| RowEffect::Copy(entry.id.clone())),
            RowAction::Delete => self.delete(key).map_or(RowEffect::Nothing, |_| RowEffect::Sync),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// Whether `id` is currently queued.
    #[must_use]
    pub fn is_seen(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    #[must_use]
    pub fn cooldowns(&self) -> &Cooldowns {
        &self.cooldowns
    }

    /// The queue serialized for the remote store.
    #[must_use]
    pub fn snapshot(&self) -> String {
        self.queue.snapshot()
    }
}
