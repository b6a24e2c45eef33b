//! Per-user cooldown between accepted entries.
//!
//! DESIGN
//! ======
//! One timestamp per username, the time of its last *accepted* entry.
//! Rejected messages never touch the map, so spamming during a cooldown does
//! not extend it. Timestamps are caller-supplied milliseconds so the window
//! can be tested without a clock.

#[cfg(test)]
#[path = "cooldown_test.rs"]
mod cooldown_test;

use std::collections::HashMap;

use crate::consts::COOLDOWN_MS;

#[derive(Debug, Clone)]
pub struct Cooldowns {
    window_ms: f64,
    last_accepted: HashMap<String, f64>,
}

impl Default for Cooldowns {
    fn default() -> Self {
        Self::new(COOLDOWN_MS)
    }
}

impl Cooldowns {
    #[must_use]
    pub fn new(window_ms: f64) -> Self {
        Self { window_ms, last_accepted: HashMap::new() }
    }

    /// Milliseconds `username` must still wait at `now_ms`, or `None` if it
    /// may be accepted.
    #[must_use]
    pub fn remaining(&self, username: &str, now_ms: f64) -> Option<f64> {
        let last = *self.last_accepted.get(username)?;
        let elapsed = now_ms - last;
        (elapsed < self.window_ms).then(|| self.window_ms - elapsed)
    }

    /// Record an accepted entry for `username` at `now_ms`.
    pub fn record(&mut self, username: &str, now_ms: f64) {
        self.last_accepted.insert(username.to_owned(), now_ms);
    }

    /// Timestamp of the last accepted entry for `username`.
    #[must_use]
    pub fn last_accepted(&self, username: &str) -> Option<f64> {
        self.last_accepted.get(username).copied()
    }

    #[must_use]
    pub fn window_ms(&self) -> f64 {
        self.window_ms
    }
}
