//! Widget lifecycle core.
//!
//! [`WidgetCore`] turns host events (a chat mutation, a loaded snapshot, a row
//! button click, pointer input, the close button) into [`Action`]s for the
//! browser host to carry out. It owns the session and knows nothing about the
//! DOM, so the full event flow can be tested without a browser. The browser
//! host lives in `host` behind the `browser` feature.
//!
//! Once destroyed the core ignores every event and returns no actions, so late
//! callbacks (an in-flight pull, a queued mutation record) are harmless.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use crate::chat::ChatMessage;
use crate::gesture::{PanelRect, PanelUpdate, Point};
use crate::panel::RowAction;
use crate::queue::RowKey;
use crate::session::{QueueSession, RowEffect};

/// Work for the host to perform after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Re-render the list from the session queue.
    Render,
    /// Scroll the list to its last row.
    ScrollToBottom,
    /// Push this snapshot to the remote store, fire-and-forget.
    Push(String),
    /// Write this id to the clipboard, ignoring failure.
    Copy(String),
    /// Apply a gesture update to the panel.
    MovePanel(PanelUpdate),
}

pub struct WidgetCore {
    session: QueueSession,
    destroyed: bool,
}

impl WidgetCore {
    #[must_use]
    pub fn new(session: QueueSession) -> Self {
        Self { session, destroyed: false }
    }

    #[must_use]
    pub fn session(&self) -> &QueueSession {
        &self.session
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn queue_changed(&self, scroll: bool) -> Vec<Action> {
        let mut actions = vec![Action::Render];
        if scroll {
            actions.push(Action::ScrollToBottom);
        }
        actions.push(Action::Push(self.session.snapshot()));
        actions
    }

    // --- Data inputs ---

    /// The chat container changed; `latest` is its bottom-most message, if any.
    pub fn on_chat_mutation(&mut self, latest: Option<&ChatMessage>, now_ms: f64) -> Vec<Action> {
        if self.destroyed {
            return Vec::new();
        }
        let Some(message) = latest else {
            return Vec::new();
        };
        match self.session.accept(message, now_ms) {
            Ok(key) => {
                if let Some(entry) = self.session.queue().get(key) {
                    log::info!("queued {entry}");
                }
                self.queue_changed(true)
            }
            Err(skip) => {
                log::debug!("skipped message: {skip}");
                Vec::new()
            }
        }
    }

    /// The startup pull returned `snapshot`.
    pub fn on_snapshot_loaded(&mut self, snapshot: &str) -> Vec<Action> {
        if self.destroyed {
            return Vec::new();
        }
        let restored = self.session.rehydrate(snapshot).len();
        if restored == 0 {
            return Vec::new();
        }
        log::info!("restored {restored} queued entr{}", if restored == 1 { "y" } else { "ies" });
        self.queue_changed(true)
    }

    // --- Panel controls ---

    /// A row control was clicked.
    pub fn on_row_action(&mut self, action: RowAction, key: RowKey) -> Vec<Action> {
        if self.destroyed {
            return Vec::new();
        }
        match self.session.apply_row_action(action, key) {
            RowEffect::Nothing => Vec::new(),
            RowEffect::Sync => self.queue_changed(false),
            RowEffect::Copy(id) => vec![Action::Copy(id)],
        }
    }

    /// Pointer pressed on the title bar. Returns whether a drag started.
    pub fn on_title_pointer_down(&mut self, pointer: Point, panel: PanelRect) -> bool {
        !self.destroyed && self.session.gesture.begin_drag(pointer, panel)
    }

    /// Pointer pressed on the resize handle. Returns whether a resize started.
    pub fn on_resize_pointer_down(&mut self, pointer: Point, panel: PanelRect) -> bool {
        if self.destroyed {
            return false;
        }
        self.session.gesture.begin_resize(pointer, panel);
        true
    }

    /// Pointer moved anywhere in the document.
    #[must_use]
    pub fn on_pointer_move(&self, pointer: Point) -> Vec<Action> {
        if self.destroyed {
            return Vec::new();
        }
        self.session
            .gesture
            .on_move(pointer)
            .map(Action::MovePanel)
            .into_iter()
            .collect()
    }

    /// Pointer released anywhere in the document.
    pub fn on_pointer_up(&mut self) {
        self.session.gesture.end();
    }

    // --- Lifecycle ---

    /// Mark the widget destroyed. Returns `true` only the first time, so the
    /// host tears down exactly once.
    pub fn destroy(&mut self) -> bool {
        if self.destroyed {
            return false;
        }
        self.destroyed = true;
        self.session.gesture.end();
        true
    }
}
