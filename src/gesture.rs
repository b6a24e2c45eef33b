//! Pointer gesture state machine for moving and resizing the panel.
//!
//! A gesture starts on pointer-down over the title bar (drag) or the corner
//! handle (resize), produces a [`PanelUpdate`] for every pointer move while
//! active, and ends on pointer-up anywhere in the document. At most one
//! gesture is active at a time: a drag cannot start during a resize, and a
//! resize replaces a drag.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::consts::MIN_PANEL_SIZE_PX;

/// A client-space pointer position in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Panel geometry at the moment a gesture starts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Style change to apply to the panel for one pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelUpdate {
    /// Position the panel absolutely; the initial `right` anchor is dropped.
    Move { left: f64, top: f64 },
    /// Resize the panel, already clamped to the minimum size.
    Resize { width: f64, height: f64 },
}

impl PanelUpdate {
    /// CSS property/value pairs implementing this update.
    #[must_use]
    pub fn style_properties(&self) -> Vec<(&'static str, String)> {
        match *self {
            Self::Move { left, top } => vec![
                ("left", px(left)),
                ("top", px(top)),
                ("right", "auto".to_owned()),
            ],
            Self::Resize { width, height } => vec![("width", px(width)), ("height", px(height))],
        }
    }
}

/// Format a length in CSS pixels.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// The active pointer gesture, if any.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// No button held over the panel chrome.
    #[default]
    Idle,
    /// Title bar drag in progress.
    Dragging {
        /// Pointer position minus panel origin at drag start.
        offset_x: f64,
        offset_y: f64,
    },
    /// Corner handle resize in progress.
    Resizing {
        /// Pointer position at resize start.
        start: Point,
        start_width: f64,
        start_height: f64,
    },
}

impl Gesture {
    /// Start dragging. Ignored while a resize is active; returns whether the
    /// drag started.
    pub fn begin_drag(&mut self, pointer: Point, panel: PanelRect) -> bool {
        if matches!(self, Self::Resizing { .. }) {
            return false;
        }
        *self = Self::Dragging { offset_x: pointer.x - panel.left, offset_y: pointer.y - panel.top };
        true
    }

    /// Start resizing, cancelling any drag.
    pub fn begin_resize(&mut self, pointer: Point, panel: PanelRect) {
        *self = Self::Resizing { start: pointer, start_width: panel.width, start_height: panel.height };
    }

    /// Panel update for a pointer move, or `None` when idle.
    #[must_use]
    pub fn on_move(&self, pointer: Point) -> Option<PanelUpdate> {
        match *self {
            Self::Idle => None,
            Self::Dragging { offset_x, offset_y } => Some(PanelUpdate::Move {
                left: pointer.x - offset_x,
                top: pointer.y - offset_y,
            }),
            Self::Resizing { start, start_width, start_height } => Some(PanelUpdate::Resize {
                width: (start_width + (pointer.x - start.x)).max(MIN_PANEL_SIZE_PX),
                height: (start_height + (pointer.y - start.y)).max(MIN_PANEL_SIZE_PX),
            }),
        }
    }

    /// End whatever gesture is active.
    pub fn end(&mut self) {
        *self = Self::Idle;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
