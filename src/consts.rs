//! Shared constants for the queue widget.

// ── Commands ────────────────────────────────────────────────────

/// Recognized command prefixes, checked case-insensitively in this order.
///
/// Matching is a plain `starts_with`, so `!identify 7` is read as `!id`.
pub const COMMAND_PREFIXES: [&str; 8] = ["!id", "!rq", "!level", "!request", "/id", "/rq", "/level", "/request"];

/// Minimum time between two accepted entries from the same username.
pub const COOLDOWN_MS: f64 = 5000.0;

/// Username used when a chat message has no sender element.
pub const UNKNOWN_USERNAME: &str = "Unknown";

// ── Host page ───────────────────────────────────────────────────

/// Default selector for the chat log container.
pub const DEFAULT_CONTAINER_SELECTOR: &str = "#log.sl__chat__layout";

/// Selector for one chat message inside the container.
pub const MESSAGE_SELECTOR: &str = "div";

/// Selector for the sender name inside a message.
pub const NAME_SELECTOR: &str = "span.name";

/// Selector for the message text inside a message.
pub const TEXT_SELECTOR: &str = "span.message";

// ── Script parameters ───────────────────────────────────────────

/// Query parameter carrying the remote store endpoint.
pub const WORKER_PARAM: &str = "worker";

/// Query parameter overriding the chat container selector.
pub const CONTAINER_PARAM: &str = "container";

/// Query parameter selecting the console log level.
pub const LOG_PARAM: &str = "log";

// ── Panel ───────────────────────────────────────────────────────

/// Smallest width and height the resize handle may shrink the panel to.
pub const MIN_PANEL_SIZE_PX: f64 = 150.0;

/// Initial panel width.
pub const PANEL_WIDTH_PX: f64 = 250.0;

/// Initial panel height.
pub const PANEL_HEIGHT_PX: f64 = 300.0;

/// Initial distance from the top and right edges of the viewport.
pub const PANEL_INSET_PX: f64 = 20.0;

/// `id` of the queue list element; the injected stylesheet targets it.
pub const LIST_ID: &str = "queueList";

/// Class of the corner resize handle.
pub const RESIZE_HANDLE_CLASS: &str = "queue-box-resize-handle";
