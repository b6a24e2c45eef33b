//! Chat command queue widget.
//!
//! This crate is compiled to WebAssembly and injected into a live chat page.
//! It watches the chat log for command messages such as `!id 12345`, queues
//! the `(username, id)` pairs in a floating panel, and mirrors the queue to a
//! plain-text remote store so it survives reloads.
//!
//! Everything that decides *what* happens (matching, dedupe, cooldowns,
//! ordering, snapshot format, pointer gestures, markup) is plain Rust and
//! tests natively. The `browser` feature adds the DOM, network and console
//! glue on top.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`widget`] | Lifecycle core: host events in, [`widget::Action`]s out |
//! | `host` | Browser mount, event wiring and the exported `QueueWidget` handle (`browser` feature) |
//! | [`session`] | Per-widget state: seen ids, cooldowns, queue, gesture |
//! | [`command`] | Prefix and numeric-token extraction from message text |
//! | [`cooldown`] | Per-user acceptance timestamps |
//! | [`queue`] | Ordered rows with reorder and removal |
//! | [`entry`] | `QueueEntry` and the newline-delimited snapshot format |
//! | [`sanitize`] | Pictograph stripping and HTML escaping |
//! | [`gesture`] | Drag/resize pointer state machine |
//! | [`panel`] | Panel styles, row markup and DOM construction |
//! | [`chat`] | Reading the newest chat message from the host page |
//! | [`sync`] | Remote snapshot push/pull |
//! | [`config`] | Injection-time configuration from the script URL |
//! | [`error`] | Crate error types |
//! | [`consts`] | Shared constants |

pub mod chat;
pub mod command;
pub mod config;
pub mod consts;
pub mod cooldown;
pub mod entry;
pub mod error;
pub mod gesture;
#[cfg(feature = "browser")]
pub mod host;
pub mod panel;
pub mod queue;
pub mod sanitize;
pub mod session;
pub mod sync;
pub mod widget;

/// Install the panic hook when the module loads. The console logger is set
/// up later by `host::inject`, once the configured level is known.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}
