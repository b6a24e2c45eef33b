//! Reading chat messages from the host page.
//!
//! The host owns the chat log. Each message is a `div` inside the container,
//! newest last, with an optional `span.name` sender and a required
//! `span.message` body. Only the bottom-most message is read per mutation
//! callback, so messages appended in the same batch as a later one are never
//! seen.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::consts::UNKNOWN_USERNAME;

/// The text content of one chat message, as read from the DOM.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatMessage {
    /// Trimmed sender name, if the message had a sender element.
    pub username: Option<String>,
    /// Trimmed message body, if the message had a body element.
    pub text: Option<String>,
}

impl ChatMessage {
    #[must_use]
    pub fn new(username: Option<&str>, text: Option<&str>) -> Self {
        Self {
            username: username.map(|s| s.trim().to_owned()),
            text: text.map(|s| s.trim().to_owned()),
        }
    }

    /// Sender name, or `"Unknown"` when the message had none.
    #[must_use]
    pub fn resolved_username(&self) -> &str {
        self.username.as_deref().unwrap_or(UNKNOWN_USERNAME)
    }
}

/// Read the bottom-most message in `container`.
///
/// Returns `None` when the container holds no message elements.
#[cfg(feature = "browser")]
pub fn latest_message(container: &web_sys::Element) -> Option<ChatMessage> {
    use wasm_bindgen::JsCast;

    use crate::consts::{MESSAGE_SELECTOR, NAME_SELECTOR, TEXT_SELECTOR};

    let messages = container.query_selector_all(MESSAGE_SELECTOR).ok()?;
    let last = messages.length().checked_sub(1)?;
    let message = messages.item(last)?.dyn_into::<web_sys::Element>().ok()?;
    let text_of = |selector: &str| {
        message
            .query_selector(selector)
            .ok()
            .flatten()
            .map(|el| el.text_content().unwrap_or_default())
    };
    let username = text_of(NAME_SELECTOR);
    let text = text_of(TEXT_SELECTOR);
    Some(ChatMessage::new(username.as_deref(), text.as_deref()))
}
