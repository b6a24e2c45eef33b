//! Display text cleanup.
//!
//! `Sanitizer::sanitize` produces the canonical form of a username or id: the
//! string that is deduplicated, serialized to the remote store and copied to
//! the clipboard. `escape_for_display` is only ever applied when building
//! markup and never feeds back into stored values.

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod sanitize_test;

use regex::Regex;

/// Strips emoji and other extended pictographic characters.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    pictographic: Regex,
}

impl Sanitizer {
    /// Compile the pictograph pattern.
    ///
    /// # Errors
    ///
    /// Returns the regex error if the Unicode property tables are unavailable.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self { pictographic: Regex::new(r"\p{Extended_Pictographic}")? })
    }

    /// Remove every `Extended_Pictographic` character from `text`.
    ///
    /// Idempotent: sanitizing an already sanitized string returns it unchanged.
    #[must_use]
    pub fn sanitize(&self, text: &str) -> String {
        self.pictographic.replace_all(text, "").into_owned()
    }
}

/// HTML-escape `& < > " '` for insertion into markup.
#[must_use]
pub fn escape_for_display(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
