//! Command extraction from chat message text.
//!
//! A message is a command when it starts with one of the configured prefixes
//! (ASCII case-insensitive). The id is the first standalone run of digits in
//! the text after the prefix, so `!id please 12345 thanks` yields `12345`
//! while `!id abc123` yields nothing. Word boundaries are ASCII-only, so a
//! non-ASCII letter touching the digits (`!id номер12345`) still separates them.

#[cfg(test)]
#[path = "command_test.rs"]
mod command_test;

use regex::Regex;

/// Why message text did not produce a command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("no recognized command prefix")]
    NoPrefix,
    #[error("no numeric id after prefix `{prefix}`")]
    NoNumericToken { prefix: String },
}

/// A recognized command and the id it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMatch {
    /// The configured prefix that matched, as configured.
    pub prefix: String,
    /// The first standalone numeric token after the prefix.
    pub id: String,
}

/// Matches message text against an ordered list of prefixes.
#[derive(Debug, Clone)]
pub struct CommandMatcher {
    prefixes: Vec<String>,
    numeric_token: Regex,
}

impl CommandMatcher {
    /// Build a matcher that tries `prefixes` in order.
    ///
    /// # Errors
    ///
    /// Returns the regex error if the numeric token pattern fails to compile.
    pub fn new<I, S>(prefixes: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
            numeric_token: Regex::new(r"(?-u:\b)[0-9]+(?-u:\b)")?,
        })
    }

    /// The prefixes in match order.
    #[must_use]
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// First configured prefix that `text` starts with, ignoring ASCII case.
    #[must_use]
    pub fn find_prefix(&self, text: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .find(|prefix| {
                text.get(..prefix.len())
                    .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
            })
            .map(String::as_str)
    }

    /// Extract the command id from message text.
    ///
    /// `text` is trimmed before matching.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::NoPrefix`] when no prefix matches and
    /// [`CommandError::NoNumericToken`] when the remainder holds no standalone
    /// number.
    pub fn extract(&self, text: &str) -> Result<CommandMatch, CommandError> {
        let text = text.trim();
        let prefix = self.find_prefix(text).ok_or(CommandError::NoPrefix)?;
        let remainder = text[prefix.len()..].trim();
        let Some(token) = self.numeric_token.find(remainder) else {
            return Err(CommandError::NoNumericToken { prefix: prefix.to_owned() });
        };
        Ok(CommandMatch { prefix: prefix.to_owned(), id: token.as_str().to_owned() })
    }
}
