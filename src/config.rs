//! Injection-time configuration.
//!
//! The widget is configured entirely through query parameters on the URL it
//! was loaded from, e.g.
//! `https://cdn.example/queue.js?worker=https%3A%2F%2Fstore.example%2Fq`.
//! The URL is read once at injection; nothing is re-read afterwards.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use url::Url;

use crate::consts::{CONTAINER_PARAM, DEFAULT_CONTAINER_SELECTOR, LOG_PARAM, WORKER_PARAM};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Remote store endpoint. Empty when not configured.
    pub endpoint: String,
    /// Selector for the chat log container.
    pub container_selector: String,
    /// Console log level.
    pub log_level: log::Level,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            container_selector: DEFAULT_CONTAINER_SELECTOR.to_owned(),
            log_level: log::Level::Info,
        }
    }
}

impl WidgetConfig {
    /// Resolve configuration from the injecting script's URL.
    ///
    /// A missing or unparseable URL yields the defaults. Unknown parameters
    /// are ignored; an unrecognized `log` value keeps the default level.
    #[must_use]
    pub fn from_script_src(src: Option<&str>) -> Self {
        let mut config = Self::default();
        let Some(src) = src.filter(|s| !s.trim().is_empty()) else {
            return config;
        };
        let url = match Url::parse(src) {
            Ok(url) => url,
            Err(err) => {
                log::debug!("script url {src:?} not parsed: {err}");
                return config;
            }
        };
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                WORKER_PARAM if config.endpoint.is_empty() => config.endpoint = value.trim().to_owned(),
                CONTAINER_PARAM if !value.trim().is_empty() => config.container_selector = value.trim().to_owned(),
                LOG_PARAM => {
                    if let Ok(level) = log::Level::from_str(value.trim()) {
                        config.log_level = level;
                    }
                }
                _ => {}
            }
        }
        config
    }
}
