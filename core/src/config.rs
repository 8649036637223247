//! Client configuration.
//!
//! The store address is always handed to `TodoActions::new` explicitly.
//! `from_env` exists for hosts that want the conventional variables:
//!
//! - `TODO_API_URL`: base URL of the store (default `http://localhost:3000`)
//! - `TODO_LOCALE`: `en` or `ja` (default `en`)

use tracing::warn;

use crate::messages::Locale;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub locale: Locale,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            locale: Locale::default(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Blank values count as
    /// unset; an unrecognised locale falls back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("TODO_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let locale = match lookup("TODO_LOCALE").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!(error = %e, "falling back to default locale");
                Locale::default()
            }),
            None => Locale::default(),
        };

        Self { base_url, locale }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
