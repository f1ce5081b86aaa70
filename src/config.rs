//! Panel configuration.
//!
//! The API base URL can be baked in at build time through
//! `ACTIVITIES_API_BASE`; without it requests go to the page's own origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::state::status::STATUS_HIDE_DELAY;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelConfig {
    /// Prefix for every API path, without a trailing slash. Empty means same origin.
    pub api_base: String,
    pub status_hide_delay: Duration,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            api_base: normalize_base(option_env!("ACTIVITIES_API_BASE").unwrap_or_default()),
            status_hide_delay: STATUS_HIDE_DELAY,
        }
    }
}

impl PanelConfig {
    #[must_use]
    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = normalize_base(base);
        self
    }

    #[must_use]
    pub fn with_status_hide_delay(mut self, delay: Duration) -> Self {
        self.status_hide_delay = delay;
        self
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
