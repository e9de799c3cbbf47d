use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, parse_var};

fn default_debounce_ms() -> u64 {
    500
}

fn default_max_results() -> usize {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a lookup starts
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// How many API records become cards
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            max_results: default_max_results(),
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub(crate) fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(ms) = parse_var(lookup, "SEARCH_DEBOUNCE_MS")? {
            config.debounce_ms = ms;
        }
        if let Some(max) = parse_var(lookup, "SEARCH_MAX_RESULTS")? {
            config.max_results = max;
        }
        Ok(config)
    }
}
