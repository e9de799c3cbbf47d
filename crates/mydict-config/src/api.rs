use serde::{Deserialize, Serialize};

use crate::{ConfigError, parse_var};

pub const API_KEY_VAR: &str = "DICTIONARY_API_KEY";
pub const API_URL_VAR: &str = "DICTIONARY_API_URL";
const AUDIO_HOST_VAR: &str = "DICTIONARY_AUDIO_HOST";
const TIMEOUT_VAR: &str = "DICTIONARY_TIMEOUT_SECONDS";

fn default_audio_host() -> String {
    "https://media.merriam-webster.com/audio/prons/en/us/mp3".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

/// Remote dictionary API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub api_key: String,
    /// Base URL, the word is appended as a path segment
    pub api_url: String,
    /// Host prefix for pronunciation audio files
    #[serde(default = "default_audio_host")]
    pub audio_host: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            audio_host: default_audio_host(),
            timeout_seconds: default_timeout_seconds(),
        }
    }

    pub(crate) fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = required(lookup, API_KEY_VAR)?;
        let api_url = required(lookup, API_URL_VAR)?;

        let mut config = Self::new(api_key, api_url);
        if let Some(host) = lookup(AUDIO_HOST_VAR).filter(|h| !h.trim().is_empty()) {
            config.audio_host = host.trim().trim_end_matches('/').to_string();
        }
        if let Some(timeout) = parse_var(lookup, TIMEOUT_VAR)? {
            config.timeout_seconds = timeout;
        }

        Ok(config)
    }
}

fn required<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(var))
}
