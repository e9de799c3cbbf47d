use std::env;

use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::search::SearchConfig;
use self::ui::UiConfig;

pub mod api;
pub mod search;
pub mod ui;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required setting: {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Build config from the process environment, loading `.env` first if present
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine, the variables may come from the shell
        let _ = dotenvy::dotenv();

        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            api: ApiConfig::from_lookup(&lookup)?,
            search: SearchConfig::from_lookup(&lookup)?,
            ui: UiConfig::default(),
        })
    }
}

/// Read and parse an optional numeric variable
pub(crate) fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(None),
    }
}
