//! Client configuration baked in at build time.
//!
//! A WASM bundle has no process environment, so values come from
//! `option_env!` when the bundle is built:
//!
//! - `BANK_API_BASE_URL`: backend origin, default `http://localhost:8080`
//! - `BANK_LOG_LEVEL`: `error`, `warn` (default), `info`, `debug`, `trace`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use log::Level;
use thiserror::Error;

use crate::session::SessionKeys;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_LOG_LEVEL: Level = Level::Warn;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid log level `{0}`")]
    InvalidLogLevel(String),
    #[error("api base url must be an http(s) origin, got `{0}`")]
    InvalidApiBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub log_level: Level,
    pub session_keys: SessionKeys,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            log_level: DEFAULT_LOG_LEVEL,
            session_keys: SessionKeys::default(),
        }
    }
}

impl ClientConfig {
    /// Configuration captured from the build environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a baked-in value does not parse.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("BANK_API_BASE_URL"), option_env!("BANK_LOG_LEVEL"))
    }

    /// Build from raw values; `None` or blank falls back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unknown log level or a non-http base URL.
    pub fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: parse_api_base_url(api_base_url)?,
            log_level: parse_log_level(log_level)?,
            session_keys: SessionKeys::default(),
        })
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_api_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(url) = non_blank(raw) else {
        return Ok(DEFAULT_API_BASE_URL.to_owned());
    };
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidApiBaseUrl(url.to_owned()));
    }
    Ok(url.trim_end_matches('/').to_owned())
}

fn parse_log_level(raw: Option<&str>) -> Result<Level, ConfigError> {
    match non_blank(raw) {
        None => Ok(DEFAULT_LOG_LEVEL),
        Some(value) => value.parse::<Level>().map_err(|_| ConfigError::InvalidLogLevel(value.to_owned())),
    }
}
