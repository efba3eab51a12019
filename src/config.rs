//! Client configuration.
//!
//! The transport only ever sees an explicit [`ClientConfig`]. Reading the process
//! environment is opt-in through [`ClientConfig::from_env`], called by whoever
//! constructs the client.

use crate::{Error, Result};
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

pub const API_KEY_ENV: &str = "ELEVENLABS_API_KEY";
pub const BASE_URL_ENV: &str = "ELEVENLABS_BASE_URL";
pub const TIMEOUT_ENV: &str = "ELEVENLABS_TIMEOUT_SECS";

/// API key, base URL and request timeout for one client instance.
#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

// The API key stays out of debug output.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads `ELEVENLABS_API_KEY` (required), `ELEVENLABS_BASE_URL` and
    /// `ELEVENLABS_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_ENV)
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| Error::configuration(format!("{} is not set", API_KEY_ENV)))?;
        let mut cfg = Self::new(api_key);
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|s| !s.trim().is_empty()) {
            cfg.base_url = base_url;
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                Error::configuration(format!("{} must be a whole number of seconds, got '{}'", TIMEOUT_ENV, raw))
            })?;
            cfg.timeout = Duration::from_secs(secs);
        }
        Ok(cfg)
    }

    /// Checks the key is present and the base URL parses.
    pub fn validate(&self) -> Result<Url> {
        if self.api_key.trim().is_empty() {
            return Err(Error::configuration("API key required"));
        }
        if self.timeout.is_zero() {
            return Err(Error::configuration("Timeout must be greater than zero"));
        }
        let url = Url::parse(&self.base_url)
            .map_err(|e| Error::configuration(format!("Invalid base URL '{}': {}", self.base_url, e)))?;
        if url.cannot_be_a_base() {
            return Err(Error::configuration(format!("Invalid base URL '{}'", self.base_url)));
        }
        Ok(url)
    }
}
