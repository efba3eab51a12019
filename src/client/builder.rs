use crate::client::core::ElevenLabsClient;
use crate::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::transport::HttpTransport;
use crate::{Error, Result};
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`ElevenLabsClient`].
///
/// Mirrors [`ClientConfig`]; nothing is read from the environment here.
#[derive(Default)]
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the API host, e.g. to point at a proxy or a mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<ElevenLabsClient> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| Error::configuration("API key required"))?;
        let config = ClientConfig {
            api_key,
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        };
        ElevenLabsClient::from_config(config)
    }
}

impl ElevenLabsClient {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(ElevenLabsClient { config, transport })
    }
}
