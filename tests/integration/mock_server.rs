//! Mock HTTP server setup for integration tests

use elevenlabs_client::ElevenLabsClient;
use mockito::{Mock, Server, ServerGuard};

pub const TEST_API_KEY: &str = "sk_test_0123456789";

/// Test fixture that owns a mock server and builds clients pointed at it
pub struct MockServerFixture {
    pub server: ServerGuard,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        Self {
            server: Server::new_async().await,
        }
    }

    pub fn base_url(&self) -> String {
        self.server.url()
    }

    /// Client with the mock server as base URL
    pub fn client(&self) -> ElevenLabsClient {
        ElevenLabsClient::builder()
            .api_key(TEST_API_KEY)
            .base_url(self.base_url())
            .build()
            .expect("client should build")
    }

    /// JSON response; requests must carry the API key header
    pub async fn mock_json(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .match_header("xi-api-key", TEST_API_KEY)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Plain-text response, e.g. an error page from a proxy
    pub async fn mock_text(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "text/plain")
            .with_body(body)
            .create_async()
            .await
    }

    /// Binary audio response
    pub async fn mock_audio(&mut self, method: &str, path: &str, audio: &[u8]) -> Mock {
        self.server
            .mock(method, path)
            .match_header("xi-api-key", TEST_API_KEY)
            .with_status(200)
            .with_header("content-type", "audio/mpeg")
            .with_body(audio)
            .create_async()
            .await
    }
}
