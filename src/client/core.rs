use crate::agents::Agents;
use crate::config::ClientConfig;
use crate::history::History;
use crate::models::Models;
use crate::stt::SpeechToText;
use crate::transport::HttpTransport;
use crate::tts::TextToSpeech;
use crate::user::User;
use crate::voices::Voices;
use std::sync::Arc;

/// Entry point for the API.
///
/// Resource groups are reached through accessor methods that borrow the shared
/// transport, e.g. `client.voices().list()`. Every call issues exactly one request.
#[derive(Clone)]
pub struct ElevenLabsClient {
    pub(crate) config: ClientConfig,
    pub(crate) transport: Arc<HttpTransport>,
}

impl ElevenLabsClient {
    /// Build a client with default base URL and timeout.
    pub fn new(api_key: impl Into<String>) -> crate::Result<Self> {
        Self::from_config(ClientConfig::new(api_key))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Raw transport, for endpoints without a dedicated wrapper.
    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    pub fn text_to_speech(&self) -> TextToSpeech<'_> {
        TextToSpeech::new(&self.transport)
    }

    pub fn speech_to_text(&self) -> SpeechToText<'_> {
        SpeechToText::new(&self.transport)
    }

    pub fn voices(&self) -> Voices<'_> {
        Voices::new(&self.transport)
    }

    pub fn models(&self) -> Models<'_> {
        Models::new(&self.transport)
    }

    pub fn user(&self) -> User<'_> {
        User::new(&self.transport)
    }

    pub fn history(&self) -> History<'_> {
        History::new(&self.transport)
    }

    pub fn agents(&self) -> Agents<'_> {
        Agents::new(&self.transport)
    }
}

impl std::fmt::Debug for ElevenLabsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElevenLabsClient")
            .field("config", &self.config)
            .finish()
    }
}
