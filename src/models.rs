//! Available synthesis/transcription models.

use crate::transport::{HttpTransport, RequestSpec};
use crate::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub language_id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub model_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub can_do_text_to_speech: bool,
    #[serde(default)]
    pub can_do_voice_conversion: bool,
    #[serde(default)]
    pub can_use_style: bool,
    #[serde(default)]
    pub can_use_speaker_boost: bool,
    #[serde(default)]
    pub max_characters_request_free_user: Option<u32>,
    #[serde(default)]
    pub max_characters_request_subscribed_user: Option<u32>,
    #[serde(default)]
    pub languages: Vec<Language>,
}

impl Model {
    pub fn supports_language(&self, language_id: &str) -> bool {
        self.languages
            .iter()
            .any(|l| l.language_id.eq_ignore_ascii_case(language_id))
    }
}

/// `/v1/models`.
pub struct Models<'a> {
    transport: &'a HttpTransport,
}

impl<'a> Models<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    pub async fn list(&self) -> Result<Vec<Model>> {
        self.transport
            .execute_json(RequestSpec::get(&["v1", "models"]))
            .await
    }
}
