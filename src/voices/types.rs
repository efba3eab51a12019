use crate::client::validation::require_non_empty;
use crate::transport::{FilePart, MultipartForm};
use crate::tts::VoiceSettings;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    pub voice_id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// `premade`, `cloned`, `generated` or `professional`.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub settings: Option<VoiceSettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VoicesResponse {
    pub voices: Vec<Voice>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddVoiceResponse {
    pub voice_id: String,
    #[serde(default)]
    pub requires_verification: bool,
}

/// Instant voice clone from one or more samples, or an edit of an existing voice.
///
/// `add` requires a name and at least one sample; `edit` requires a name and
/// accepts zero samples.
#[derive(Debug, Clone, Default)]
pub struct VoiceUpload {
    pub name: String,
    pub description: Option<String>,
    pub labels: BTreeMap<String, String>,
    pub remove_background_noise: Option<bool>,
    pub samples: Vec<FilePart>,
}

impl VoiceUpload {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    pub fn remove_background_noise(mut self, enable: bool) -> Self {
        self.remove_background_noise = Some(enable);
        self
    }

    /// Adds a sample under the `files` field.
    pub fn sample(mut self, mut part: FilePart) -> Self {
        part.field = "files".to_string();
        self.samples.push(part);
        self
    }

    pub(crate) fn to_form(&self, require_samples: bool) -> Result<MultipartForm> {
        require_non_empty("name", &self.name)?;
        if require_samples && self.samples.is_empty() {
            return Err(Error::validation("at least one voice sample is required"));
        }
        // labels travel as a JSON-encoded string field
        let labels = if self.labels.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&self.labels)?)
        };
        let mut form = MultipartForm::new()
            .text("name", self.name.clone())
            .text_opt("description", self.description.as_ref())
            .text_opt("labels", labels)
            .text_opt("remove_background_noise", self.remove_background_noise);
        for sample in &self.samples {
            form = form.file(sample.clone());
        }
        Ok(form)
    }
}
