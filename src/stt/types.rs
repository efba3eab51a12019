//! Speech-to-text types.

use crate::transport::{FilePart, MultipartForm};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_STT_MODEL: &str = "scribe_v1";

/// Transcription result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcription {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_probability: Option<f64>,
    #[serde(default)]
    pub words: Vec<Word>,
}

/// A transcribed word, spacing or audio event with timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
    /// `word`, `spacing` or `audio_event`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_id: Option<String>,
}

/// Multipart upload for `/v1/speech-to-text`.
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub model_id: String,
    pub file: FilePart,
    pub language_code: Option<String>,
    pub tag_audio_events: Option<bool>,
    pub num_speakers: Option<u32>,
    /// `none`, `word` or `character`.
    pub timestamps_granularity: Option<String>,
    pub diarize: Option<bool>,
}

impl TranscriptionRequest {
    pub fn new(file: FilePart) -> Self {
        Self {
            model_id: DEFAULT_STT_MODEL.to_string(),
            file,
            language_code: None,
            tag_audio_events: None,
            num_speakers: None,
            timestamps_granularity: None,
            diarize: None,
        }
    }

    /// Streams the audio file from disk when the request is sent.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::new(FilePart::from_path("file", path))
    }

    pub fn from_bytes(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self::new(FilePart::from_bytes("file", file_name, content_type, data))
    }

    pub fn model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn language_code(mut self, code: impl Into<String>) -> Self {
        self.language_code = Some(code.into());
        self
    }

    pub fn diarize(mut self, num_speakers: Option<u32>) -> Self {
        self.diarize = Some(true);
        self.num_speakers = num_speakers;
        self
    }

    pub fn tag_audio_events(mut self, enable: bool) -> Self {
        self.tag_audio_events = Some(enable);
        self
    }

    pub fn timestamps_granularity(mut self, granularity: impl Into<String>) -> Self {
        self.timestamps_granularity = Some(granularity.into());
        self
    }

    pub(crate) fn to_form(&self) -> MultipartForm {
        MultipartForm::new()
            .text("model_id", self.model_id.clone())
            .text_opt("language_code", self.language_code.as_ref())
            .text_opt("tag_audio_events", self.tag_audio_events)
            .text_opt("num_speakers", self.num_speakers)
            .text_opt("timestamps_granularity", self.timestamps_granularity.as_ref())
            .text_opt("diarize", self.diarize)
            .file(self.file.clone())
    }
}
