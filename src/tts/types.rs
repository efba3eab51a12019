//! Text-to-speech types.

use crate::client::validation::require_range;
use crate::transport::Query;
use crate::{Error, Result};
use base64::Engine;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Audio codec of a synthesized clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCodec {
    Mp3,
    Pcm,
    Ulaw,
    Alaw,
    Opus,
}

impl AudioCodec {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Pcm => "pcm",
            Self::Ulaw => "ulaw",
            Self::Alaw => "alaw",
            Self::Opus => "opus",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Pcm => "audio/pcm",
            Self::Ulaw => "audio/basic",
            Self::Alaw => "audio/x-alaw-basic",
            Self::Opus => "audio/opus",
        }
    }
}

/// Requested output encoding, sent as the `output_format` query parameter
/// (e.g. `mp3_44100_128`, `pcm_16000`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutputFormat {
    pub codec: AudioCodec,
    pub sample_rate: u32,
    pub bitrate_kbps: Option<u32>,
}

impl OutputFormat {
    pub const MP3_22050_32: Self = Self::mp3(22050, 32);
    pub const MP3_44100_64: Self = Self::mp3(44100, 64);
    pub const MP3_44100_96: Self = Self::mp3(44100, 96);
    pub const MP3_44100_128: Self = Self::mp3(44100, 128);
    pub const MP3_44100_192: Self = Self::mp3(44100, 192);
    pub const PCM_16000: Self = Self::raw(AudioCodec::Pcm, 16000);
    pub const PCM_22050: Self = Self::raw(AudioCodec::Pcm, 22050);
    pub const PCM_24000: Self = Self::raw(AudioCodec::Pcm, 24000);
    pub const PCM_44100: Self = Self::raw(AudioCodec::Pcm, 44100);
    pub const ULAW_8000: Self = Self::raw(AudioCodec::Ulaw, 8000);
    pub const ALAW_8000: Self = Self::raw(AudioCodec::Alaw, 8000);
    pub const OPUS_48000_64: Self = Self {
        codec: AudioCodec::Opus,
        sample_rate: 48000,
        bitrate_kbps: Some(64),
    };

    const fn mp3(sample_rate: u32, bitrate_kbps: u32) -> Self {
        Self {
            codec: AudioCodec::Mp3,
            sample_rate,
            bitrate_kbps: Some(bitrate_kbps),
        }
    }

    const fn raw(codec: AudioCodec, sample_rate: u32) -> Self {
        Self {
            codec,
            sample_rate,
            bitrate_kbps: None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        self.codec.mime_type()
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::MP3_44100_128
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bitrate_kbps {
            Some(kbps) => write!(f, "{}_{}_{}", self.codec.as_str(), self.sample_rate, kbps),
            None => write!(f, "{}_{}", self.codec.as_str(), self.sample_rate),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::validation(format!("Unknown output format: {}", s));
        let mut parts = s.trim().to_ascii_lowercase().split('_').map(str::to_string).collect::<Vec<_>>();
        if parts.len() < 2 || parts.len() > 3 {
            return Err(invalid());
        }
        let codec = match parts.remove(0).as_str() {
            "mp3" => AudioCodec::Mp3,
            "pcm" => AudioCodec::Pcm,
            "ulaw" => AudioCodec::Ulaw,
            "alaw" => AudioCodec::Alaw,
            "opus" => AudioCodec::Opus,
            _ => return Err(invalid()),
        };
        let sample_rate = parts[0].parse::<u32>().map_err(|_| invalid())?;
        let bitrate_kbps = match parts.get(1) {
            Some(b) => Some(b.parse::<u32>().map_err(|_| invalid())?),
            None => None,
        };
        Ok(Self {
            codec,
            sample_rate,
            bitrate_kbps,
        })
    }
}

/// Per-request voice tuning. Unset fields fall back to the voice's stored settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stability: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_boost: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_speaker_boost: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
}

impl VoiceSettings {
    pub fn new(stability: f32, similarity_boost: f32) -> Self {
        Self {
            stability: Some(stability),
            similarity_boost: Some(similarity_boost),
            ..Default::default()
        }
    }

    /// Checks every set value is within the range the API accepts.
    pub fn validate(&self) -> Result<()> {
        if let Some(v) = self.stability {
            require_range("stability", v, 0.0, 1.0)?;
        }
        if let Some(v) = self.similarity_boost {
            require_range("similarity_boost", v, 0.0, 1.0)?;
        }
        if let Some(v) = self.style {
            require_range("style", v, 0.0, 1.0)?;
        }
        if let Some(v) = self.speed {
            require_range("speed", v, 0.7, 1.2)?;
        }
        Ok(())
    }
}

/// JSON body shared by the text-to-speech endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextToSpeechRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_settings: Option<VoiceSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub previous_request_ids: Vec<String>,
}

impl TextToSpeechRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model_id: None,
            language_code: None,
            voice_settings: None,
            seed: None,
            previous_text: None,
            next_text: None,
            previous_request_ids: Vec::new(),
        }
    }

    pub fn model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn language_code(mut self, code: impl Into<String>) -> Self {
        self.language_code = Some(code.into());
        self
    }

    pub fn voice_settings(mut self, settings: VoiceSettings) -> Self {
        self.voice_settings = Some(settings);
        self
    }

    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Text spoken before/after this clip, used to keep prosody continuous across requests.
    pub fn context(mut self, previous_text: Option<String>, next_text: Option<String>) -> Self {
        self.previous_text = previous_text;
        self.next_text = next_text;
        self
    }

    pub fn previous_request_ids(mut self, ids: Vec<String>) -> Self {
        self.previous_request_ids = ids;
        self
    }
}

/// Query options shared by the text-to-speech endpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputOptions {
    pub output_format: Option<OutputFormat>,
    pub enable_logging: Option<bool>,
    /// 0 (default) to 4 (max latency optimizations).
    pub optimize_streaming_latency: Option<u32>,
}

impl OutputOptions {
    pub fn format(format: OutputFormat) -> Self {
        Self {
            output_format: Some(format),
            ..Default::default()
        }
    }

    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .push_opt("output_format", self.output_format.map(|f| f.to_string()))
            .push_opt("enable_logging", self.enable_logging)
            .push_opt("optimize_streaming_latency", self.optimize_streaming_latency)
    }
}

/// Buffered audio from a non-streaming call.
#[derive(Debug, Clone)]
pub struct AudioOutput {
    pub data: Bytes,
    pub format: OutputFormat,
}

/// Character-level timing for a synthesized clip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alignment {
    pub characters: Vec<String>,
    pub character_start_times_seconds: Vec<f64>,
    pub character_end_times_seconds: Vec<f64>,
}

impl Alignment {
    /// End time of the last character, or `0.0` for an empty alignment.
    pub fn duration_seconds(&self) -> f64 {
        self.character_end_times_seconds.last().copied().unwrap_or(0.0)
    }

    pub fn text(&self) -> String {
        self.characters.concat()
    }
}

/// Audio with timing, as returned by the `with-timestamps` endpoints.
///
/// In a stream, each line carries one of these with the next slice of audio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioWithTimestamps {
    #[serde(default)]
    pub audio_base64: String,
    #[serde(default)]
    pub alignment: Option<Alignment>,
    #[serde(default)]
    pub normalized_alignment: Option<Alignment>,
}

impl AudioWithTimestamps {
    pub fn audio_bytes(&self) -> Result<Vec<u8>> {
        base64::engine::general_purpose::STANDARD
            .decode(self.audio_base64.as_bytes())
            .map_err(|e| Error::decode(format!("invalid audio_base64: {}", e)))
    }
}
