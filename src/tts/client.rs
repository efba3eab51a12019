//! Text-to-speech endpoints.

use super::types::{AudioOutput, AudioWithTimestamps, OutputOptions, TextToSpeechRequest};
use crate::client::validation::require_non_empty;
use crate::transport::{HttpTransport, RequestSpec, StreamChunk, StreamMode, StreamSummary};
use crate::{Error, Result};
use bytes::Bytes;

/// `/v1/text-to-speech/{voice_id}` and its streaming/timestamp variants.
pub struct TextToSpeech<'a> {
    transport: &'a HttpTransport,
}

impl<'a> TextToSpeech<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    fn spec(
        voice_id: &str,
        suffix: &[&str],
        request: &TextToSpeechRequest,
        options: &OutputOptions,
    ) -> Result<RequestSpec> {
        require_non_empty("voice_id", voice_id)?;
        require_non_empty("text", &request.text)?;
        if let Some(settings) = &request.voice_settings {
            settings.validate()?;
        }
        let mut segments = vec!["v1", "text-to-speech", voice_id];
        segments.extend_from_slice(suffix);
        RequestSpec::post(&segments)
            .query(options.to_query())
            .json(request)
    }

    /// Synthesizes `request.text` and returns the whole clip.
    pub async fn convert(
        &self,
        voice_id: &str,
        request: &TextToSpeechRequest,
        options: &OutputOptions,
    ) -> Result<AudioOutput> {
        let format = options.output_format.unwrap_or_default();
        let spec = Self::spec(voice_id, &[], request, options)?.header("accept", format.mime_type());
        let data = self.transport.execute_bytes(spec).await?;
        Ok(AudioOutput { data, format })
    }

    /// Synthesizes `request.text`, handing each audio chunk to `on_audio` as it arrives.
    pub async fn convert_stream<F>(
        &self,
        voice_id: &str,
        request: &TextToSpeechRequest,
        options: &OutputOptions,
        mut on_audio: F,
    ) -> Result<StreamSummary>
    where
        F: FnMut(Bytes) -> Result<()>,
    {
        let format = options.output_format.unwrap_or_default();
        let spec = Self::spec(voice_id, &["stream"], request, options)?
            .header("accept", format.mime_type());
        self.transport
            .execute_stream(spec, StreamMode::Bytes, |chunk| match chunk {
                StreamChunk::Audio(bytes) => on_audio(bytes),
                StreamChunk::Json(_) => Err(Error::stream("unexpected JSON chunk in audio stream")),
            })
            .await
    }

    /// Alias of [`convert_stream`](Self::convert_stream).
    pub async fn stream<F>(
        &self,
        voice_id: &str,
        request: &TextToSpeechRequest,
        options: &OutputOptions,
        on_audio: F,
    ) -> Result<StreamSummary>
    where
        F: FnMut(Bytes) -> Result<()>,
    {
        self.convert_stream(voice_id, request, options, on_audio).await
    }

    /// Synthesizes the whole clip together with character-level timing.
    pub async fn convert_with_timestamps(
        &self,
        voice_id: &str,
        request: &TextToSpeechRequest,
        options: &OutputOptions,
    ) -> Result<AudioWithTimestamps> {
        let spec = Self::spec(voice_id, &["with-timestamps"], request, options)?;
        self.transport.execute_json(spec).await
    }

    /// Streams audio slices with timing, one decoded line per callback.
    pub async fn stream_with_timestamps<F>(
        &self,
        voice_id: &str,
        request: &TextToSpeechRequest,
        options: &OutputOptions,
        mut on_chunk: F,
    ) -> Result<StreamSummary>
    where
        F: FnMut(AudioWithTimestamps) -> Result<()>,
    {
        let spec = Self::spec(voice_id, &["stream", "with-timestamps"], request, options)?;
        self.transport
            .execute_stream(spec, StreamMode::JsonLines, |chunk| match chunk {
                StreamChunk::Json(value) => on_chunk(serde_json::from_value(value)?),
                StreamChunk::Audio(_) => Err(Error::stream("unexpected raw chunk in timestamp stream")),
            })
            .await
    }
}
