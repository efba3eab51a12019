//! Speech-to-text endpoint.

use super::types::{Transcription, TranscriptionRequest};
use crate::client::validation::require_non_empty;
use crate::transport::{HttpTransport, RequestSpec};
use crate::Result;
use tracing::debug;

/// `/v1/speech-to-text`.
pub struct SpeechToText<'a> {
    transport: &'a HttpTransport,
}

impl<'a> SpeechToText<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Uploads the audio file and returns the transcript.
    pub async fn convert(&self, request: &TranscriptionRequest) -> Result<Transcription> {
        require_non_empty("model_id", &request.model_id)?;
        debug!(file = %request.file.file_name, model = %request.model_id, "transcribing");
        let spec = RequestSpec::post(&["v1", "speech-to-text"]).multipart(request.to_form());
        self.transport.execute_json(spec).await
    }
}
