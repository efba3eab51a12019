//! Speech-to-text: multipart audio upload, JSON transcript back.

mod client;
mod types;

pub use client::SpeechToText;
pub use types::{Transcription, TranscriptionRequest, Word, DEFAULT_STT_MODEL};
