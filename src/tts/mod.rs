//! Text-to-speech: buffered, streamed and timestamped synthesis.

mod client;
mod types;

pub use client::TextToSpeech;
pub use types::{
    Alignment, AudioCodec, AudioOutput, AudioWithTimestamps, OutputFormat, OutputOptions,
    TextToSpeechRequest, VoiceSettings,
};
