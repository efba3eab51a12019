//! Speech-to-text example
//!
//! Uploads an audio file and prints the transcript with speaker labels.
//!
//! Usage:
//!   ELEVENLABS_API_KEY=sk_... cargo run --example transcribe -- meeting.mp3

use anyhow::Context;
use elevenlabs_client::stt::TranscriptionRequest;
use elevenlabs_client::{ClientConfig, ElevenLabsClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .context("usage: transcribe <audio file>")?;

    let client = ElevenLabsClient::from_config(ClientConfig::from_env()?)?;
    let request = TranscriptionRequest::from_path(&path)
        .diarize(Some(2))
        .tag_audio_events(true);

    let transcript = client.speech_to_text().convert(&request).await?;

    println!(
        "[{}] {}",
        transcript.language_code.as_deref().unwrap_or("?"),
        transcript.text
    );
    for word in transcript.words.iter().filter(|w| w.kind.as_deref() == Some("word")) {
        println!(
            "{:>8.2}-{:<8.2} {:<12} {}",
            word.start.unwrap_or_default(),
            word.end.unwrap_or_default(),
            word.speaker_id.as_deref().unwrap_or("-"),
            word.text
        );
    }
    Ok(())
}
