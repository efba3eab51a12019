//! Streaming with character timestamps
//!
//! Prints each character with its start time as the audio arrives.
//!
//! Usage:
//!   ELEVENLABS_API_KEY=sk_... cargo run --example stream_with_timestamps

use elevenlabs_client::tts::{OutputOptions, TextToSpeechRequest};
use elevenlabs_client::{ClientConfig, ElevenLabsClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = ElevenLabsClient::from_config(ClientConfig::from_env()?)?;
    let request = TextToSpeechRequest::new("Timing every single character.")
        .model_id("eleven_turbo_v2_5");

    let mut audio = Vec::new();
    client
        .text_to_speech()
        .stream_with_timestamps(
            "21m00Tcm4TlvDq8ikWAM",
            &request,
            &OutputOptions::default(),
            |chunk| {
                audio.extend(chunk.audio_bytes()?);
                if let Some(alignment) = &chunk.alignment {
                    for (c, start) in alignment
                        .characters
                        .iter()
                        .zip(&alignment.character_start_times_seconds)
                    {
                        println!("{:>7.3}s  {}", start, c);
                    }
                }
                Ok(())
            },
        )
        .await?;

    std::fs::write("timed.mp3", &audio)?;
    println!("wrote timed.mp3 ({} bytes)", audio.len());
    Ok(())
}
