//! Text-to-speech example
//!
//! Synthesizes a sentence twice: once buffered, once streamed chunk by chunk.
//!
//! Usage:
//!   ELEVENLABS_API_KEY=sk_... cargo run --example text_to_speech -- "Hello there"

use elevenlabs_client::tts::{OutputFormat, OutputOptions, TextToSpeechRequest, VoiceSettings};
use elevenlabs_client::{ClientConfig, ElevenLabsClient};
use tracing_subscriber::EnvFilter;

const VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("elevenlabs_client=debug")))
        .init();

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "The quick brown fox jumps over the lazy dog.".to_string());

    let client = ElevenLabsClient::from_config(ClientConfig::from_env()?)?;

    let sub = client.user().subscription().await?;
    println!("{} tier, {} characters left", sub.tier, sub.remaining_characters());

    let request = TextToSpeechRequest::new(text)
        .model_id("eleven_multilingual_v2")
        .voice_settings(VoiceSettings::new(0.5, 0.75));

    let audio = client
        .text_to_speech()
        .convert(VOICE_ID, &request, &OutputOptions::default())
        .await?;
    std::fs::write("speech.mp3", &audio.data)?;
    println!("wrote speech.mp3 ({} bytes, {})", audio.data.len(), audio.format);

    let mut streamed = Vec::new();
    let summary = client
        .text_to_speech()
        .convert_stream(
            VOICE_ID,
            &request,
            &OutputOptions::format(OutputFormat::MP3_22050_32),
            |chunk| {
                streamed.extend_from_slice(&chunk);
                Ok(())
            },
        )
        .await?;
    std::fs::write("speech_stream.mp3", &streamed)?;
    println!(
        "wrote speech_stream.mp3 ({} bytes in {} chunks)",
        summary.bytes, summary.chunks
    );

    Ok(())
}
