//! # elevenlabs-client
//!
//! Async client for the ElevenLabs text-to-speech and conversational AI REST API.
//!
//! ## Overview
//!
//! Every call issues exactly one HTTP request through a shared [`HttpTransport`]:
//! JSON or multipart body in, parsed JSON / audio bytes / text out. Chunked
//! responses (streamed audio, newline-delimited timestamp objects) are delivered
//! to a caller-supplied callback as they arrive instead of being buffered.
//!
//! Non-2xx responses become [`Error::Api`] tagged with an [`ApiErrorKind`] and the
//! most readable message found in the error body. The library never retries,
//! caches or rate-limits.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use elevenlabs_client::{ClientConfig, ElevenLabsClient};
//! use elevenlabs_client::tts::{OutputOptions, TextToSpeechRequest};
//!
//! #[tokio::main]
//! async fn main() -> elevenlabs_client::Result<()> {
//!     let client = ElevenLabsClient::from_config(ClientConfig::from_env()?)?;
//!
//!     let request = TextToSpeechRequest::new("Hello from Rust").model_id("eleven_multilingual_v2");
//!     let audio = client
//!         .text_to_speech()
//!         .convert("21m00Tcm4TlvDq8ikWAM", &request, &OutputOptions::default())
//!         .await?;
//!     std::fs::write("hello.mp3", &audio.data)?;
//!
//!     // Streaming: one callback per received chunk.
//!     let mut received = Vec::new();
//!     client
//!         .text_to_speech()
//!         .convert_stream("21m00Tcm4TlvDq8ikWAM", &request, &OutputOptions::default(), |chunk| {
//!             received.extend_from_slice(&chunk);
//!             Ok(())
//!         })
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`transport`] | Request descriptors, multipart uploads, streaming delivery |
//! | [`response`] | Response bodies and status → error mapping |
//! | [`error_code`] | Closed set of API error kinds |
//! | [`config`] | Client configuration |
//! | [`client`] | Client entry point and builder |
//! | [`tts`] | Text-to-speech |
//! | [`stt`] | Speech-to-text |
//! | [`voices`] | Voice library |
//! | [`models`], [`user`], [`history`], [`agents`] | Smaller resource groups |

pub mod agents;
pub mod client;
pub mod config;
pub mod error_code;
pub mod history;
pub mod models;
pub mod response;
pub mod stt;
pub mod transport;
pub mod tts;
pub mod user;
pub mod voices;

pub use client::{ClientBuilder, ElevenLabsClient};
pub use config::ClientConfig;
pub use error_code::ApiErrorKind;
pub use response::ResponseBody;
pub use transport::{
    FilePart, HttpTransport, MultipartForm, Query, RequestSpec, StreamChunk, StreamMode,
    StreamSummary,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
