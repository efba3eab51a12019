//! Voice library: listing, cloning from samples, editing and per-voice settings.

mod client;
mod types;

pub use client::Voices;
pub use types::{AddVoiceResponse, Voice, VoiceUpload};
