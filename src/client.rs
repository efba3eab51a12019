//! Client entry point.
//!
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;
pub(crate) mod validation;

pub use builder::ClientBuilder;
pub use self::core::ElevenLabsClient;
