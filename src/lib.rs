//! reddit-tts Library
//!
//! Narration for Reddit thread videos: text processing, pluggable
//! text-to-speech backends and clip measurement.

pub mod audio;
pub mod config;
pub mod core;
pub mod error;
pub mod narrator;
pub mod tts;

pub use error::{ErrorKind, ProviderError, TtsError, TtsResult};
pub use narrator::{Clip, Narrator};
pub use tts::{create_backend, SynthesisResult, TtsBackend};
