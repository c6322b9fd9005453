//! TTS (Text-to-Speech) Module
//!
//! Provides a unified interface for the remote TTS providers.

use crate::config::Config;
use crate::error::{TtsError, TtsResult};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

pub mod openai;
pub mod retry;
pub mod tiktok;
pub mod voices;

pub use openai::OpenAiBackend;
pub use retry::RetryPolicy;
pub use tiktok::TikTokBackend;

/// Container format of synthesized audio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
    Opus,
    Aac,
    Flac,
    Wav,
    Pcm,
}

impl AudioFormat {
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "opus" => Self::Opus,
            "aac" => Self::Aac,
            "flac" => Self::Flac,
            "wav" => Self::Wav,
            "pcm" => Self::Pcm,
            _ => Self::Mp3,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Opus => "opus",
            Self::Aac => "aac",
            Self::Flac => "flac",
            Self::Wav => "wav",
            Self::Pcm => "pcm",
        }
    }

    /// Frame-based streams stay valid when clips are appended byte for byte.
    /// Containers with a length header (WAV, FLAC, Ogg) do not.
    pub fn is_concatenable(&self) -> bool {
        matches!(self, Self::Mp3 | Self::Aac)
    }
}

/// Decoded audio returned by a provider. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisResult {
    pub audio: Vec<u8>,
    pub format: AudioFormat,
}

impl SynthesisResult {
    pub fn new(audio: Vec<u8>, format: AudioFormat) -> Self {
        Self { audio, format }
    }

    pub fn len(&self) -> usize {
        self.audio.len()
    }

    pub fn is_empty(&self) -> bool {
        self.audio.is_empty()
    }

    /// Duration in seconds, read from the container metadata
    pub fn duration_secs(&self) -> TtsResult<f64> {
        crate::audio::duration_from_bytes(&self.audio)
    }

    /// Write the audio to `path`, replacing any existing file
    pub async fn write_to(&self, path: &Path) -> TtsResult<()> {
        tokio::fs::write(path, &self.audio).await?;
        debug!("💾 Wrote {} bytes to {}", self.audio.len(), path.display());
        Ok(())
    }
}

/// Trait for TTS backends
#[async_trait]
pub trait TtsBackend: Send + Sync + std::fmt::Debug {
    /// Convert `text` to audio with the given voice, or the provider default
    async fn synthesize(&self, text: &str, voice: Option<&str>) -> TtsResult<SynthesisResult>;

    /// Voice to request for the next clip
    fn select_voice(&self, random_voice: bool) -> Option<String>;

    /// Longest text (in chars) a single request accepts
    fn max_chars(&self) -> usize;

    /// Get the backend name
    fn name(&self) -> &str;

    /// Synthesize `text` and write the audio to `filepath`.
    ///
    /// Nothing is written unless synthesis succeeds.
    async fn run(&self, text: &str, filepath: &Path, random_voice: bool) -> TtsResult<()> {
        let voice = self.select_voice(random_voice);
        let result = self.synthesize(text, voice.as_deref()).await?;
        result.write_to(filepath).await
    }
}

/// Factory to create the configured TTS backend
pub fn create_backend(config: &Config) -> TtsResult<Arc<dyn TtsBackend>> {
    info!("🛠️ Creating TTS backend: {}", config.tts_engine);
    let backend: Arc<dyn TtsBackend> = match config.tts_engine.to_lowercase().as_str() {
        "tiktok" => Arc::new(TikTokBackend::new(&config.tiktok, config.retry.clone())?),
        "openai" => Arc::new(OpenAiBackend::new(&config.openai, config.retry.clone())?),
        other => {
            return Err(TtsError::Config(format!(
                "Unknown TTS engine '{}' (expected 'tiktok' or 'openai')",
                other
            )))
        }
    };
    info!("✅ TTS backend '{}' initialized", backend.name());
    Ok(backend)
}
