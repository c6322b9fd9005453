//! Narrator
//!
//! Turns one piece of post text into one audio clip: process the text,
//! split it to the backend's request limit, synthesize, write once and
//! measure the result.

use crate::audio;
use crate::core::{split_text, TextProcessor};
use crate::error::{TtsError, TtsResult};
use crate::tts::TtsBackend;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info};

/// A narrated clip on disk
#[derive(Debug, Clone, PartialEq)]
pub struct Clip {
    pub path: PathBuf,
    pub duration_secs: f64,
    /// Number of provider requests it took
    pub parts: usize,
}

#[derive(Debug, Clone)]
pub struct Narrator {
    backend: Arc<dyn TtsBackend>,
    processor: TextProcessor,
    random_voice: bool,
}

impl Narrator {
    pub fn new(backend: Arc<dyn TtsBackend>, processor: TextProcessor) -> Self {
        Self {
            backend,
            processor,
            random_voice: false,
        }
    }

    pub fn with_random_voice(mut self, random_voice: bool) -> Self {
        self.random_voice = random_voice;
        self
    }

    pub fn backend(&self) -> &Arc<dyn TtsBackend> {
        &self.backend
    }

    async fn prepare(&self, text: &str) -> TtsResult<Vec<String>> {
        let text = self.processor.process(text, true).await?;
        let chunks = split_text(&text, self.backend.max_chars());
        if chunks.is_empty() {
            return Err(TtsError::EmptyText);
        }
        Ok(chunks)
    }

    /// Synthesize every chunk with one voice and concatenate the audio.
    ///
    /// Only frame streams (MP3, AAC) can be joined this way; anything else
    /// fails after the first part instead of producing a file whose header
    /// describes only that part.
    async fn synthesize_chunks(&self, chunks: &[String]) -> TtsResult<Vec<u8>> {
        let voice = self.backend.select_voice(self.random_voice);
        let mut audio = Vec::new();
        for (i, chunk) in chunks.iter().enumerate() {
            debug!("📢 Part {}/{} ({} chars)", i + 1, chunks.len(), chunk.chars().count());
            let result = self.backend.synthesize(chunk, voice.as_deref()).await?;
            if chunks.len() > 1 && !result.format.is_concatenable() {
                error!(
                    "❌ Cannot join {} parts of {} audio",
                    chunks.len(),
                    result.format.extension()
                );
                return Err(TtsError::Config(format!(
                    "{} audio cannot be joined from {} parts; use mp3 output or a higher character limit",
                    result.format.extension(),
                    chunks.len()
                )));
            }
            audio.extend_from_slice(&result.audio);
        }
        Ok(audio)
    }

    /// Process and synthesize `text` without touching the filesystem
    pub async fn synthesize_text(&self, text: &str) -> TtsResult<Vec<u8>> {
        let chunks = self.prepare(text).await?;
        self.synthesize_chunks(&chunks).await
    }

    /// Narrate `text` into `path` and return the clip with its duration.
    ///
    /// The file is written once, after every part has been synthesized.
    pub async fn narrate(&self, text: &str, path: &Path) -> TtsResult<Clip> {
        let chunks = self.prepare(text).await?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        match chunks.as_slice() {
            [single] => self.backend.run(single, path, self.random_voice).await?,
            _ => {
                let audio = self.synthesize_chunks(&chunks).await?;
                tokio::fs::write(path, &audio).await?;
            }
        }

        let duration_secs = audio::duration_secs(path)?;
        info!(
            "🎙️ Narrated {} ({:.2}s, {} part(s)) via {}",
            path.display(),
            duration_secs,
            chunks.len(),
            self.backend.name()
        );

        Ok(Clip {
            path: path.to_path_buf(),
            duration_secs,
            parts: chunks.len(),
        })
    }
}
