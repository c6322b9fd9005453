use crate::core::thread_audio_dir;
use crate::tts::retry::RetryPolicy;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_TIKTOK_ENDPOINT: &str = "https://tiktok-tts.weilnet.workers.dev/api/generation";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend to use: "tiktok" or "openai"
    pub tts_engine: String,
    /// Pick a random English voice for every clip
    pub random_voice: bool,
    /// Target language for translation; empty disables it
    pub post_lang: String,
    /// Root for per-thread working directories
    pub temp_dir: PathBuf,

    pub tiktok: TikTokConfig,
    pub openai: OpenAiConfig,
    pub retry: RetryPolicy,
}

/// Settings for the TikTok proxy backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TikTokConfig {
    pub session_id: String,
    /// Fixed voice; `None` lets the provider choose
    pub voice: Option<String>,
    pub endpoint: String,
    pub max_chars: usize,
    pub timeout_secs: u64,
}

/// Settings for the OpenAI speech backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub voice: String,
    pub response_format: String,
    pub max_chars: usize,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tts_engine: "tiktok".to_string(),
            random_voice: false,
            post_lang: "".to_string(),
            temp_dir: PathBuf::from("assets/temp"),
            tiktok: TikTokConfig::default(),
            openai: OpenAiConfig::default(),
            retry: RetryPolicy::default(),
        }
    }
}

impl Default for TikTokConfig {
    fn default() -> Self {
        Self {
            session_id: "".to_string(),
            voice: None,
            endpoint: DEFAULT_TIKTOK_ENDPOINT.to_string(),
            max_chars: 200,
            timeout_secs: 60,
        }
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: "".to_string(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: "tts-1-hd".to_string(),
            voice: "alloy".to_string(),
            response_format: "mp3".to_string(),
            max_chars: 4096,
            timeout_secs: 60,
        }
    }
}

impl Config {
    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from an explicit path.
    ///
    /// A missing file yields defaults. A corrupt file is moved aside to
    /// `config.json.corrupt` and defaults are used.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                    let backup_path = path.with_extension("json.corrupt");
                    let _ = std::fs::rename(path, &backup_path);
                    Self::default()
                }
            }
        } else {
            Self::default()
        };
        Ok(config.with_env_overrides())
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Credentials from the environment fill in blanks, never override the file
    pub fn with_env_overrides(mut self) -> Self {
        if self.tiktok.session_id.is_empty() {
            if let Ok(v) = std::env::var("TIKTOK_SESSIONID") {
                self.tiktok.session_id = v;
            }
        }
        if self.openai.api_key.is_empty() {
            if let Ok(v) = std::env::var("OPENAI_API_KEY") {
                self.openai.api_key = v;
            }
        }
        self
    }

    /// Translation target, if one is configured
    pub fn target_language(&self) -> Option<&str> {
        let lang = self.post_lang.trim();
        (!lang.is_empty()).then_some(lang)
    }

    /// Working directory for one thread's audio, `<temp_dir>/<sanitized id>/mp3`
    pub fn thread_dir(&self, thread_id: &str) -> PathBuf {
        thread_audio_dir(&self.temp_dir, thread_id)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("reddit-tts")
        .join("config.json")
}
