//! OpenAI speech backend

use super::retry::RetryPolicy;
use super::voices;
use super::{AudioFormat, SynthesisResult, TtsBackend};
use crate::config::OpenAiConfig;
use crate::error::{TtsError, TtsResult};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info};

const SPEECH_PATH: &str = "/v1/audio/speech";

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
    response_format: &'a str,
}

#[derive(Debug)]
pub struct OpenAiBackend {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
    voice: String,
    response_format: String,
    max_chars: usize,
    retry: RetryPolicy,
}

impl OpenAiBackend {
    pub fn new(config: &OpenAiConfig, retry: RetryPolicy) -> TtsResult<Self> {
        let api_key = config.api_key.trim();
        if api_key.is_empty() {
            return Err(TtsError::Config(
                "OpenAI API key is missing. Please check your configuration.".to_string(),
            ));
        }
        if !voices::is_openai_voice(&config.voice) {
            return Err(TtsError::Config(format!(
                "Unknown OpenAI voice '{}'",
                config.voice
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        info!(
            "🔊 OpenAI backend ready (model: {}, voice: {})",
            config.model, config.voice
        );

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            endpoint: format!("{}{}", config.base_url.trim_end_matches('/'), SPEECH_PATH),
            model: config.model.clone(),
            voice: config.voice.clone(),
            response_format: config.response_format.clone(),
            max_chars: config.max_chars,
            retry,
        })
    }

    async fn post(&self, request: &SpeechRequest<'_>) -> TtsResult<Vec<u8>> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes);
            error!("❌ OpenAI API error ({}): {}", status, body);
            return Err(TtsError::provider(
                0,
                format!("OpenAI API error ({}): {}", status, body),
            ));
        }
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl TtsBackend for OpenAiBackend {
    async fn synthesize(&self, text: &str, voice: Option<&str>) -> TtsResult<SynthesisResult> {
        let len = text.chars().count();
        if len > self.max_chars {
            error!("❌ Text is {} chars, limit is {}", len, self.max_chars);
            return Err(TtsError::provider(2, "Text is too long"));
        }

        let voice = match voice {
            Some(v) if !voices::is_openai_voice(v) => {
                return Err(TtsError::Config(format!("Unknown OpenAI voice '{}'", v)));
            }
            Some(v) => v,
            None => self.voice.as_str(),
        };
        debug!("📢 OpenAI synthesizing {} chars (voice: {})", len, voice);
        let request = SpeechRequest {
            model: &self.model,
            voice,
            input: text,
            response_format: &self.response_format,
        };

        let audio = self
            .retry
            .run("OpenAI speech request", || self.post(&request))
            .await?;

        if audio.is_empty() {
            error!("❌ OpenAI returned an empty audio body");
            return Err(TtsError::provider(0, "No voice data returned from API"));
        }
        Ok(SynthesisResult::new(
            audio,
            AudioFormat::from_name(&self.response_format),
        ))
    }

    /// The cloud voice is fixed; `random_voice` has no effect here
    fn select_voice(&self, _random_voice: bool) -> Option<String> {
        Some(self.voice.clone())
    }

    fn max_chars(&self) -> usize {
        self.max_chars
    }

    fn name(&self) -> &str {
        "openai"
    }
}
