//! TikTok TTS backend via the weilnet proxy
//!
//! Protocol notes: https://github.com/oscie57/tiktok-voice/wiki

use super::retry::RetryPolicy;
use super::voices;
use super::{AudioFormat, SynthesisResult, TtsBackend};
use crate::config::TikTokConfig;
use crate::error::{TtsError, TtsResult};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::{HeaderMap, HeaderValue, COOKIE, USER_AGENT};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, warn};

const TIKTOK_USER_AGENT: &str = "com.zhiliaoapp.musically/2022600030 (Linux; U; Android 7.1.2; es_ES; SM-G988N; Build/NRD90M;tt-ok/3.12.13.1)";

#[derive(Debug, Serialize)]
struct TikTokRequest<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    voice: Option<&'a str>,
}

/// Proxy response. Validated once by [`TikTokResponse::into_audio`].
#[derive(Debug, Deserialize)]
pub struct TikTokResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl TikTokResponse {
    /// Check the success flag and decode the base64 payload.
    ///
    /// Whitespace inside the payload (wrapped lines) is ignored.
    pub fn into_audio(self) -> TtsResult<Vec<u8>> {
        if !self.success {
            error!(
                "❌ TikTok API request was unsuccessful: {}",
                self.error.as_deref().unwrap_or("no error given")
            );
            return Err(TtsError::provider(0, "Failed to fetch voices"));
        }

        let raw = match self.data {
            Some(data) if !data.is_empty() => data,
            _ => {
                error!("❌ No voice data returned");
                return Err(TtsError::provider(0, "No voice data returned from API"));
            }
        };

        let raw: Vec<u8> = raw
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        match STANDARD.decode(&raw) {
            Ok(audio) if !audio.is_empty() => Ok(audio),
            Ok(_) => Err(TtsError::provider(0, "No voice data returned from API")),
            Err(e) => {
                error!("❌ Failed to decode raw voices: {}", e);
                Err(TtsError::provider(
                    0,
                    "Decoding failed for the received data.",
                ))
            }
        }
    }
}

/// Replace characters the proxy treats specially.
///
/// `r/` is removed repeatedly, so `rr//` does not collapse into a new `r/`.
pub fn filter_text(text: &str) -> String {
    let mut out = text.replace('+', "plus").replace('&', "and");
    while out.contains("r/") {
        out = out.replace("r/", "");
    }
    out
}

#[derive(Debug)]
pub struct TikTokBackend {
    client: reqwest::Client,
    endpoint: String,
    voice: Option<String>,
    max_chars: usize,
    retry: RetryPolicy,
}

impl TikTokBackend {
    pub fn new(config: &TikTokConfig, retry: RetryPolicy) -> TtsResult<Self> {
        let session_id = config.session_id.trim();
        if session_id.is_empty() {
            return Err(TtsError::Config(
                "TikTok session id is missing. Please check your configuration.".to_string(),
            ));
        }

        let voice = match config.voice.as_deref().map(str::trim) {
            Some("") | None => None,
            Some(v) if voices::is_tiktok_voice(v) => Some(v.to_string()),
            Some(v) => {
                return Err(TtsError::Config(format!("Unknown TikTok voice '{}'", v)));
            }
        };

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(TIKTOK_USER_AGENT));
        let cookie = HeaderValue::from_str(&format!("sessionid={}", session_id))
            .map_err(|e| TtsError::Config(format!("Invalid TikTok session id: {}", e)))?;
        headers.insert(COOKIE, cookie);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        info!(
            "🔊 TikTok backend ready (endpoint: {}, voice: {})",
            config.endpoint,
            voice.as_deref().unwrap_or("provider default")
        );

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            voice,
            max_chars: config.max_chars,
            retry,
        })
    }

    /// POST the request once. HTTP status errors become provider errors.
    async fn post(&self, request: &TikTokRequest<'_>) -> TtsResult<TikTokResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        if let Err(e) = response.error_for_status_ref() {
            error!("❌ HTTP error occurred: {}", e);
            return Err(TtsError::provider(0, "HTTP error during voice fetching."));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            warn!("❌ Failed to parse TikTok response: {} - Body: {}", e, body);
            TtsError::provider(0, "Failed to fetch voices")
        })
    }
}

#[async_trait]
impl TtsBackend for TikTokBackend {
    async fn synthesize(&self, text: &str, voice: Option<&str>) -> TtsResult<SynthesisResult> {
        let text = filter_text(text);
        let len = text.chars().count();
        if len > self.max_chars {
            error!("❌ Text is {} chars, limit is {}", len, self.max_chars);
            return Err(TtsError::provider(2, "Text is too long"));
        }

        debug!(
            "📢 TikTok synthesizing {} chars (voice: {})",
            len,
            voice.unwrap_or("default")
        );
        let request = TikTokRequest { text: &text, voice };
        let response = self
            .retry
            .run("TikTok voice fetch", || self.post(&request))
            .await?;

        let audio = response.into_audio()?;
        Ok(SynthesisResult::new(audio, AudioFormat::Mp3))
    }

    fn select_voice(&self, random_voice: bool) -> Option<String> {
        if random_voice {
            Some(voices::random_english_voice().to_string())
        } else {
            self.voice.clone()
        }
    }

    fn max_chars(&self) -> usize {
        self.max_chars
    }

    fn name(&self) -> &str {
        "tiktok"
    }
}
