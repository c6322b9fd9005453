//! Translation of post text before synthesis

use crate::error::{TtsError, TtsResult};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_GOOGLE_URL: &str = "https://translate.googleapis.com";

/// Trait for translation services
#[async_trait]
pub trait Translator: Send + Sync + std::fmt::Debug {
    async fn translate(&self, text: &str, target_lang: &str) -> TtsResult<String>;
}

/// Google Translate via the public `translate_a/single` endpoint
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    base_url: String,
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl GoogleTranslator {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_GOOGLE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, target_lang: &str) -> TtsResult<String> {
        let url = format!(
            "{}/translate_a/single?client=gtx&sl=auto&tl={}&dt=t&q={}",
            self.base_url,
            urlencoding::encode(target_lang),
            urlencoding::encode(text)
        );

        let body: Value = self
            .client
            .get(url)
            .timeout(Duration::from_secs(10))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let translated = parse_translation(&body)?;
        debug!("🌐 Translated {} chars to '{}'", text.len(), target_lang);
        Ok(translated)
    }
}

/// The response is nested arrays; `body[0][i][0]` holds the translated segments.
fn parse_translation(body: &Value) -> TtsResult<String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TtsError::Translation(format!("Unexpected response: {}", body)))?;

    let translated: String = segments
        .iter()
        .filter_map(|seg| seg.get(0).and_then(Value::as_str))
        .collect();

    if translated.trim().is_empty() {
        return Err(TtsError::Translation("Empty translation".to_string()));
    }
    Ok(translated)
}
