//! Text Processing
//!
//! Sanitizes post text and, when a target language is configured,
//! translates it before synthesis.

use super::sanitizer::sanitize_text;
use super::translate::{GoogleTranslator, Translator};
use crate::config::Config;
use crate::error::TtsResult;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct TextProcessor {
    target_lang: Option<String>,
    translator: Option<Arc<dyn Translator>>,
}

impl TextProcessor {
    /// Sanitize only, no translation
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_translator(target_lang: &str, translator: Arc<dyn Translator>) -> Self {
        Self {
            target_lang: Some(target_lang.to_string()),
            translator: Some(translator),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match config.target_language() {
            Some(lang) => Self::with_translator(lang, Arc::new(GoogleTranslator::new())),
            None => Self::new(),
        }
    }

    pub fn target_language(&self) -> Option<&str> {
        self.target_lang.as_deref()
    }

    /// Prepare `text` for synthesis.
    ///
    /// Translation errors are returned as-is; a misconfigured language
    /// should stop the run rather than narrate untranslated text.
    pub async fn process(&self, text: &str, clean: bool) -> TtsResult<String> {
        let mut new_text = if clean {
            sanitize_text(text)
        } else {
            text.to_string()
        };

        if let (Some(lang), Some(translator)) = (&self.target_lang, &self.translator) {
            info!("🌐 Translating text to '{}'", lang);
            let translated = translator.translate(text, lang).await?;
            new_text = sanitize_text(&translated);
        }

        Ok(new_text)
    }
}
