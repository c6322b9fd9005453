//! Mock TTS Backend for Testing
//!
//! Records every synthesis request for verification.

use async_trait::async_trait;
use reddit_tts::tts::voices;
use reddit_tts::tts::{AudioFormat, SynthesisResult, TtsBackend};
use reddit_tts::{TtsError, TtsResult};
use std::sync::{Arc, Mutex};

/// Mock backend that returns fixed audio and records requests
#[derive(Debug)]
pub struct MockBackend {
    /// (text, voice) of every synthesize call
    pub requests: Arc<Mutex<Vec<(String, Option<String>)>>>,
    /// Simulate a provider rejection on the next call
    pub should_fail: Arc<Mutex<bool>>,
    audio: Vec<u8>,
    format: AudioFormat,
    max_chars: usize,
}

impl MockBackend {
    pub fn new(audio: Vec<u8>) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            should_fail: Arc::new(Mutex::new(false)),
            audio,
            format: AudioFormat::Wav,
            max_chars: 200,
        }
    }

    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    pub fn with_format(mut self, format: AudioFormat) -> Self {
        self.format = format;
        self
    }

    pub fn get_requests(&self) -> Vec<(String, Option<String>)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn fail_next(&self) {
        *self.should_fail.lock().unwrap() = true;
    }
}

#[async_trait]
impl TtsBackend for MockBackend {
    async fn synthesize(&self, text: &str, voice: Option<&str>) -> TtsResult<SynthesisResult> {
        if std::mem::take(&mut *self.should_fail.lock().unwrap()) {
            return Err(TtsError::provider(4, "Mock voice does not exist"));
        }
        self.requests
            .lock()
            .unwrap()
            .push((text.to_string(), voice.map(str::to_string)));
        Ok(SynthesisResult::new(self.audio.clone(), self.format))
    }

    fn select_voice(&self, random_voice: bool) -> Option<String> {
        if random_voice {
            Some(voices::random_english_voice().to_string())
        } else {
            Some("mock_voice".to_string())
        }
    }

    fn max_chars(&self) -> usize {
        self.max_chars
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_backend_records_requests() {
        let mock = MockBackend::new(vec![1, 2, 3]);
        mock.synthesize("hello", None).await.unwrap();
        mock.synthesize("world", Some("en_us_001")).await.unwrap();

        let requests = mock.get_requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1], ("world".to_string(), Some("en_us_001".to_string())));
    }

    #[tokio::test]
    async fn test_mock_backend_fails_once() {
        let mock = MockBackend::new(vec![1]);
        mock.fail_next();
        assert_eq!(mock.synthesize("a", None).await.unwrap_err().code(), Some(4));
        assert!(mock.synthesize("b", None).await.is_ok());
    }
}
