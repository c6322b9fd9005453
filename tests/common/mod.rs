#![allow(dead_code)]

pub mod mock_tts;

use reddit_tts::config::{OpenAiConfig, TikTokConfig};
use reddit_tts::tts::{OpenAiBackend, RetryPolicy, TikTokBackend};

pub const SESSION_ID: &str = "test-session";
pub const API_KEY: &str = "sk-test";

/// One retry, no sleeping
pub fn instant_retry() -> RetryPolicy {
    RetryPolicy {
        max_retries: 1,
        min_backoff_secs: 0,
        max_backoff_secs: 0,
    }
}

pub fn tiktok_backend(server_url: &str) -> TikTokBackend {
    tiktok_backend_with(server_url, None)
}

pub fn tiktok_backend_with(server_url: &str, voice: Option<&str>) -> TikTokBackend {
    let config = TikTokConfig {
        session_id: SESSION_ID.to_string(),
        voice: voice.map(str::to_string),
        endpoint: format!("{}/api/generation", server_url),
        timeout_secs: 5,
        ..TikTokConfig::default()
    };
    TikTokBackend::new(&config, instant_retry()).expect("Failed to build TikTok backend")
}

pub fn openai_backend(server_url: &str, response_format: &str) -> OpenAiBackend {
    let config = OpenAiConfig {
        api_key: API_KEY.to_string(),
        base_url: server_url.to_string(),
        response_format: response_format.to_string(),
        timeout_secs: 5,
        ..OpenAiConfig::default()
    };
    OpenAiBackend::new(&config, instant_retry()).expect("Failed to build OpenAI backend")
}

/// 16-bit mono PCM WAV of silence
pub fn wav_bytes(sample_rate: u32, samples: u32) -> Vec<u8> {
    let data_len = samples * 2;
    let mut out = Vec::with_capacity(44 + data_len as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&(sample_rate * 2).to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    out.resize(44 + data_len as usize, 0);
    out
}

/// `frames` MPEG-1 Layer III frames (128 kbps, 44.1 kHz, silent payload)
pub fn mp3_bytes(frames: usize) -> Vec<u8> {
    const FRAME_LEN: usize = 417;
    let mut out = Vec::with_capacity(frames * FRAME_LEN);
    for _ in 0..frames {
        let start = out.len();
        out.extend_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);
        out.resize(start + FRAME_LEN, 0);
    }
    out
}
