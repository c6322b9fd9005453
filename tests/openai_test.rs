use mockito::{Matcher, Server};
use reddit_tts::audio;
use reddit_tts::tts::{AudioFormat, TtsBackend};
use reddit_tts::TtsError;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_run_writes_audio_and_measures_duration() {
    let wav = common::wav_bytes(8000, 8000);
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/audio/speech")
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::Json(json!({
            "model": "tts-1-hd",
            "voice": "alloy",
            "input": "Hello world",
            "response_format": "wav"
        })))
        .with_status(200)
        .with_header("content-type", "audio/wav")
        .with_body(wav.clone())
        .expect(1)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.wav");
    let backend = common::openai_backend(&server.url(), "wav");
    backend.run("Hello world", &path, true).await.unwrap();

    mock.assert_async().await;
    assert_eq!(std::fs::read(&path).unwrap(), wav);
    let secs = audio::duration_secs(&path).unwrap();
    assert!((secs - 1.0).abs() < 0.01, "{secs}");
}

#[tokio::test]
async fn test_synthesize_returns_raw_bytes() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/audio/speech")
        .with_status(200)
        .with_body(vec![7u8; 512])
        .create_async()
        .await;

    let backend = common::openai_backend(&server.url(), "mp3");
    let result = backend.synthesize("Hi", None).await.unwrap();
    assert_eq!(result.len(), 512);
    assert_eq!(result.format, AudioFormat::Mp3);
}

#[tokio::test]
async fn test_api_error_is_structured() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/audio/speech")
        .with_status(401)
        .with_body(r#"{"error": {"message": "Incorrect API key provided"}}"#)
        .expect(1)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.mp3");
    let backend = common::openai_backend(&server.url(), "mp3");
    let err = backend.run("Hello", &path, false).await.unwrap_err();

    mock.assert_async().await;
    match err {
        TtsError::Provider(e) => {
            assert_eq!(e.code, 0);
            assert!(e.message.contains("401"), "{}", e.message);
            assert!(e.message.contains("Incorrect API key"), "{}", e.message);
        }
        other => panic!("expected provider error, got {other:?}"),
    }
    assert!(!path.exists());
}

#[tokio::test]
async fn test_empty_body_is_an_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/audio/speech")
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let backend = common::openai_backend(&server.url(), "mp3");
    let err = backend.synthesize("Hello", None).await.unwrap_err();
    assert!(err.to_string().ends_with("No voice data returned from API"));
}

#[tokio::test]
async fn test_text_over_limit_is_rejected() {
    let backend = common::openai_backend("http://127.0.0.1:1", "mp3");
    let text = "x".repeat(4097);
    let err = backend.synthesize(&text, None).await.unwrap_err();
    assert_eq!(err.code(), Some(2));
}
