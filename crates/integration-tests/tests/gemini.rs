mod harness;

use harness::config::ConfigBuilder;
use harness::mock_gemini::MockGemini;
use harness::server::TestServer;
use serde_json::{Value, json};

async fn server_with_mock(mock: &MockGemini) -> TestServer {
    let config = ConfigBuilder::new().with_gemini(&mock.base_url()).build();
    TestServer::start(config).await.unwrap()
}

// -- Text generation --

#[tokio::test]
async fn text_generation_passes_envelope_through() {
    let mock = MockGemini::start().await.unwrap();
    let server = server_with_mock(&mock).await;

    let resp = server
        .client()
        .post(server.url("/api/gemini/generate"))
        .json(&json!({"prompt": "a knight errant"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["candidates"][0]["content"]["parts"][0]["text"], "mock reply");
    // Passthrough keeps fields the gateway itself never looks at
    assert_eq!(body["modelVersion"], "mock-1");
}

#[tokio::test]
async fn empty_prompt_is_rejected_without_upstream_call() {
    let mock = MockGemini::start().await.unwrap();
    let server = server_with_mock(&mock).await;

    let resp = server
        .client()
        .post(server.url("/api/gemini/generate"))
        .json(&json!({"prompt": ""}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Prompt is required");
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn missing_prompt_field_is_rejected() {
    let mock = MockGemini::start().await.unwrap();
    let server = server_with_mock(&mock).await;

    let resp = server
        .client()
        .post(server.url("/api/gemini/generate"))
        .json(&json!({"model": "gemini-custom"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn missing_credential_short_circuits() {
    let mock = MockGemini::start().await.unwrap();
    let config = ConfigBuilder::new().with_gemini_unkeyed(&mock.base_url()).build();
    let server = TestServer::start(config).await.unwrap();

    let resp = server
        .client()
        .post(server.url("/api/gemini/generate"))
        .json(&json!({"prompt": "hello"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Gemini API key not configured");
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn upstream_rejection_propagates_status_and_body() {
    let mock = MockGemini::start_failing(429, "quota exceeded").await.unwrap();
    let server = server_with_mock(&mock).await;

    let resp = server
        .client()
        .post(server.url("/api/gemini/generate"))
        .json(&json!({"prompt": "hello"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 429);

    let body: Value = resp.json().await.unwrap();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("quota exceeded"), "got: {message}");
}

#[tokio::test]
async fn malformed_body_is_a_uniform_400() {
    let mock = MockGemini::start().await.unwrap();
    let server = server_with_mock(&mock).await;

    let resp = server
        .client()
        .post(server.url("/api/gemini/generate"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("invalid JSON body"));
}

#[tokio::test]
async fn wrong_content_type_is_a_uniform_400() {
    let mock = MockGemini::start().await.unwrap();
    let server = server_with_mock(&mock).await;

    let resp = server
        .client()
        .post(server.url("/api/gemini/generate"))
        .header("content-type", "text/plain")
        .body(r#"{"prompt": "hello"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("application/json"));
}

// -- Image generation --

#[tokio::test]
async fn image_generation_round_trips_base64() {
    let mock = MockGemini::start().await.unwrap();
    let server = server_with_mock(&mock).await;

    let resp = server
        .client()
        .post(server.url("/api/imagen/generate"))
        .json(&json!({"prompt": "portrait of a bard"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["imageData"], "cG5nLWJ5dGVz");
    assert_eq!(body["mimeType"], "image/png");
}

#[tokio::test]
async fn envelope_without_candidates_names_the_key() {
    let mock = MockGemini::start_with_envelope(json!({"promptFeedback": {}})).await.unwrap();
    let server = server_with_mock(&mock).await;

    let resp = server
        .client()
        .post(server.url("/api/imagen/generate"))
        .json(&json!({"prompt": "portrait"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);

    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("`candidates`"));
}

// -- Cloud speech --

#[tokio::test]
async fn cloud_speech_extracts_nested_audio_data() {
    let mock = MockGemini::start().await.unwrap();
    let server = server_with_mock(&mock).await;

    let resp = server
        .client()
        .post(server.url("/api/tts/google"))
        .json(&json!({"text": "to be or not to be"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["audioContent"], "bXAzLWJ5dGVz");
    assert_eq!(body["mimeType"], "audio/mp3");
}

#[tokio::test]
async fn empty_speech_text_is_rejected() {
    let mock = MockGemini::start().await.unwrap();
    let server = server_with_mock(&mock).await;

    let resp = server
        .client()
        .post(server.url("/api/tts/google"))
        .json(&json!({"text": ""}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Text is required");
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn missing_speech_credential_names_google_tts() {
    let mock = MockGemini::start().await.unwrap();
    let config = ConfigBuilder::new().with_gemini_unkeyed(&mock.base_url()).build();
    let server = TestServer::start(config).await.unwrap();

    let resp = server
        .client()
        .post(server.url("/api/tts/google"))
        .json(&json!({"text": "hello"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Google TTS API key not configured");
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn dedicated_speech_key_does_not_unlock_text_generation() {
    let mock = MockGemini::start().await.unwrap();
    let config = ConfigBuilder::new()
        .with_gemini_unkeyed(&mock.base_url())
        .with_tts_key("tts-only")
        .build();
    let server = TestServer::start(config).await.unwrap();

    let speech = server
        .client()
        .post(server.url("/api/tts/google"))
        .json(&json!({"text": "hello"}))
        .send()
        .await
        .unwrap();
    assert_eq!(speech.status(), 200);

    let text = server
        .client()
        .post(server.url("/api/gemini/generate"))
        .json(&json!({"prompt": "hello"}))
        .send()
        .await
        .unwrap();
    assert_eq!(text.status(), 500);
}
