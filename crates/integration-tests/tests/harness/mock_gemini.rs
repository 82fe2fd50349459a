//! Mock Gemini backend server for integration tests
//!
//! Implements a minimal `generateContent` endpoint that shapes its canned
//! envelope after the response MIME type the gateway asked for

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

/// Mock Gemini backend that returns predictable envelopes
pub struct MockGemini {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockGeminiState>,
}

struct MockGeminiState {
    request_count: AtomicU32,
    /// Custom envelope returned for every request (if set)
    envelope: Option<Value>,
    /// Failure status and body returned for every request (if set)
    failure: Option<(u16, String)>,
}

impl MockGemini {
    /// Start the mock server with MIME-shaped default envelopes
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(None, None).await
    }

    /// Start a mock server that always returns the given envelope
    pub async fn start_with_envelope(envelope: Value) -> anyhow::Result<Self> {
        Self::start_inner(Some(envelope), None).await
    }

    /// Start a mock server that always fails with the given status
    pub async fn start_failing(status: u16, body: &str) -> anyhow::Result<Self> {
        Self::start_inner(None, Some((status, body.to_owned()))).await
    }

    async fn start_inner(envelope: Option<Value>, failure: Option<(u16, String)>) -> anyhow::Result<Self> {
        let state = Arc::new(MockGeminiState {
            request_count: AtomicU32::new(0),
            envelope,
            failure,
        });

        let app = Router::new()
            .route("/models/{model_call}", routing::post(generate_handler))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL to hand to the gateway configuration
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of generate requests received so far
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::SeqCst)
    }
}

impl Drop for MockGemini {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn generate_handler(State(state): State<Arc<MockGeminiState>>, Json(body): Json<Value>) -> axum::response::Response {
    state.request_count.fetch_add(1, Ordering::SeqCst);

    if let Some((status, body)) = &state.failure {
        let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, body.clone()).into_response();
    }

    if let Some(envelope) = &state.envelope {
        return Json(envelope.clone()).into_response();
    }

    let mime = body
        .pointer("/generationConfig/responseMimeType")
        .and_then(Value::as_str);

    let envelope = match mime {
        Some("image/png") => json!({
            "candidates": [{"content": {"parts": [{
                "inlineData": {"mimeType": "image/png", "data": "cG5nLWJ5dGVz"}
            }]}}]
        }),
        Some("audio/mpeg") => json!({
            "candidates": [{"content": {"parts": [{"audio": {"data": "bXAzLWJ5dGVz"}}]}}]
        }),
        _ => json!({
            "candidates": [{"content": {"parts": [{"text": "mock reply"}]}}],
            "modelVersion": "mock-1"
        }),
    };

    Json(envelope).into_response()
}
