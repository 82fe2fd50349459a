#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod client;
mod envelope;
mod protocol;
mod registry;
mod server;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use foundry_core::{GatewayJson, Operation, Result};

pub use envelope::Normalized;
pub use registry::{ProviderBinding, Registry};
pub use server::Server;
pub use types::{CloudSpeechRequest, GenerateRequest, ImageResponse, SpeechResponse};

/// Build the Gemini gateway state from configuration
pub fn build_server(config: &foundry_config::Config) -> Arc<Server> {
    Arc::new(Server::from_config(&config.gemini))
}

/// Create the endpoint router for the Gemini-backed operations
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new()
        .route("/api/gemini/generate", post(generate_text))
        .route("/api/imagen/generate", post(generate_image))
        .route("/api/tts/google", post(synthesize_cloud))
}

/// Handle text generation requests
///
/// The upstream envelope is passed through verbatim; the client consumes
/// the provider's own candidate structure.
async fn generate_text(
    State(server): State<Arc<Server>>,
    GatewayJson(request): GatewayJson<GenerateRequest>,
) -> Result<Json<serde_json::Value>> {
    tracing::debug!("text generation handler called");

    let prompt = request.prompt.as_deref().unwrap_or_default();
    let normalized = server
        .execute(Operation::TextGeneration, request.model.as_deref(), prompt)
        .await?;

    Ok(Json(normalized.into_envelope()?))
}

/// Handle image generation requests
async fn generate_image(
    State(server): State<Arc<Server>>,
    GatewayJson(request): GatewayJson<GenerateRequest>,
) -> Result<Json<ImageResponse>> {
    tracing::debug!("image generation handler called");

    let prompt = request.prompt.as_deref().unwrap_or_default();
    let normalized = server
        .execute(Operation::ImageGeneration, request.model.as_deref(), prompt)
        .await?;

    let (data, mime_type) = normalized.into_image()?;

    Ok(Json(ImageResponse {
        image_data: Some(data),
        image_url: None,
        mime_type,
    }))
}

/// Handle cloud speech synthesis requests
///
/// `voice_name` overrides the configured synthesis model; the upstream
/// voice is a property of the model on this provider.
async fn synthesize_cloud(
    State(server): State<Arc<Server>>,
    GatewayJson(request): GatewayJson<CloudSpeechRequest>,
) -> Result<Json<SpeechResponse>> {
    tracing::debug!("cloud speech handler called");

    let text = request.text.as_deref().unwrap_or_default();
    let normalized = server
        .execute(Operation::CloudSpeechSynthesis, request.voice_name.as_deref(), text)
        .await?;

    Ok(Json(SpeechResponse {
        audio_content: normalized.into_audio()?,
        mime_type: "audio/mp3".to_owned(),
    }))
}
