#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod bridge;
mod engine;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use foundry_core::{GatewayError, GatewayJson, Operation, Result};

pub use bridge::SynthesisBridge;
pub use engine::{EdgeEngine, SpeechEngine, VoiceParams};
pub use types::{EdgeSpeechRequest, SpeechResponse};

/// Gateway state for local speech synthesis
pub struct Server {
    bridge: SynthesisBridge,
    defaults: foundry_config::EdgeTtsConfig,
}

impl Server {
    pub fn from_config(config: &foundry_config::EdgeTtsConfig) -> Self {
        Self {
            bridge: SynthesisBridge::new(Arc::new(EdgeEngine), config.scratch_dir.clone()),
            defaults: config.clone(),
        }
    }
}

/// Build the local TTS state from configuration
pub fn build_server(config: &foundry_config::Config) -> Arc<Server> {
    Arc::new(Server::from_config(&config.tts))
}

/// Create the endpoint router for local speech synthesis
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/api/tts/edge", post(synthesize_edge))
}

/// Handle local speech synthesis requests
async fn synthesize_edge(
    State(server): State<Arc<Server>>,
    GatewayJson(request): GatewayJson<EdgeSpeechRequest>,
) -> Result<Json<SpeechResponse>> {
    tracing::debug!(operation = %Operation::LocalSpeechSynthesis, "local speech handler called");

    let text = request.text.as_deref().unwrap_or_default();
    if text.trim().is_empty() {
        return Err(GatewayError::InvalidInput("Text is required".to_owned()));
    }

    let defaults = &server.defaults;
    let params = VoiceParams::new(
        request.voice.as_deref().unwrap_or(defaults.voice.as_str()),
        request.rate.as_deref().unwrap_or(defaults.rate.as_str()),
        request.pitch.as_deref().unwrap_or(defaults.pitch.as_str()),
        request.volume.as_deref().unwrap_or(defaults.volume.as_str()),
    )?;

    let audio_content = server.bridge.synthesize(text, &params).await?;

    Ok(Json(SpeechResponse {
        audio_content,
        mime_type: "audio/mp3".to_owned(),
    }))
}
