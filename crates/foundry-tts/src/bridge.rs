use std::path::PathBuf;
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use foundry_core::{GatewayError, Result};
use tempfile::TempPath;
use uuid::Uuid;

use crate::engine::{SpeechEngine, VoiceParams};

/// Bridges the file-producing speech engine into an in-memory result
///
/// Each call acquires a uniquely named transient file, drives the engine
/// to completion against it, reads the audio back, and unlinks the file
/// on every exit path. Calls share nothing but the engine handle, so
/// concurrent synthesis never collides.
pub struct SynthesisBridge {
    engine: Arc<dyn SpeechEngine>,
    scratch_dir: PathBuf,
}

impl SynthesisBridge {
    pub fn new(engine: Arc<dyn SpeechEngine>, scratch_dir: Option<PathBuf>) -> Self {
        Self {
            engine,
            scratch_dir: scratch_dir.unwrap_or_else(std::env::temp_dir),
        }
    }

    /// Synthesize `text` and return the audio as base64
    ///
    /// # Errors
    ///
    /// `UpstreamTransport` when the engine fails or the output cannot be
    /// read back; the transient file is deleted in either case.
    pub async fn synthesize(&self, text: &str, params: &VoiceParams) -> Result<String> {
        let path = self.scratch_dir.join(format!("edge-tts-{}.mp3", Uuid::new_v4()));

        // Wrapped before the engine runs: dropping the TempPath unlinks
        // the file on success, engine failure, and read failure alike.
        let transient = TempPath::from_path(path);

        tracing::debug!(voice = %params.voice, "synthesizing on local engine");

        self.engine.synthesize_to_file(text, params, &transient).await?;

        let bytes = tokio::fs::read(&transient)
            .await
            .map_err(|e| GatewayError::UpstreamTransport(format!("failed to read synthesis output: {e}")))?;

        tracing::debug!(bytes = bytes.len(), "local synthesis complete");

        Ok(BASE64.encode(bytes))
    }
}
