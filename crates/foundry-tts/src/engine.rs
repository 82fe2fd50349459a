use std::path::Path;

use async_trait::async_trait;
use foundry_core::{GatewayError, Result};
use msedge_tts::tts::{SpeechConfig, client::connect};

/// Output format requested from the Edge speech service
const AUDIO_FORMAT: &str = "audio-24khz-48kbitrate-mono-mp3";

/// Voice parameters for the local engine
///
/// Rate and volume are percentage offsets, pitch a Hz offset, all parsed
/// from the caller-facing `+10%` / `-2Hz` notation.
#[derive(Debug, Clone)]
pub struct VoiceParams {
    pub voice: String,
    pub rate: i32,
    pub pitch: i32,
    pub volume: i32,
}

impl VoiceParams {
    /// Parse caller-facing offset strings into engine values
    ///
    /// # Errors
    ///
    /// `InvalidInput` naming the offending field on a malformed offset
    pub fn new(voice: &str, rate: &str, pitch: &str, volume: &str) -> Result<Self> {
        if voice.trim().is_empty() {
            return Err(GatewayError::InvalidInput("Voice must not be empty".to_owned()));
        }

        Ok(Self {
            voice: voice.to_owned(),
            rate: parse_offset(rate, "%", "rate")?,
            pitch: parse_offset(pitch, "Hz", "pitch")?,
            volume: parse_offset(volume, "%", "volume")?,
        })
    }
}

/// Parse a signed offset such as `+0%`, `-10%`, or `+2Hz`
///
/// The unit suffix is optional; the sign is not required for zero.
fn parse_offset(value: &str, unit: &str, field: &str) -> Result<i32> {
    let trimmed = value.trim();
    let magnitude = trimmed.strip_suffix(unit).unwrap_or(trimmed);

    magnitude
        .parse::<i32>()
        .map_err(|_| GatewayError::InvalidInput(format!("invalid {field} value: {value}")))
}

/// Seam between the synthesis bridge and the speech engine
///
/// The production engine talks to the Edge speech service; tests drive
/// the bridge with a fake that writes canned bytes or fails.
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    /// Synthesize `text` and write the audio to `path`, running the
    /// engine to completion before returning
    async fn synthesize_to_file(&self, text: &str, params: &VoiceParams, path: &Path) -> Result<()>;
}

/// Edge neural voice engine
///
/// The underlying client drives its own websocket I/O loop; each call
/// runs that loop to completion on a dedicated blocking worker and joins
/// it explicitly, so invocations stay isolated from one another.
pub struct EdgeEngine;

#[async_trait]
impl SpeechEngine for EdgeEngine {
    async fn synthesize_to_file(&self, text: &str, params: &VoiceParams, path: &Path) -> Result<()> {
        let text = text.to_owned();
        let params = params.clone();
        let path = path.to_owned();

        tokio::task::spawn_blocking(move || -> Result<()> {
            let config = SpeechConfig {
                voice_name: params.voice,
                audio_format: AUDIO_FORMAT.to_owned(),
                pitch: params.pitch,
                rate: params.rate,
                volume: params.volume,
            };

            let mut client = connect().map_err(engine_error)?;
            let audio = client.synthesize(&text, &config).map_err(engine_error)?;

            std::fs::write(&path, &audio.audio_bytes)
                .map_err(|e| GatewayError::UpstreamTransport(format!("failed to write synthesis output: {e}")))?;

            Ok(())
        })
        .await
        .map_err(|e| GatewayError::UpstreamTransport(format!("synthesis worker failed: {e}")))?
    }
}

fn engine_error<E: std::fmt::Display>(err: E) -> GatewayError {
    GatewayError::UpstreamTransport(format!("speech engine error: {err}"))
}
