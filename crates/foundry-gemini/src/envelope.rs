//! Response adapter: normalizes the provider's nested envelopes
//!
//! The documented shape-walk is `candidates[0].content.parts[0]`, then the
//! part is inspected for `inlineData` (image, or audio on newer model
//! versions) or the legacy `audio.data` nesting. A missing link anywhere
//! in the walk is reported by key name, never as a fault.

use foundry_core::{GatewayError, Operation, Result};
use http::StatusCode;
use serde_json::Value;

/// Normalized success payload extracted from an upstream envelope
#[derive(Debug, Clone)]
pub enum Normalized {
    /// Full envelope passthrough (text generation)
    Envelope(Value),
    /// Base64 image bytes with their MIME type
    Image { data: String, mime_type: String },
    /// Base64 audio bytes
    Audio { data: String },
}

impl Normalized {
    pub fn into_envelope(self) -> Result<Value> {
        match self {
            Self::Envelope(value) => Ok(value),
            Self::Image { .. } | Self::Audio { .. } => Err(shape_error("text envelope")),
        }
    }

    pub fn into_image(self) -> Result<(String, String)> {
        match self {
            Self::Image { data, mime_type } => Ok((data, mime_type)),
            Self::Envelope(_) | Self::Audio { .. } => Err(shape_error("image payload")),
        }
    }

    pub fn into_audio(self) -> Result<String> {
        match self {
            Self::Audio { data } => Ok(data),
            Self::Envelope(_) | Self::Image { .. } => Err(shape_error("audio payload")),
        }
    }
}

/// Adapt a raw upstream response for the given operation
///
/// Non-2xx statuses are a normal outcome path and map to
/// `UpstreamRejected` with a truncated body.
pub(crate) fn extract(operation: Operation, status: StatusCode, body: &[u8]) -> Result<Normalized> {
    if !status.is_success() {
        return Err(GatewayError::rejected(status.as_u16(), &String::from_utf8_lossy(body)));
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|_| shape_error("JSON envelope"))?;

    match operation {
        Operation::TextGeneration => Ok(Normalized::Envelope(value)),
        Operation::ImageGeneration => extract_image(&value),
        Operation::CloudSpeechSynthesis => extract_audio(&value),
        Operation::LocalSpeechSynthesis | Operation::WeatherLookup => Err(GatewayError::InvalidInput(format!(
            "operation {operation} has no Gemini envelope"
        ))),
    }
}

/// First part of the first candidate, the payload location for every
/// non-passthrough operation
fn first_part(value: &Value) -> Result<&Value> {
    let candidates = value
        .get("candidates")
        .and_then(Value::as_array)
        .ok_or_else(|| shape_error("candidates"))?;

    let candidate = candidates.first().ok_or_else(|| shape_error("candidates[0]"))?;

    let parts = candidate
        .get("content")
        .ok_or_else(|| shape_error("candidates[0].content"))?
        .get("parts")
        .and_then(Value::as_array)
        .ok_or_else(|| shape_error("content.parts"))?;

    parts.first().ok_or_else(|| shape_error("parts[0]"))
}

fn extract_image(value: &Value) -> Result<Normalized> {
    let part = first_part(value)?;

    let inline = part.get("inlineData").ok_or_else(|| shape_error("parts[0].inlineData"))?;

    let mime_type = inline
        .get("mimeType")
        .and_then(Value::as_str)
        .ok_or_else(|| shape_error("inlineData.mimeType"))?;

    if !mime_type.starts_with("image/") {
        return Err(shape_error("inlineData with image/* mimeType"));
    }

    let data = inline
        .get("data")
        .and_then(Value::as_str)
        .ok_or_else(|| shape_error("inlineData.data"))?;

    Ok(Normalized::Image {
        data: data.to_owned(),
        mime_type: mime_type.to_owned(),
    })
}

/// Speech payloads arrive either as the legacy `audio.data` nesting or as
/// `inlineData` with an `audio/*` MIME type, depending on model version
fn extract_audio(value: &Value) -> Result<Normalized> {
    let part = first_part(value)?;

    if let Some(audio) = part.get("audio") {
        let data = audio
            .get("data")
            .and_then(Value::as_str)
            .ok_or_else(|| shape_error("audio.data"))?;

        return Ok(Normalized::Audio { data: data.to_owned() });
    }

    if let Some(inline) = part.get("inlineData") {
        let is_audio = inline
            .get("mimeType")
            .and_then(Value::as_str)
            .is_some_and(|mime| mime.starts_with("audio/"));

        if is_audio {
            let data = inline
                .get("data")
                .and_then(Value::as_str)
                .ok_or_else(|| shape_error("inlineData.data"))?;

            return Ok(Normalized::Audio { data: data.to_owned() });
        }
    }

    Err(shape_error("parts[0].audio"))
}

fn shape_error(key: &str) -> GatewayError {
    GatewayError::UnexpectedEnvelopeShape(key.to_owned())
}
