//! Gemini `generateContent` wire format and per-operation payload builders

use foundry_core::{GatewayError, Operation, Result};
use serde::Serialize;

/// Response MIME type requested for image generation
const IMAGE_MIME: &str = "image/png";

/// Response MIME type requested for cloud speech synthesis
const AUDIO_MIME: &str = "audio/mpeg";

/// Safety categories forced open for speech synthesis
///
/// The synthesis target is narrative character dialogue; the provider's
/// default thresholds would reject ordinary dramatic lines.
const PERMISSIVE_SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

const BLOCK_NONE: &str = "BLOCK_NONE";

/// Gemini `generateContent` request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_settings: Option<Vec<SafetySetting>>,
}

/// Content object containing the prompt parts
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// Single text part
#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

/// Generation configuration
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
}

/// Safety category override
#[derive(Debug, Clone, Serialize)]
pub struct SafetySetting {
    pub category: &'static str,
    pub threshold: &'static str,
}

/// Build the payload for an operation from its generic input
///
/// Pure; validation failures surface as `InvalidInput` before any
/// credential is resolved or any outbound call is made.
pub(crate) fn request_for(operation: Operation, input: &str) -> Result<GeminiRequest> {
    match operation {
        Operation::TextGeneration => text_request(input),
        Operation::ImageGeneration => image_request(input),
        Operation::CloudSpeechSynthesis => speech_request(input),
        Operation::LocalSpeechSynthesis | Operation::WeatherLookup => Err(GatewayError::InvalidInput(format!(
            "operation {operation} has no Gemini payload"
        ))),
    }
}

/// Text generation payload: bare prompt contents
pub(crate) fn text_request(prompt: &str) -> Result<GeminiRequest> {
    Ok(GeminiRequest {
        contents: prompt_contents(prompt, "Prompt is required")?,
        generation_config: None,
        safety_settings: None,
    })
}

/// Image generation payload: prompt contents plus a PNG response request
pub(crate) fn image_request(prompt: &str) -> Result<GeminiRequest> {
    Ok(GeminiRequest {
        contents: prompt_contents(prompt, "Prompt is required")?,
        generation_config: Some(GenerationConfig {
            response_mime_type: IMAGE_MIME.to_owned(),
        }),
        safety_settings: None,
    })
}

/// Cloud speech payload: text contents, MPEG response, open safety gates
pub(crate) fn speech_request(text: &str) -> Result<GeminiRequest> {
    Ok(GeminiRequest {
        contents: prompt_contents(text, "Text is required")?,
        generation_config: Some(GenerationConfig {
            response_mime_type: AUDIO_MIME.to_owned(),
        }),
        safety_settings: Some(
            PERMISSIVE_SAFETY_CATEGORIES
                .into_iter()
                .map(|category| SafetySetting {
                    category,
                    threshold: BLOCK_NONE,
                })
                .collect(),
        ),
    })
}

fn prompt_contents(text: &str, missing_message: &str) -> Result<Vec<Content>> {
    if text.trim().is_empty() {
        return Err(GatewayError::InvalidInput(missing_message.to_owned()));
    }

    Ok(vec![Content {
        parts: vec![Part { text: text.to_owned() }],
    }])
}
