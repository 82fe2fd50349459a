use serde::{Deserialize, Serialize};

/// Generation request for the text and image routes
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Model override; each operation has a configured default
    #[serde(default)]
    pub model: Option<String>,
    /// Prompt text; required, enforced by the request adapter
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Cloud speech synthesis request
#[derive(Debug, Deserialize)]
pub struct CloudSpeechRequest {
    /// Text to synthesize; required
    #[serde(default)]
    pub text: Option<String>,
    /// Synthesis model override
    #[serde(default)]
    pub voice_name: Option<String>,
}

/// Image generation response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    /// Base64 image bytes, exactly as the provider produced them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    /// Hosted image URL, when a deployment serves images out-of-band
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub mime_type: String,
}

/// Cloud speech synthesis response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechResponse {
    /// Base64 audio bytes
    pub audio_content: String,
    pub mime_type: String,
}
