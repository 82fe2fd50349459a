use serde::{Deserialize, Serialize};

/// Local speech synthesis request
///
/// Omitted fields fall back to the configured voice defaults.
#[derive(Debug, Deserialize)]
pub struct EdgeSpeechRequest {
    /// Text to synthesize; required
    #[serde(default)]
    pub text: Option<String>,
    /// Voice short name (e.g. "en-US-GuyNeural")
    #[serde(default)]
    pub voice: Option<String>,
    /// Speaking rate offset (e.g. "+10%")
    #[serde(default)]
    pub rate: Option<String>,
    /// Pitch offset (e.g. "-2Hz")
    #[serde(default)]
    pub pitch: Option<String>,
    /// Volume offset (e.g. "+0%")
    #[serde(default)]
    pub volume: Option<String>,
}

/// Local speech synthesis response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechResponse {
    /// Base64 audio bytes
    pub audio_content: String,
    pub mime_type: String,
}
