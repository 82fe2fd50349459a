use secrecy::SecretString;
use serde::Deserialize;

/// Gemini upstream configuration
///
/// One section covers the three Gemini-backed operations; the cloud
/// speech path may carry its own key, falling back to the shared one.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// API key for text and image generation
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// API key for cloud speech synthesis (falls back to `api_key`)
    #[serde(default)]
    pub tts_api_key: Option<SecretString>,
    /// Base URL override, mainly for tests
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Default model for text generation
    #[serde(default = "default_text_model")]
    pub text_model: String,
    /// Model for image generation
    #[serde(default = "default_image_model")]
    pub image_model: String,
    /// Model for cloud speech synthesis
    #[serde(default = "default_tts_model")]
    pub tts_model: String,
    /// Upstream request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            tts_api_key: None,
            base_url: default_base_url(),
            text_model: default_text_model(),
            image_model: default_image_model(),
            tts_model: default_tts_model(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_owned()
}

fn default_text_model() -> String {
    "gemini-3-flash-preview".to_owned()
}

fn default_image_model() -> String {
    "gemini-2.5-flash-image".to_owned()
}

fn default_tts_model() -> String {
    "gemini-2.5-flash-tts".to_owned()
}

const fn default_timeout_seconds() -> u64 {
    60
}
