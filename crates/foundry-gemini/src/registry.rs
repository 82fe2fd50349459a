use foundry_config::GeminiConfig;
use foundry_core::{GatewayError, Operation, Result};
use secrecy::{ExposeSecret, SecretString};

/// Immutable binding from a logical operation to its upstream target
///
/// Holds the endpoint without the credential; the key is attached only
/// when the request URL is built, immediately before the outbound call.
#[derive(Debug, Clone)]
pub struct ProviderBinding {
    /// Model the operation runs against
    pub model: String,
    /// `generateContent` endpoint for that model, credential excluded
    pub endpoint: String,
    api_key: SecretString,
}

impl ProviderBinding {
    /// Full request URL with the `?key=` credential attached
    ///
    /// The returned string carries the secret; it is handed straight to
    /// the upstream client and must never be logged.
    pub fn request_url(&self) -> String {
        format!("{}?key={}", self.endpoint, self.api_key.expose_secret())
    }
}

/// Static mapping from operations to upstream bindings
///
/// Built once from configuration; read-only for the process lifetime.
/// Credential presence is checked on every `resolve` call, so a missing
/// key fails the individual operation rather than process startup.
pub struct Registry {
    base_url: String,
    api_key: Option<SecretString>,
    tts_api_key: Option<SecretString>,
    text_model: String,
    image_model: String,
    tts_model: String,
}

impl Registry {
    pub fn from_config(config: &GeminiConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            api_key: config.api_key.clone(),
            // Cloud speech may run on its own key; otherwise share the Gemini one
            tts_api_key: config.tts_api_key.clone().or_else(|| config.api_key.clone()),
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
            tts_model: config.tts_model.clone(),
        }
    }

    /// Resolve an operation to its binding, applying the model override
    ///
    /// # Errors
    ///
    /// `MissingCredential` when the key for the operation is not
    /// configured; `InvalidInput` for operations that are not
    /// Gemini-backed.
    pub fn resolve(&self, operation: Operation, model_override: Option<&str>) -> Result<ProviderBinding> {
        let (api_key, provider, default_model) = match operation {
            Operation::TextGeneration => (&self.api_key, "Gemini", &self.text_model),
            Operation::ImageGeneration => (&self.api_key, "Gemini", &self.image_model),
            Operation::CloudSpeechSynthesis => (&self.tts_api_key, "Google TTS", &self.tts_model),
            Operation::LocalSpeechSynthesis | Operation::WeatherLookup => {
                return Err(GatewayError::InvalidInput(format!(
                    "operation {operation} has no Gemini binding"
                )));
            }
        };

        let api_key = api_key
            .as_ref()
            .ok_or(GatewayError::MissingCredential { provider })?
            .clone();

        let model = model_override
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(default_model.as_str());

        Ok(ProviderBinding {
            model: model.to_owned(),
            endpoint: format!("{}/models/{model}:generateContent", self.base_url),
            api_key,
        })
    }
}
