#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod gemini;
pub mod health;
mod loader;
pub mod server;
pub mod tts;
pub mod weather;

use secrecy::SecretString;
use serde::Deserialize;

pub use cors::*;
pub use gemini::GeminiConfig;
pub use health::HealthConfig;
pub use server::ServerConfig;
pub use tts::EdgeTtsConfig;
pub use weather::WeatherConfig;

/// Top-level Foundry configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Gemini upstream configuration (text, image, cloud speech)
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// Local Edge TTS configuration
    #[serde(default)]
    pub tts: EdgeTtsConfig,
    /// Weather passthrough configuration
    #[serde(default)]
    pub weather: WeatherConfig,
}

impl Config {
    /// Build a configuration directly from the process environment
    ///
    /// Credentials come from `GEMINI_API_KEY`, `GOOGLE_TTS_API_KEY`, and
    /// `OPENWEATHERMAP_API_KEY`; everything else takes its default. Keys
    /// are read exactly once here and are immutable afterwards.
    pub fn from_env() -> Self {
        Self {
            gemini: GeminiConfig {
                api_key: env_secret("GEMINI_API_KEY"),
                tts_api_key: env_secret("GOOGLE_TTS_API_KEY"),
                ..GeminiConfig::default()
            },
            weather: WeatherConfig {
                api_key: env_secret("OPENWEATHERMAP_API_KEY"),
                ..WeatherConfig::default()
            },
            ..Self::default()
        }
    }
}

/// Read an environment variable as a secret, treating empty as unset
fn env_secret(name: &str) -> Option<SecretString> {
    std::env::var(name).ok().filter(|value| !value.is_empty()).map(SecretString::from)
}
