//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use foundry_config::Config;
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: foundry_config::ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    ..foundry_config::ServerConfig::default()
                },
                ..Config::default()
            },
        }
    }

    /// Point the Gemini operations at a mock backend with a test key
    pub fn with_gemini(self, base_url: &str) -> Self {
        self.with_gemini_keyed(base_url, Some("test-key"))
    }

    /// Point the Gemini operations at a mock backend without any key
    pub fn with_gemini_unkeyed(self, base_url: &str) -> Self {
        self.with_gemini_keyed(base_url, None)
    }

    fn with_gemini_keyed(mut self, base_url: &str, api_key: Option<&str>) -> Self {
        self.config.gemini.base_url = base_url.to_owned();
        self.config.gemini.api_key = api_key.map(SecretString::from);
        self
    }

    /// Set a dedicated cloud speech key
    pub fn with_tts_key(mut self, api_key: &str) -> Self {
        self.config.gemini.tts_api_key = Some(SecretString::from(api_key));
        self
    }

    /// Point the weather passthrough at a mock backend with a test key
    pub fn with_weather(mut self, endpoint: &str) -> Self {
        self.config.weather.endpoint = endpoint.to_owned();
        self.config.weather.api_key = Some(SecretString::from("owm-key"));
        self
    }

    /// Point the weather passthrough at a mock backend without any key
    pub fn with_weather_unkeyed(mut self, endpoint: &str) -> Self {
        self.config.weather.endpoint = endpoint.to_owned();
        self.config.weather.api_key = None;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
