use secrecy::SecretString;
use serde::Deserialize;

/// Weather passthrough configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key, appended as the `appid` query parameter
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Upstream endpoint override, mainly for tests
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Upstream request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

fn default_endpoint() -> String {
    "https://api.openweathermap.org/data/2.5/weather".to_owned()
}

const fn default_timeout_seconds() -> u64 {
    30
}
