use std::path::PathBuf;

use serde::Deserialize;

/// Local Edge TTS configuration
///
/// Rate, pitch, and volume use the engine's signed offset notation
/// (`+10%`, `-2Hz`).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeTtsConfig {
    /// Default voice when the request does not name one
    #[serde(default = "default_voice")]
    pub voice: String,
    /// Default speaking rate offset
    #[serde(default = "default_rate")]
    pub rate: String,
    /// Default pitch offset
    #[serde(default = "default_pitch")]
    pub pitch: String,
    /// Default volume offset
    #[serde(default = "default_volume")]
    pub volume: String,
    /// Directory for transient synthesis files (defaults to the OS temp dir)
    #[serde(default)]
    pub scratch_dir: Option<PathBuf>,
}

impl Default for EdgeTtsConfig {
    fn default() -> Self {
        Self {
            voice: default_voice(),
            rate: default_rate(),
            pitch: default_pitch(),
            volume: default_volume(),
            scratch_dir: None,
        }
    }
}

fn default_voice() -> String {
    "en-US-GuyNeural".to_owned()
}

fn default_rate() -> String {
    "+0%".to_owned()
}

fn default_pitch() -> String {
    "+0Hz".to_owned()
}

fn default_volume() -> String {
    "+0%".to_owned()
}
