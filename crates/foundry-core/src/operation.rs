/// Logical capability requested by the caller
///
/// Chosen by the inbound route; immutable for the life of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Gemini text generation
    TextGeneration,
    /// Gemini image generation
    ImageGeneration,
    /// Gemini hosted speech synthesis
    CloudSpeechSynthesis,
    /// Edge neural voice synthesis on the local engine
    LocalSpeechSynthesis,
    /// Data-API passthrough lookup
    WeatherLookup,
}

impl Operation {
    /// Short name used in logs
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TextGeneration => "text_generation",
            Self::ImageGeneration => "image_generation",
            Self::CloudSpeechSynthesis => "cloud_speech_synthesis",
            Self::LocalSpeechSynthesis => "local_speech_synthesis",
            Self::WeatherLookup => "weather_lookup",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
