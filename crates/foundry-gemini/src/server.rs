use std::time::Duration;

use foundry_config::GeminiConfig;
use foundry_core::{Operation, Result};

use crate::{
    client::UpstreamClient,
    envelope::{self, Normalized},
    protocol,
    registry::Registry,
};

/// Gateway state for the Gemini-backed operations
///
/// Immutable after construction; shared across requests behind an `Arc`.
pub struct Server {
    registry: Registry,
    client: UpstreamClient,
}

impl Server {
    pub fn from_config(config: &GeminiConfig) -> Self {
        Self {
            registry: Registry::from_config(config),
            client: UpstreamClient::new(Duration::from_secs(config.timeout_seconds)),
        }
    }

    /// Run one operation end to end
    ///
    /// Order matters: input validation precedes credential resolution,
    /// and a missing credential returns before any outbound call.
    pub async fn execute(&self, operation: Operation, model_override: Option<&str>, input: &str) -> Result<Normalized> {
        let payload = protocol::request_for(operation, input)?;
        let binding = self.registry.resolve(operation, model_override)?;

        tracing::debug!(%operation, model = %binding.model, "dispatching upstream request");

        let (status, body) = self.client.post_json(&binding.request_url(), &payload).await?;

        tracing::debug!(%operation, status = %status, "upstream responded");

        envelope::extract(operation, status, &body)
    }
}
