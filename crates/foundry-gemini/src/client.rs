use std::{sync::OnceLock, time::Duration};

use foundry_core::{GatewayError, Result};
use http::StatusCode;
use reqwest::Client;
use serde::Serialize;

/// Common HTTP client to reuse connections across Gemini operations
fn http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            Client::builder()
                .pool_idle_timeout(Some(Duration::from_secs(5)))
                .tcp_nodelay(true)
                .tcp_keepalive(Some(Duration::from_secs(60)))
                .build()
                .expect("Failed to build default HTTP client")
        })
        .clone()
}

/// Single-attempt outbound caller with a mandatory finite timeout
///
/// No retry at this layer; callers own retry policy.
pub(crate) struct UpstreamClient {
    client: Client,
    timeout: Duration,
}

impl UpstreamClient {
    pub(crate) fn new(timeout: Duration) -> Self {
        Self {
            client: http_client(),
            timeout,
        }
    }

    /// POST a JSON payload and return the raw status and body
    ///
    /// Transport failures (including the elapsed timeout) surface as
    /// `UpstreamTransport`; any received HTTP status is returned as data.
    pub(crate) async fn post_json<T: Serialize + Sync>(&self, url: &str, payload: &T) -> Result<(StatusCode, Vec<u8>)> {
        let response = self
            .client
            .post(url)
            .timeout(self.timeout)
            .json(payload)
            .send()
            .await
            .map_err(map_transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport)?;

        Ok((status, body.to_vec()))
    }
}

/// Strip the URL before stringifying: the request URL carries the
/// credential as a query parameter and must never reach a message or log
fn map_transport(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::UpstreamTransport("timeout".to_owned())
    } else {
        GatewayError::UpstreamTransport(err.without_url().to_string())
    }
}
