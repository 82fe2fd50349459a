#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Data-API passthrough: single-field parameter forwarding, no shape
//! translation. The only adaptation is credential injection.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    body::Body,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
};
use foundry_core::{GatewayError, Operation, Result};
use http::StatusCode;
use secrecy::{ExposeSecret, SecretString};

type QueryPairs = Vec<(String, String)>;

/// Gateway state for the data-API passthrough
pub struct Server {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<SecretString>,
    timeout: Duration,
}

impl Server {
    pub fn from_config(config: &foundry_config::WeatherConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    /// Forward the query to the weather upstream, appending the credential
    ///
    /// The upstream body and status come back verbatim; the caller sees
    /// the third party's own JSON.
    async fn forward(&self, params: &[(String, String)]) -> Result<Response> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(GatewayError::MissingCredential { provider: "OpenWeatherMap" })?;

        tracing::debug!(operation = %Operation::WeatherLookup, "forwarding passthrough request");

        let response = self
            .client
            .get(&self.endpoint)
            .timeout(self.timeout)
            .query(params)
            .query(&[("appid", api_key.expose_secret())])
            .send()
            .await
            .map_err(map_transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport)?;

        Ok(Response::builder()
            .status(status)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response()))
    }
}

/// Build the passthrough state from configuration
pub fn build_server(config: &foundry_config::Config) -> Arc<Server> {
    Arc::new(Server::from_config(&config.weather))
}

/// Create the endpoint router for the data-API passthrough
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/proxy/{api_name}", get(proxy_lookup))
}

/// Handle passthrough lookups
async fn proxy_lookup(
    State(server): State<Arc<Server>>,
    Path(api_name): Path<String>,
    Query(params): Query<QueryPairs>,
) -> Response {
    if api_name != "openweathermap" {
        return (StatusCode::NOT_FOUND, Json(serde_json::json!({"error": "Unknown API"}))).into_response();
    }

    match server.forward(&params).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// The appended `appid` lives in the query string; strip URLs from
/// transport errors so it cannot leak
fn map_transport(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::UpstreamTransport("timeout".to_owned())
    } else {
        GatewayError::UpstreamTransport(err.without_url().to_string())
    }
}
