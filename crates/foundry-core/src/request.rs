use axum::body::Body;
use serde::de::DeserializeOwned;

use crate::error::GatewayError;

/// Body limit for JSON endpoints (1 MiB)
const BODY_LIMIT_BYTES: usize = 1 << 20;

/// JSON body extractor that fails with the uniform error envelope
///
/// Unlike `axum::Json`, a malformed body or wrong content type surfaces as
/// a `GatewayError` and therefore as a 400 `{"error": ...}` response
/// instead of a framework-shaped rejection.
pub struct GatewayJson<T>(pub T);

impl<S, T: DeserializeOwned> axum::extract::FromRequest<S> for GatewayJson<T>
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request(request: http::Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = request.into_parts();

        let is_json = parts
            .headers
            .get(http::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.trim_start().starts_with("application/json"));

        if !is_json {
            return Err(GatewayError::InvalidInput(
                "expected 'Content-Type: application/json'".to_owned(),
            ));
        }

        let bytes = axum::body::to_bytes(body, BODY_LIMIT_BYTES).await.map_err(|err| {
            if std::error::Error::source(&err).is_some_and(|source| source.is::<http_body_util::LengthLimitError>()) {
                GatewayError::InvalidInput(format!("request body is too large, limit is {BODY_LIMIT_BYTES} bytes"))
            } else {
                GatewayError::InvalidInput(format!("failed to read request body: {err}"))
            }
        })?;

        let value =
            serde_json::from_slice::<T>(&bytes).map_err(|e| GatewayError::InvalidInput(format!("invalid JSON body: {e}")))?;

        Ok(Self(value))
    }
}
