use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Upper bound on how much of a rejected upstream body is kept
const MAX_REJECTED_BODY_BYTES: usize = 512;

/// Gateway error taxonomy with fixed HTTP status mapping
///
/// Every failure in the request path is converted into one of these
/// variants before it reaches the transport layer; handlers never let a
/// parsing failure or upstream fault escape unformatted.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The credential required for the requested operation is not configured
    #[error("{provider} API key not configured")]
    MissingCredential {
        /// Human-readable provider label (e.g. "Gemini")
        provider: &'static str,
    },

    /// The inbound request is missing a required field or is malformed
    #[error("{0}")]
    InvalidInput(String),

    /// The outbound call failed before an HTTP status was obtained
    #[error("upstream request failed: {0}")]
    UpstreamTransport(String),

    /// The upstream returned a non-success status
    #[error("upstream rejected request ({status}): {body}")]
    UpstreamRejected {
        /// Upstream HTTP status code
        status: u16,
        /// Truncated upstream response body
        body: String,
    },

    /// The upstream response did not have the documented structure
    #[error("unexpected response shape: missing `{0}`")]
    UnexpectedEnvelopeShape(String),
}

impl GatewayError {
    /// Build an `UpstreamRejected` error, truncating the body to a bounded
    /// prefix on a character boundary
    pub fn rejected(status: u16, body: &str) -> Self {
        let truncated = match body.char_indices().nth(MAX_REJECTED_BODY_BYTES) {
            Some((idx, _)) => &body[..idx],
            None => body,
        };

        Self::UpstreamRejected {
            status,
            body: truncated.to_owned(),
        }
    }

    /// HTTP status the gateway responds with for this error
    ///
    /// `UpstreamRejected` propagates the upstream's own status where it is
    /// representable, falling back to 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::UpstreamRejected { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::MissingCredential { .. } | Self::UpstreamTransport(_) | Self::UnexpectedEnvelopeShape(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to expose to API consumers
    ///
    /// Credentials never appear here: transport details are stripped of
    /// URLs before construction and rejected bodies come from the upstream.
    pub fn client_message(&self) -> String {
        self.to_string()
    }
}

/// Uniform error body emitted for every failure
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.client_message(),
        };

        (status, Json(body)).into_response()
    }
}
