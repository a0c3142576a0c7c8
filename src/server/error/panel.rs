use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised while talking to the Pterodactyl panel API.
#[derive(Error, Debug)]
pub enum PanelError {
    /// Transport failure, timeout, or undecodable success body.
    #[error("Panel request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The panel answered with a non-2xx status.
    ///
    /// `body` holds the panel's raw error payload, parsed as JSON when possible and
    /// kept as a JSON string otherwise.
    #[error("Panel returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code returned by the panel
        status: u16,
        /// Raw error payload
        body: Value,
    },

    /// A single record did not match the expected shape.
    #[error("Malformed panel {entity}: {reason}")]
    Malformed {
        /// Kind of record being decoded ("user", "server", "resources")
        entity: &'static str,
        /// Validation or decoding failure
        reason: String,
    },

    /// The request could not be built from the given input.
    #[error("Invalid panel request: {0}")]
    InvalidRequest(String),
}

impl PanelError {
    /// Payload attached to HTTP error responses.
    ///
    /// Status errors surface the panel's own body; everything else surfaces the
    /// error message.
    pub fn details(&self) -> Value {
        match self {
            Self::Status { body, .. } => body.clone(),
            other => Value::String(other.to_string()),
        }
    }

    /// Whether the panel reported the requested record as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

/// Converts panel errors from passthrough reads into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `InvalidRequest`
/// - 404 Not Found - When the panel itself answered 404
/// - 500 Internal Server Error - For all other failures, with the panel payload as details
impl IntoResponse for PanelError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            err if err.is_not_found() => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto::with_details("Panel record not found", err.details())),
            )
                .into_response(),
            err => {
                tracing::error!("Panel request error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::with_details("Panel request failed", err.details())),
                )
                    .into_response()
            }
        }
    }
}
