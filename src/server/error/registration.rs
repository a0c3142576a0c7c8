use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::panel::PanelError};

#[derive(Error, Debug)]
pub enum RegistrationError {
    /// Required signup fields are missing or unusable.
    ///
    /// Raised before any panel call. Results in 400 Bad Request.
    #[error("{0}")]
    InvalidInput(String),

    /// The panel refused or failed to create the account.
    ///
    /// Results in 500 with the panel's error payload as details. No local state
    /// is written.
    #[error("Failed to create panel user: {0}")]
    RemoteCreateFailed(#[source] PanelError),
}

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidInput(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::RemoteCreateFailed(err) => {
                tracing::error!("Registration error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::with_details("Registration failed", err.details())),
                )
                    .into_response()
            }
        }
    }
}
