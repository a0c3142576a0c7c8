//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. `AppError` is the top-level
//! error type; domain errors (`PanelError`, `SyncError`, `RegistrationError`) carry
//! their own status mapping and are delegated to.

pub mod config;
pub mod identity;
pub mod internal;
pub mod panel;
pub mod registration;
pub mod sync;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, identity::IdentityError, internal::InternalError, panel::PanelError,
        registration::RegistrationError, sync::SyncError,
    },
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. Domain-specific errors handle
/// their own response mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Panel API failure.
    ///
    /// Delegates to `PanelError::into_response()` (404 passthrough, 500 otherwise).
    #[error(transparent)]
    PanelErr(#[from] PanelError),

    /// Reconciliation error.
    ///
    /// Delegates to `SyncError::into_response()` (409 while a run is in flight).
    #[error(transparent)]
    SyncErr(#[from] SyncError),

    /// Signup bridge error.
    ///
    /// Delegates to `RegistrationError::into_response()`.
    #[error(transparent)]
    RegistrationErr(#[from] RegistrationError),

    /// Local identity provisioning error.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    IdentityErr(#[from] IdentityError),

    /// Internal consistency error, see `InternalError`.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Cron scheduler error.
    ///
    /// Results in 500 Internal Server Error when scheduled job operations fail.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - Variable - For `PanelErr`, `SyncErr` and `RegistrationErr`, delegated to the domain error
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::PanelErr(err) => err.into_response(),
            Self::SyncErr(err) => err.into_response(),
            Self::RegistrationErr(err) => err.into_response(),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("Internal server error")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" body so
/// implementation details stay server-side.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
