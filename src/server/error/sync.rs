use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::panel::PanelError};

#[derive(Error, Debug)]
pub enum SyncError {
    /// Another run holds the sync lease.
    ///
    /// Results in 409 Conflict. Nothing is fetched or written.
    #[error("A synchronization run is already in progress")]
    AlreadyRunning,

    /// The remote user or server collection could not be fetched.
    ///
    /// Fatal for the whole run. Results in 500 with the panel's payload as details.
    #[error("Failed to fetch panel collections: {0}")]
    FetchFailed(#[source] PanelError),

    /// A remote server's owner has no linked local profile.
    ///
    /// Per-entity failure: recorded in the sync log, never returned over HTTP.
    #[error("No local profile is linked to panel user {owner_remote_id} (owner of server {server_remote_id})")]
    OwnerNotFound {
        /// Panel id of the skipped server
        server_remote_id: i64,
        /// Panel id of the server's owner
        owner_remote_id: i64,
    },

    /// The profile matched by email is already linked to a different panel user.
    ///
    /// Per-entity failure: the existing link is kept and the remote user is skipped.
    #[error("Profile {email} is already linked to panel user {linked_remote_id}, not {remote_id}")]
    ProfileLinkConflict {
        /// Email of the matched profile
        email: String,
        /// Panel id currently stored on the profile
        linked_remote_id: i64,
        /// Panel id of the remote user being synced
        remote_id: i64,
    },

    /// A list item was rejected at the panel client boundary.
    #[error("Rejected panel record: {0}")]
    RejectedRecord(String),
}

/// Converts sync errors into HTTP responses.
///
/// # Returns
/// - 409 Conflict - For `AlreadyRunning`
/// - 500 Internal Server Error - `{error: "Synchronization failed", details}` otherwise
impl IntoResponse for SyncError {
    fn into_response(self) -> Response {
        match self {
            Self::AlreadyRunning => (
                StatusCode::CONFLICT,
                Json(ErrorDto::new(
                    "Synchronization is already in progress, please try again later.",
                )),
            )
                .into_response(),
            Self::FetchFailed(err) => {
                tracing::error!("Sync error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::with_details(
                        "Synchronization failed",
                        err.details(),
                    )),
                )
                    .into_response()
            }
            err => {
                tracing::error!("Sync error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::with_details(
                        "Synchronization failed",
                        serde_json::Value::String(err.to_string()),
                    )),
                )
                    .into_response()
            }
        }
    }
}
