//! Pterodactyl panel API client.
//!
//! `PanelApi` is the seam the reconciler, registration bridge and resource poller
//! depend on; `PterodactylClient` is the HTTP implementation. Responses are
//! validated into the typed records in `server::model::pterodactyl` here, so
//! malformed panel data never reaches the callers.

pub mod client;
mod wire;

use async_trait::async_trait;

use crate::server::{
    error::panel::PanelError,
    model::pterodactyl::{
        CreateRemoteUserParam, RemoteCollection, RemoteServer, RemoteUser, ServerResources,
    },
};

pub use client::PterodactylClient;

#[async_trait]
pub trait PanelApi: Send + Sync {
    /// Fetches every panel user, following pagination to the last page.
    async fn list_users(&self) -> Result<RemoteCollection<RemoteUser>, PanelError>;

    /// Fetches every panel server, following pagination to the last page.
    async fn list_servers(&self) -> Result<RemoteCollection<RemoteServer>, PanelError>;

    async fn create_user(&self, param: CreateRemoteUserParam) -> Result<RemoteUser, PanelError>;

    async fn get_user(&self, remote_id: i64) -> Result<RemoteUser, PanelError>;

    async fn get_server(&self, remote_id: i64) -> Result<RemoteServer, PanelError>;

    /// Fetches live usage for a server by its short identifier.
    async fn get_server_resources(&self, identifier: &str) -> Result<ServerResources, PanelError>;
}

/// Checks that a server identifier is a short alphanumeric handle.
///
/// Anything else could address arbitrary client API paths once interpolated into
/// the resources URL.
///
/// # Returns
/// - `Ok(())` - Identifier is non-empty and only ASCII alphanumerics or `-`
/// - `Err(PanelError::InvalidRequest)` - Identifier is empty or contains other characters
pub fn validate_identifier(identifier: &str) -> Result<(), PanelError> {
    let valid = !identifier.is_empty()
        && identifier
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(PanelError::InvalidRequest(format!(
            "Invalid server identifier: {}",
            identifier
        )))
    }
}
