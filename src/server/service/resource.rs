//! Live resource usage reads for mirrored servers.
//!
//! Usage is never stored. Each read carries its own timeout and a failed read is
//! replaced with a zeroed, `available: false` reading so one unreachable server
//! cannot fail a batch.

use std::time::Duration;

use futures_util::stream::{self, StreamExt};

use crate::server::{
    error::AppError,
    model::{pterodactyl::ServerResources, resource::ServerUsage, server::Server},
    panel::{validate_identifier, PanelApi},
};

pub struct ResourcePoller<'a> {
    panel: &'a dyn PanelApi,
    concurrency: usize,
    timeout: Duration,
}

impl<'a> ResourcePoller<'a> {
    /// # Arguments
    /// - `concurrency` - Maximum reads in flight during `poll`, at least 1
    /// - `timeout` - Budget for each individual read
    pub fn new(panel: &'a dyn PanelApi, concurrency: usize, timeout: Duration) -> Self {
        Self {
            panel,
            concurrency: concurrency.max(1),
            timeout,
        }
    }

    /// Reads usage for one server, substituting a zeroed reading on any failure.
    pub async fn read(&self, identifier: &str) -> ServerResources {
        match tokio::time::timeout(self.timeout, self.panel.get_server_resources(identifier)).await
        {
            Ok(Ok(resources)) => resources,
            Ok(Err(e)) => {
                tracing::warn!("Failed to fetch resources for server {}: {}", identifier, e);
                ServerResources::unavailable()
            }
            Err(_) => {
                tracing::warn!(
                    "Timed out after {:?} fetching resources for server {}",
                    self.timeout,
                    identifier
                );
                ServerResources::unavailable()
            }
        }
    }

    /// Reads usage for a caller-supplied identifier.
    ///
    /// # Returns
    /// - `Ok(ServerResources)` - Live reading, or the zeroed reading when the panel failed
    /// - `Err(AppError::PanelErr(InvalidRequest))` - Identifier is not a valid server handle
    pub async fn read_checked(&self, identifier: &str) -> Result<ServerResources, AppError> {
        validate_identifier(identifier)?;

        Ok(self.read(identifier).await)
    }

    /// Reads usage for every server with bounded concurrency, preserving input order.
    pub async fn poll(&self, servers: Vec<Server>) -> Vec<ServerUsage> {
        stream::iter(servers)
            .map(|server| async move {
                let resources = self.read(&server.identifier).await;
                ServerUsage { server, resources }
            })
            .buffered(self.concurrency)
            .collect()
            .await
    }
}
