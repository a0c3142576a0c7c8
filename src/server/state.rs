//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Panel client used by sync, registration and resource reads
//! - Identity provider used to provision logins for panel-only users
//! - Sync and resource polling settings

use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    panel::PanelApi,
    service::{identity::IdentityProvider, resource::ResourcePoller, sync::SyncService},
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and the
/// panel and identity seams are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Pterodactyl panel API.
    pub panel: Arc<dyn PanelApi>,

    /// Provisioning of local logins for panel users without one.
    pub identity: Arc<dyn IdentityProvider>,

    /// How long a sync run may hold the run lease before it is considered abandoned.
    pub sync_lease_ttl: Duration,

    pub resource_poll_concurrency: usize,
    pub resource_poll_timeout: Duration,
}

impl AppState {
    /// Creates the application state with sync and polling settings from `config`.
    pub fn new(
        db: DatabaseConnection,
        panel: Arc<dyn PanelApi>,
        identity: Arc<dyn IdentityProvider>,
        config: &Config,
    ) -> Self {
        Self {
            db,
            panel,
            identity,
            sync_lease_ttl: config.sync_lease_ttl,
            resource_poll_concurrency: config.resource_poll_concurrency,
            resource_poll_timeout: config.resource_poll_timeout,
        }
    }

    pub fn sync_service(&self) -> SyncService<'_> {
        SyncService::new(
            &self.db,
            self.panel.as_ref(),
            self.identity.as_ref(),
            self.sync_lease_ttl,
        )
    }

    pub fn resource_poller(&self) -> ResourcePoller<'_> {
        ResourcePoller::new(
            self.panel.as_ref(),
            self.resource_poll_concurrency,
            self.resource_poll_timeout,
        )
    }
}
