use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{AuthIdentity, UserProfile};
///
/// let test = TestBuilder::new()
///     .with_table(AuthIdentity)
///     .with_table(UserProfile)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the identity and profile tables in dependency order.
    pub fn with_profile_tables(self) -> Self {
        self.with_table(AuthIdentity).with_table(UserProfile)
    }

    /// Adds every table touched by a full sync run.
    ///
    /// Includes:
    /// - AuthIdentity
    /// - UserProfile
    /// - Server
    /// - SyncLog
    /// - PterodactylConfig
    pub fn with_sync_tables(self) -> Self {
        self.with_profile_tables()
            .with_table(Server)
            .with_table(SyncLog)
            .with_table(PterodactylConfig)
    }

    /// Builds the test context and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
