//! UltraVM Test Utils
//!
//! Provides shared testing utilities for the panel sync service. This crate offers a
//! builder for test contexts backed by in-memory SQLite databases, factories for the
//! mirrored tables, and JSON payload builders shaped like Pterodactyl API responses.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Row factories with sensible defaults
//! - **pterodactyl**: Panel API response bodies for mock servers
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_sync_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_sync_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod pterodactyl;
