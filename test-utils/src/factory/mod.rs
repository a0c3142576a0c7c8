//! Factory methods for creating test data.
//!
//! Each table has a factory module with a `Factory` builder for customization and a
//! `create_*` convenience function for quick default creation. Factories insert any
//! rows their foreign keys require (a profile factory inserts the owning identity).
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let profile = factory::user_profile::ProfileFactory::new(&db)
//!     .email("a@x.com")
//!     .pterodactyl_id(7)
//!     .build()
//!     .await?;
//! let server = factory::create_server(&db, profile.id).await?;
//! ```

pub mod helpers;
pub mod pterodactyl_config;
pub mod server;
pub mod sync_log;
pub mod user_profile;

pub use pterodactyl_config::create_config;
pub use server::create_server;
pub use sync_log::create_sync_log;
pub use user_profile::create_profile;
