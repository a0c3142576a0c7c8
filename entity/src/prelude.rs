pub use super::auth_identity::Entity as AuthIdentity;
pub use super::pterodactyl_config::Entity as PterodactylConfig;
pub use super::server::Entity as Server;
pub use super::sync_log::Entity as SyncLog;
pub use super::user_profile::Entity as UserProfile;
