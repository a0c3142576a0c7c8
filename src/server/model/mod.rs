//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Panel records are validated into
//! the types in `pterodactyl` by the panel client before anything else sees them.

pub mod identity;
pub mod profile;
pub mod pterodactyl;
pub mod resource;
pub mod server;
pub mod sync;
