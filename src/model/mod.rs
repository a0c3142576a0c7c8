//! API data transfer objects.
//!
//! These types define the JSON contract between the HTTP surface and its consumers
//! (the storefront UI and admin dashboard). Domain models in `server::model` are
//! converted into these at the controller boundary.

pub mod api;
pub mod panel;
pub mod register;
pub mod server;
pub mod sync;
