//! HTTP request handlers.
//!
//! Controllers convert DTOs into domain parameters, call the service layer and
//! convert the results back into DTOs. Each handler carries a `utoipa::path`
//! annotation that feeds the generated OpenAPI document.

pub mod panel;
pub mod register;
pub mod server;
pub mod sync;
