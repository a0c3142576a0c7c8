//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Reconciliation**: Bringing local profiles and servers into line with the panel
//! - **Orchestration**: Coordinating repository calls with panel requests
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod identity;
pub mod registration;
pub mod resource;
pub mod server;
pub mod sync;
