//! Server-side API backend and business logic.
//!
//! This module contains the backend that keeps the local user and server mirror in
//! line with the Pterodactyl panel. It uses Axum as the web framework, SeaORM for
//! database operations and reqwest for panel API calls.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Reconciliation, registration and resource polling
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Panel** (`panel/`) - Pterodactyl API client and record validation
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, panel client, identity provider)
//! - **Startup** (`startup`) - Database connection, migrations and panel client setup
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Scheduler** (`scheduler/`) - Cron job for the scheduled sync
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** converts DTOs to params, calls service
//! 3. **Service** executes business logic against the panel and the data layer
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod panel;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
