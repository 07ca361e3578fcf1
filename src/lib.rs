//! Gympoint - gym management REST API
//!
//! Administrators manage students, subscription plans and the enrollments
//! that sign students up to plans. Enrollment end dates and prices are
//! computed from the plan.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and pricing rules
//! - **validation**: Declarative payload validation
//! - **services**: Application use cases
//! - **infra**: Database, migrations and repositories
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared types (pagination)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Provision an administrator
//! cargo run -- users create --name Admin --email admin@gympoint.com --password 123456 --admin
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;
pub mod validation;

pub use api::AppState;
pub use config::Config;
pub use errors::{AppError, AppResult};
