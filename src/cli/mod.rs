//! CLI module - Command-line interface for the application.
//!
//! - `serve` - Start the HTTP server
//! - `migrate` - Database migrations
//! - `users` - Staff account provisioning

pub mod args;

pub use args::{Cli, Commands};
