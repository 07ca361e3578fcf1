//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

/// Gympoint - gym management API
#[derive(Parser, Debug)]
#[command(name = "gympoint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Manage staff accounts
    Users(UsersArgs),
}

/// Arguments for the serve command. Unset values fall back to the
/// SERVER_HOST and SERVER_PORT settings.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(Args, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

#[derive(Args, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub action: UsersAction,
}

#[derive(Subcommand, Debug)]
pub enum UsersAction {
    /// Create a staff account
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// At least 6 characters
        #[arg(long, env = "GYMPOINT_USER_PASSWORD", hide_env_values = true)]
        password: String,
        /// Grant access to the management routes
        #[arg(long)]
        admin: bool,
    },
}
