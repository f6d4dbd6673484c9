//! Clap argument types.

use clap::Parser;

use roster::models::UserId;
use roster::output::OutputFormat;

/// Terminal client for a user directory served over REST.
#[derive(Parser, Debug)]
#[command(name = "roster", version = roster::constants::VERSION)]
pub struct Cli {
    /// Backend base URL (overrides config and environment).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format for the user table.
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Request timeout in seconds.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Open the interactive session.
    Shell,

    /// Fetch and print the user list.
    List,

    /// Create a new user.
    Add(AddArgs),

    /// Replace an existing user's name and email.
    Update(UpdateArgs),

    /// Delete a user.
    Remove {
        /// Identifier of the user to delete.
        id: UserId,
    },

    /// Print version information.
    Version,
}

/// Arguments for the `add` subcommand.
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Name of the new user.
    #[arg(long)]
    pub name: String,

    /// Email of the new user.
    #[arg(long)]
    pub email: String,
}

/// Arguments for the `update` subcommand.
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Identifier of the user to update.
    pub id: UserId,

    /// New name.
    #[arg(long)]
    pub name: String,

    /// New email.
    #[arg(long)]
    pub email: String,
}
