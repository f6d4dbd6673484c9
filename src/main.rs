//! roster — terminal client for a user directory served over REST.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::process;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::args::{AddArgs, Cli, Command, UpdateArgs};
use roster::api::UserStore;
use roster::api::rest::RestStore;
use roster::config::Config;
use roster::constants;
use roster::env::Env;
use roster::models::UserId;
use roster::output::OutputFormat;
use roster::session::Session;
use roster::shell;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    init_tracing();

    let Cli {
        api_url,
        format,
        timeout,
        command,
    } = Cli::parse();

    if let Command::Version = command {
        return run_version();
    }

    // Load config with layering; CLI flags are the final override.
    let cwd = std::env::current_dir().ok();
    let config =
        Config::load(cwd.as_deref(), &Env::real()).context("failed to load configuration")?;

    let base_url = api_url.unwrap_or(config.api.base_url);
    let timeout = Duration::from_secs(timeout.unwrap_or(config.api.timeout_secs));
    let format = format.unwrap_or(config.output.format);

    let store: Arc<dyn UserStore> = Arc::new(
        RestStore::new(base_url.as_str(), timeout)
            .with_context(|| format!("failed to set up client for {base_url}"))?,
    );
    let mut session = Session::new(store);

    match command {
        Command::Shell => run_shell(&mut session).await,
        Command::List => run_list(&mut session, format).await,
        Command::Add(args) => run_add(&mut session, args, format).await,
        Command::Update(args) => run_update(&mut session, args, format).await,
        Command::Remove { id } => run_remove(&mut session, id, format).await,
        Command::Version => unreachable!("handled above"),
    }
}

/// Print version information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    Ok(())
}

/// Open the interactive session.
async fn run_shell(session: &mut Session) -> Result<()> {
    cli::print_header();
    shell::run(session)
        .await
        .context("interactive session failed")
}

/// Fetch and render the user list once.
async fn run_list(session: &mut Session, format: OutputFormat) -> Result<()> {
    session.load().await;
    print!("{}", format.render(session.users()));
    Ok(())
}

/// Create-path submit with the given fields, then render the refreshed list.
async fn run_add(session: &mut Session, args: AddArgs, format: OutputFormat) -> Result<()> {
    session.set_name(args.name);
    session.set_email(args.email);
    session.submit().await;
    print!("{}", format.render(session.users()));
    Ok(())
}

/// Update-path submit against an existing row, then render the refreshed list.
async fn run_update(session: &mut Session, args: UpdateArgs, format: OutputFormat) -> Result<()> {
    session.load().await;
    session.begin_edit(args.id);
    if !session.mode().is_editing() {
        anyhow::bail!("no user {} in the current list", args.id);
    }
    session.set_name(args.name);
    session.set_email(args.email);
    session.submit().await;
    print!("{}", format.render(session.users()));
    Ok(())
}

/// Delete a row and render the locally updated list.
async fn run_remove(session: &mut Session, id: UserId, format: OutputFormat) -> Result<()> {
    session.load().await;
    session.delete(id).await;
    print!("{}", format.render(session.users()));
    Ok(())
}

/// Diagnostic stream: stderr, filtered by `RUST_LOG` when set.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,roster=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
