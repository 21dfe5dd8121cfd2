// crates/jotter-cli/src/main.rs - CLI entry point
//
// Parses arguments, wires up logging, resolves the application context, and
// dispatches to one command handler. Handlers never touch globals; everything
// they need rides in the Context.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod context;
mod prompt;
mod services;

use cli::{Cli, Commands};
use context::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = Context::new(&cli)?;

    match cli.command {
        Commands::Create { name, content } => commands::create::handle(&ctx, name, content),
        Commands::List { json, paths } => commands::list::handle(&ctx, json, paths),
        Commands::View { name } => commands::view::handle(&ctx, name),
        Commands::Delete { name } => commands::delete::handle(&ctx, name),
        Commands::Edit { name } => commands::edit::handle(&ctx, name),
        Commands::Search { query } => commands::search::handle(&ctx, query),
    }
}

/// Logging goes to stderr so stdout stays reserved for listings and note
/// content. `RUST_LOG` overrides the level picked by `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
