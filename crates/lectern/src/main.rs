//! Lectern CLI - navigation tree engine.
//!
//! Provides commands for:
//! - `tree`: Print the navigation tree
//! - `check`: Report ordering document problems
//! - `active`: Show the active node and ancestors for a route

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ActiveArgs, CheckArgs, TreeArgs};
use output::Output;

/// Lectern - navigation tree engine for markdown content sites.
#[derive(Parser)]
#[command(name = "lectern", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the navigation tree.
    Tree(TreeArgs),
    /// Check the ordering document against the content directory.
    Check(CheckArgs),
    /// Show the active node and its ancestors for a route.
    Active(ActiveArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Tree(args) => args.source.verbose,
            Self::Check(args) => args.source.verbose,
            Self::Active(args) => args.source.verbose,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Tree(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Active(args) => args.execute(),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            output.error(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}
