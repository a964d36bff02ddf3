//! netpatch CLI
//!
//! Build-time patcher for the generated runner module of a container
//! image. Invoked with no arguments it patches the built-in target path,
//! matching how the image build step calls it.

mod cli;
mod commands;
mod error;

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::DEFAULT_TARGET;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        // Flagless build-step invocation: apply to the built-in target.
        None => commands::run_apply(Path::new(DEFAULT_TARGET), false),
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Apply { target, dry_run } => {
            commands::run_apply(&resolve_target(target), dry_run)
        }
        Commands::Status { target, json } => commands::run_status(&resolve_target(target), json),
        Commands::Revert { target, dry_run } => {
            commands::run_revert(&resolve_target(target), dry_run)
        }
    }
}

fn resolve_target(target: Option<PathBuf>) -> PathBuf {
    target.unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET))
}
