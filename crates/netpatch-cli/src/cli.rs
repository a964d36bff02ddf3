//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// netpatch - patch the generated runner module of a container image
#[derive(Parser, Debug)]
#[command(name = "netpatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run (no command applies the patch to the built-in target)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Apply the current patch revision to the target
    ///
    /// Inserts the network-resolution patch functions before the anchor
    /// definition and their call lines after the anchor call. A target
    /// already carrying the current revision is left untouched; one
    /// carrying an older revision is upgraded in place.
    ///
    /// Examples:
    ///   netpatch                       # patch the built-in target path
    ///   netpatch apply ./runner.py     # patch an explicit file
    ///   netpatch apply --dry-run       # preview without writing
    Apply {
        /// Target file (defaults to the container's runner module)
        target: Option<PathBuf>,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Report the detected patch state of the target
    Status {
        /// Target file (defaults to the container's runner module)
        target: Option<PathBuf>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Remove whichever patch revision is present
    Revert {
        /// Target file (defaults to the container's runner module)
        target: Option<PathBuf>,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },
}
