//! Apply command implementation

use std::path::Path;

use colored::Colorize;

use netpatch_core::{ApplyOutcome, apply, current};

use crate::error::Result;

/// Run the apply command
///
/// Reads the target, applies the current revision, and writes the result
/// back atomically. A no-op (already current) and a dry run both leave the
/// file untouched.
pub fn run_apply(target: &Path, dry_run: bool) -> Result<()> {
    let content = netpatch_fs::read_text(target)?;
    let (patched, outcome) = apply(&content)?;

    match outcome {
        ApplyOutcome::AlreadyCurrent => {
            println!(
                "{} Already patched (r{}), skipping.",
                "OK".green().bold(),
                current().number
            );
        }
        ApplyOutcome::Applied { previous } => {
            if let Some(previous) = previous {
                println!(
                    "{} Replacing superseded revision r{}.",
                    "=>".blue().bold(),
                    previous
                );
            }
            if dry_run {
                println!(
                    "{} Would apply r{} to {} (dry run, nothing written).",
                    "=>".blue().bold(),
                    current().number,
                    target.display().to_string().cyan()
                );
            } else {
                netpatch_fs::write_text(target, &patched)?;
                println!(
                    "{} Patch r{} applied successfully.",
                    "OK".green().bold(),
                    current().number
                );
            }
        }
    }

    Ok(())
}
