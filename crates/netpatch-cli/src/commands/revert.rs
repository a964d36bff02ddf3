//! Revert command implementation

use std::path::Path;

use colored::Colorize;

use netpatch_core::{RevertOutcome, revert};

use crate::error::Result;

/// Run the revert command
///
/// Strips whichever revision is present, restoring the pre-patch bytes.
pub fn run_revert(target: &Path, dry_run: bool) -> Result<()> {
    let content = netpatch_fs::read_text(target)?;
    let (restored, outcome) = revert(&content)?;

    match outcome {
        RevertOutcome::NotPatched => {
            println!("{} Not patched, nothing to do.", "OK".green().bold());
        }
        RevertOutcome::Reverted { revision } => {
            if dry_run {
                println!(
                    "{} Would remove revision r{} from {} (dry run, nothing written).",
                    "=>".blue().bold(),
                    revision,
                    target.display().to_string().cyan()
                );
            } else {
                netpatch_fs::write_text(target, &restored)?;
                println!(
                    "{} Revision r{} removed.",
                    "OK".green().bold(),
                    revision
                );
            }
        }
    }

    Ok(())
}
