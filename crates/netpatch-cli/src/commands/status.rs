//! Status command implementation

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use netpatch_core::{PatchState, current, detect_state, ensure_anchors, revisions};

use crate::error::Result;

/// Machine-readable status report for `status --json`.
#[derive(Debug, Serialize)]
struct StatusReport {
    target: String,
    state: &'static str,
    revision: Option<u32>,
    current: u32,
    up_to_date: bool,
    anchors_ok: bool,
}

/// Run the status command
///
/// Reports the detected patch state without modifying the target.
pub fn run_status(target: &Path, json: bool) -> Result<()> {
    let content = netpatch_fs::read_text(target)?;
    let state = detect_state(&content);
    let anchors_ok = ensure_anchors(&content).is_ok();
    let newest = current().number;

    if json {
        let (state_name, revision) = match state {
            PatchState::Unpatched => ("unpatched", None),
            PatchState::Patched { revision } => ("patched", Some(revision)),
        };
        let report = StatusReport {
            target: target.display().to_string(),
            state: state_name,
            revision,
            current: newest,
            up_to_date: revision == Some(newest),
            anchors_ok,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match state {
        PatchState::Unpatched => {
            println!(
                "{} {} is unpatched (current revision is r{}).",
                "=>".blue().bold(),
                target.display().to_string().cyan(),
                newest
            );
        }
        PatchState::Patched { revision } if revision == newest => {
            println!(
                "{} {} carries the current revision r{}.",
                "OK".green().bold(),
                target.display().to_string().cyan(),
                revision
            );
        }
        PatchState::Patched { revision } => {
            println!(
                "{} {} carries superseded revision r{} (current is r{}).",
                "STALE".yellow().bold(),
                target.display().to_string().cyan(),
                revision,
                newest
            );
        }
    }

    if let PatchState::Patched { revision } = state {
        if let Some(entry) = revisions::get(revision) {
            println!("   {} {}", "-".dimmed(), entry.summary);
        }
    }

    if !anchors_ok {
        println!(
            "{} Anchors are missing or ambiguous; apply would refuse this target.",
            "WARN".yellow().bold()
        );
    }

    Ok(())
}
