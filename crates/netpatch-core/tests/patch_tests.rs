//! Integration tests for patch application, upgrade, and revert.

use netpatch_core::{
    ApplyOutcome, Error, PatchState, RevertOutcome, apply, apply_revision, detect_state, revert,
    revisions,
};
use pretty_assertions::assert_eq;

/// The minimal target: both anchors, nothing else.
const MINIMAL: &str =
    "def _enable_posix_spawn():\n    pass\n\ndef run():\n    _enable_posix_spawn()\n";

/// A target shaped like the real generated runner module.
const REALISTIC: &str = r#""""Home Assistant runner."""

import asyncio
import subprocess
import threading

MAX_EXECUTOR_WORKERS = 64


def _enable_posix_spawn() -> None:
    """Enable posix_spawn on Alpine."""
    if subprocess._USE_POSIX_SPAWN:
        return
    subprocess._USE_POSIX_SPAWN = True


def run(runtime_config):
    """Run Home Assistant."""
    _enable_posix_spawn()
    loop = asyncio.new_event_loop()
    threading.main_thread().name = "MainThread"
    return loop.run_forever()
"#;

// ============================================================================
// Fresh apply
// ============================================================================

#[test]
fn apply_inserts_block_immediately_before_anchor_definition() {
    let (patched, outcome) = apply(MINIMAL).unwrap();

    assert_eq!(outcome, ApplyOutcome::Applied { previous: None });
    assert!(
        patched.contains("# <<< netpatch:r3 <<<\n\ndef _enable_posix_spawn"),
        "closing marker should sit directly above the anchor definition:\n{patched}"
    );
    assert!(patched.contains("def _patch_aiodns_to_disable_edns"));
    assert!(patched.contains("def _patch_getaddrinfo_to_prefer_ipv4"));
    assert!(patched.contains("def _patch_aiohttp_connector_family"));
}

#[test]
fn apply_inserts_calls_immediately_after_anchor_call() {
    let (patched, _) = apply(MINIMAL).unwrap();

    let expected = concat!(
        "    _enable_posix_spawn()\n",
        "    _patch_aiodns_to_disable_edns()  # netpatch:r3\n",
        "    _patch_getaddrinfo_to_prefer_ipv4()  # netpatch:r3\n",
        "    _patch_aiohttp_connector_family()  # netpatch:r3\n",
    );
    assert!(patched.contains(expected), "call lines out of place:\n{patched}");
}

#[test]
fn apply_preserves_content_outside_insertion_spans() {
    let (patched, _) = apply(REALISTIC).unwrap();

    // Everything before the anchor definition is a byte-for-byte prefix.
    let def_at = REALISTIC.find("def _enable_posix_spawn").unwrap();
    assert!(patched.starts_with(&REALISTIC[..def_at]));

    // Everything after the anchor call line is a byte-for-byte suffix.
    let call_end = REALISTIC.find("    _enable_posix_spawn()\n").unwrap()
        + "    _enable_posix_spawn()\n".len();
    assert!(patched.ends_with(&REALISTIC[call_end..]));
}

#[test]
fn apply_is_idempotent() {
    let (once, _) = apply(REALISTIC).unwrap();
    let (twice, outcome) = apply(&once).unwrap();

    assert_eq!(outcome, ApplyOutcome::AlreadyCurrent);
    assert_eq!(twice, once, "second apply must be byte-for-byte unchanged");
}

// ============================================================================
// Upgrade from an older revision
// ============================================================================

#[test]
fn apply_over_r1_upgrades_to_current() {
    let r1 = revisions::get(1).unwrap();
    let (old, _) = apply_revision(REALISTIC, r1).unwrap();
    assert!(old.contains("# netpatch:r1"));

    let (upgraded, outcome) = apply(&old).unwrap();

    assert_eq!(outcome, ApplyOutcome::Applied { previous: Some(1) });
    assert!(!upgraded.contains("netpatch:r1"), "old markers must be gone");
    assert_eq!(
        upgraded.matches("# >>> netpatch:r3 >>>").count(),
        1,
        "exactly one copy of the current block"
    );
}

#[test]
fn upgrade_equals_fresh_apply() {
    let r2 = revisions::get(2).unwrap();
    let (old, _) = apply_revision(REALISTIC, r2).unwrap();

    let (upgraded, _) = apply(&old).unwrap();
    let (fresh, _) = apply(REALISTIC).unwrap();

    assert_eq!(upgraded, fresh);
}

#[test]
fn detect_state_reports_older_revision() {
    let r2 = revisions::get(2).unwrap();
    let (old, _) = apply_revision(MINIMAL, r2).unwrap();

    assert_eq!(detect_state(&old), PatchState::Patched { revision: 2 });
}

// ============================================================================
// Precondition failures
// ============================================================================

#[test]
fn apply_fails_when_anchor_definition_missing() {
    let content = "def run():\n    _enable_posix_spawn()\n";
    let result = apply(content);

    assert!(matches!(result, Err(Error::AnchorNotFound { .. })));
}

#[test]
fn apply_fails_when_anchor_call_missing() {
    let content = "def _enable_posix_spawn():\n    pass\n";
    let result = apply(content);

    assert!(matches!(result, Err(Error::AnchorNotFound { .. })));
}

#[test]
fn apply_fails_when_anchor_is_duplicated() {
    let content = format!("{MINIMAL}\ndef _enable_posix_spawn():\n    pass\n");
    let result = apply(&content);

    assert!(matches!(result, Err(Error::AnchorAmbiguous { count: 2, .. })));
}

// ============================================================================
// Revert
// ============================================================================

#[test]
fn revert_restores_original_bytes() {
    let (patched, _) = apply(REALISTIC).unwrap();
    let (reverted, outcome) = revert(&patched).unwrap();

    assert_eq!(outcome, RevertOutcome::Reverted { revision: 3 });
    assert_eq!(reverted, REALISTIC);
}

#[test]
fn revert_on_unpatched_target_is_noop() {
    let (content, outcome) = revert(MINIMAL).unwrap();

    assert_eq!(outcome, RevertOutcome::NotPatched);
    assert_eq!(content, MINIMAL);
}

// ============================================================================
// Marker robustness
// ============================================================================

#[test]
fn marker_text_quoted_in_a_docstring_is_not_a_version_marker() {
    // An indented mention of the marker (e.g. in a docstring or comment)
    // must not make the engine believe the patch is applied.
    let content = "def _enable_posix_spawn():\n    \"\"\"Mentions # >>> netpatch:r3 >>> in prose.\"\"\"\n    pass\n\ndef run():\n    _enable_posix_spawn()\n";

    assert_eq!(detect_state(content), PatchState::Unpatched);
    let (patched, outcome) = apply(content).unwrap();
    assert!(matches!(outcome, ApplyOutcome::Applied { previous: None }));
    assert_eq!(patched.matches("# >>> netpatch:r3 >>>").count(), 2);
}
