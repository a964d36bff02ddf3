//! Patch application, state detection, and removal.
//!
//! All operations take content in and return new content out; nothing here
//! touches the filesystem. Content outside the insertion spans is preserved
//! byte-for-byte, and `apply` followed by `revert` restores the original
//! bytes exactly.

use regex::Regex;

use crate::anchors::{self, ANCHOR_CALL, ANCHOR_DEF};
use crate::error::{Error, Result};
use crate::markers;
use crate::revisions::{self, Revision};

/// The patch state of a target, as detected from version markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchState {
    /// No version marker present.
    Unpatched,
    /// A revision's marker is present.
    Patched { revision: u32 },
}

/// What an `apply` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The requested revision was already present; content unchanged.
    AlreadyCurrent,
    /// The revision was inserted, after stripping `previous` if present.
    Applied { previous: Option<u32> },
}

/// What a `revert` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevertOutcome {
    /// No version marker present; content unchanged.
    NotPatched,
    /// The named revision was removed.
    Reverted { revision: u32 },
}

/// Detect the patch state from version markers.
pub fn detect_state(content: &str) -> PatchState {
    match markers::parse_revisions(content).into_iter().max() {
        Some(revision) => PatchState::Patched { revision },
        None => PatchState::Unpatched,
    }
}

/// Apply the current (newest) revision.
///
/// See [`apply_revision`] for the contract.
pub fn apply(content: &str) -> Result<(String, ApplyOutcome)> {
    apply_revision(content, revisions::current())
}

/// Apply one revision to the content.
///
/// If the revision's marker is already present this is a no-op. Otherwise
/// the anchors are validated, any other revision's inserted text is
/// stripped, the revision's function block is inserted immediately before
/// the anchor definition, and its call lines immediately after the anchor
/// call.
///
/// # Errors
/// Fails without producing modified content if an anchor is missing or
/// ambiguous, or if a present marker has no matching block.
pub fn apply_revision(content: &str, revision: &Revision) -> Result<(String, ApplyOutcome)> {
    if markers::has_revision(content, revision.number) {
        tracing::debug!(revision = revision.number, "already patched, nothing to do");
        return Ok((content.to_string(), ApplyOutcome::AlreadyCurrent));
    }

    anchors::ensure_anchors(content)?;

    let mut working = content.to_string();
    let mut previous = None;
    for stale in markers::parse_revisions(content) {
        tracing::debug!(stale, "stripping superseded revision");
        working = strip_revision(&working, stale)?;
        previous = Some(stale);
    }

    let block = render_block(revision);
    working = working.replacen(ANCHOR_DEF, &format!("{block}{ANCHOR_DEF}"), 1);

    let calls = render_calls(revision);
    working = working.replacen(ANCHOR_CALL, &format!("{ANCHOR_CALL}{calls}"), 1);

    tracing::debug!(revision = revision.number, "patch rendered");
    Ok((working, ApplyOutcome::Applied { previous }))
}

/// Remove whichever revision is present.
pub fn revert(content: &str) -> Result<(String, RevertOutcome)> {
    let found = markers::parse_revisions(content);
    let Some(&newest) = found.iter().max() else {
        return Ok((content.to_string(), RevertOutcome::NotPatched));
    };

    let mut working = content.to_string();
    for revision in found {
        working = strip_revision(&working, revision)?;
    }
    Ok((working, RevertOutcome::Reverted { revision: newest }))
}

/// Remove one revision's marker-delimited block and tagged call lines.
///
/// Content without the revision's opening marker passes through unchanged.
pub fn strip_revision(content: &str, revision: u32) -> Result<String> {
    let open = markers::opening_marker(revision);
    if !content.contains(&open) {
        return Ok(content.to_string());
    }
    let close = markers::closing_marker(revision);

    // The block is removed with the exact framing `render_block` added, so
    // a strip restores the pre-patch bytes.
    let block_pattern = format!(
        r"(?s)\n\n{}\n.*?{}\n\n",
        regex::escape(&open),
        regex::escape(&close)
    );
    let block_re = Regex::new(&block_pattern)?;
    if !block_re.is_match(content) {
        return Err(Error::MarkerCorrupt { revision });
    }
    let without_block = block_re.replace(content, "").to_string();

    let call_pattern = format!(
        r"(?m)^[^\n]*{}\n",
        regex::escape(&markers::call_tag(revision))
    );
    let call_re = Regex::new(&call_pattern)?;
    Ok(call_re.replace_all(&without_block, "").to_string())
}

/// Render a revision's function block, framed by its version markers and
/// the blank lines that separate it from surrounding code.
fn render_block(revision: &Revision) -> String {
    format!(
        "\n\n{open}\n{body}{close}\n\n",
        open = markers::opening_marker(revision.number),
        body = revision.functions.join("\n\n"),
        close = markers::closing_marker(revision.number),
    )
}

/// Render a revision's call lines, indented and tagged.
fn render_calls(revision: &Revision) -> String {
    let tag = markers::call_tag(revision.number);
    revision
        .calls
        .iter()
        .map(|call| format!("    {call}{tag}\n"))
        .collect()
}
