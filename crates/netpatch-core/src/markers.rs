//! Version marker formatting and parsing.
//!
//! Inserted blocks are delimited by sentinel comment lines of the form:
//! ```text
//! # >>> netpatch:r3 >>>
//! ...
//! # <<< netpatch:r3 <<<
//! ```
//! Inserted call lines carry a trailing `  # netpatch:r3` tag instead.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for matching opening block markers.
static OPEN_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^# >>> netpatch:r(\d+) >>>$").expect("Invalid open marker regex")
});

/// Creates the opening marker line for a revision's block.
pub fn opening_marker(revision: u32) -> String {
    format!("# >>> netpatch:r{} >>>", revision)
}

/// Creates the closing marker line for a revision's block.
pub fn closing_marker(revision: u32) -> String {
    format!("# <<< netpatch:r{} <<<", revision)
}

/// Creates the end-of-line tag appended to inserted call lines.
pub fn call_tag(revision: u32) -> String {
    format!("  # netpatch:r{}", revision)
}

/// Parses all revision numbers whose opening markers appear in the content.
///
/// Returns each revision once, in order of first appearance. A correctly
/// maintained target carries at most one.
pub fn parse_revisions(content: &str) -> Vec<u32> {
    let mut revisions = Vec::new();
    for caps in OPEN_MARKER_REGEX.captures_iter(content) {
        if let Ok(number) = caps[1].parse::<u32>() {
            if !revisions.contains(&number) {
                revisions.push(number);
            }
        }
    }
    revisions
}

/// Checks whether the content carries the given revision's marker.
pub fn has_revision(content: &str, revision: u32) -> bool {
    parse_revisions(content).contains(&revision)
}
