//! Error types for netpatch-core

/// Result type for patch engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while patching target content
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Anchor not found in target: {anchor:?}")]
    AnchorNotFound { anchor: &'static str },

    #[error("Anchor {anchor:?} occurs {count} times, expected exactly once")]
    AnchorAmbiguous { anchor: &'static str, count: usize },

    #[error("Markers for revision r{revision} are corrupt (opening marker without a matching block)")]
    MarkerCorrupt { revision: u32 },

    #[error("Invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),
}
