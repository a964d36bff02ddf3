//! Anchor-based patch engine for netpatch.
//!
//! Patches the generated `runner.py` of a container image so that the
//! application disables problematic network-resolution defaults in its
//! third-party libraries at startup. The engine works purely on in-memory
//! text; file I/O lives in `netpatch-fs`.
//!
//! # Marker scheme
//!
//! Every inserted block is delimited by structured sentinel comments:
//!
//! ```text
//! # >>> netpatch:r3 >>>
//! def _patch_aiodns_to_disable_edns() -> None:
//!     ...
//! # <<< netpatch:r3 <<<
//! ```
//!
//! and every inserted call line carries a trailing `  # netpatch:r3` tag.
//! State detection, idempotency, and the removal of superseded revisions
//! all key off these markers rather than sniffing for function names, so a
//! reformatted payload cannot produce a false "already patched" answer.
//!
//! # Anchors
//!
//! Two literal fragments of the target locate the insertion points: the
//! `def _enable_posix_spawn` definition (new functions go immediately
//! before it) and the indented `_enable_posix_spawn()` call line (new call
//! lines go immediately after it). Both must occur exactly once or the
//! engine refuses to touch the content.

pub mod anchors;
pub mod error;
pub mod markers;
pub mod patch;
pub mod revisions;

pub use anchors::{ANCHOR_CALL, ANCHOR_DEF, ensure_anchors};
pub use error::{Error, Result};
pub use markers::{has_revision, parse_revisions};
pub use patch::{
    ApplyOutcome, PatchState, RevertOutcome, apply, apply_revision, detect_state, revert,
};
pub use revisions::{CATALOG, Revision, current};
