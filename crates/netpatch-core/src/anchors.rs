//! Anchor validation for the patch target.
//!
//! The target is expected to contain exactly one copy of each anchor. The
//! call anchor includes its indentation and trailing newline so that a
//! mention of the function in a comment or docstring cannot match.

use crate::error::{Error, Result};

/// The function definition new patch functions are inserted before.
pub const ANCHOR_DEF: &str = "def _enable_posix_spawn";

/// The call line new patch calls are inserted after.
pub const ANCHOR_CALL: &str = "    _enable_posix_spawn()\n";

/// Verify that both anchors occur exactly once in the content.
///
/// # Errors
/// Returns [`Error::AnchorNotFound`] if an anchor is absent and
/// [`Error::AnchorAmbiguous`] if one occurs more than once. In either case
/// the caller must not modify the target.
pub fn ensure_anchors(content: &str) -> Result<()> {
    for anchor in [ANCHOR_DEF, ANCHOR_CALL] {
        match content.matches(anchor).count() {
            0 => return Err(Error::AnchorNotFound { anchor }),
            1 => {}
            count => return Err(Error::AnchorAmbiguous { anchor, count }),
        }
    }
    Ok(())
}
