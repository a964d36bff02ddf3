//! [`TestTarget`] builder for patch-target test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A miniature runner module with both anchors present.
pub const MINIMAL_RUNNER: &str =
    "def _enable_posix_spawn():\n    pass\n\ndef run():\n    _enable_posix_spawn()\n";

/// A temporary target file with helper constructors for each patch-state
/// scenario the tool must handle.
///
/// # Example
///
/// ```rust,no_run
/// use netpatch_test_utils::TestTarget;
///
/// let target = TestTarget::minimal();
/// assert!(target.read().contains("def _enable_posix_spawn"));
/// ```
pub struct TestTarget {
    temp_dir: TempDir,
    path: PathBuf,
}

impl TestTarget {
    /// Create a target file with the given content.
    pub fn with_content(content: &str) -> Self {
        let temp_dir = TempDir::new().expect("TestTarget: failed to create temp dir");
        let path = temp_dir.path().join("runner.py");
        fs::write(&path, content).expect("TestTarget: failed to write target file");
        Self { temp_dir, path }
    }

    /// A minimal valid target: both anchors, nothing else.
    pub fn minimal() -> Self {
        Self::with_content(MINIMAL_RUNNER)
    }

    /// A target missing the anchor function definition.
    pub fn missing_definition() -> Self {
        Self::with_content("def run():\n    _enable_posix_spawn()\n")
    }

    /// A target missing the anchor call line.
    pub fn missing_call() -> Self {
        Self::with_content("def _enable_posix_spawn():\n    pass\n\ndef run():\n    pass\n")
    }

    /// A target where the anchor definition occurs twice.
    pub fn duplicate_definition() -> Self {
        Self::with_content(&format!(
            "{MINIMAL_RUNNER}\ndef _enable_posix_spawn():\n    pass\n"
        ))
    }

    /// Path of the target file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Root of the temporary directory holding the target.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Read the target file back.
    pub fn read(&self) -> String {
        fs::read_to_string(&self.path).expect("TestTarget: failed to read target file")
    }

    /// Overwrite the target file.
    pub fn write(&self, content: &str) {
        fs::write(&self.path, content).expect("TestTarget: failed to write target file");
    }
}
