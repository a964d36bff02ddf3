//! Error types for netpatch-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from the patch engine
    #[error(transparent)]
    Patch(#[from] netpatch_core::Error),

    /// Error from the file layer
    #[error(transparent)]
    Fs(#[from] netpatch_fs::Error),

    /// Status report could not be encoded
    #[error("Failed to encode status report: {0}")]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    #[allow(dead_code)] // kept for command implementations that need ad-hoc messages
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
