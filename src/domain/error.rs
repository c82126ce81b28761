use std::io;

use thiserror::Error;

/// Library-wide error type for sdbox operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A required external tool is not on the search path.
    #[error("Could not find {0}, please install and set path to {0}")]
    MissingPrerequisite(String),

    /// An external tool exited with a failure status.
    #[error("Command '{command}' failed: {details}")]
    CommandFailed { command: String, details: String },

    /// A console prompt could not be read.
    #[error("Failed to read input: {0}")]
    Prompt(String),

    /// The operator closed input at a mandatory prompt.
    #[error("Aborted: input closed before setup finished")]
    Cancelled,

    /// Template placeholders had no value in the field set.
    #[error("Missing template field(s): {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// SCM credential serialization failed.
    #[error("Failed to encode SCM config: {0}")]
    CredentialEncoding(#[from] serde_json::Error),
}
