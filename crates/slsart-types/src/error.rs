use std::path::PathBuf;

use thiserror::Error;

/// Errors from the question-asking capability.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The user cancelled the session (Ctrl-C or end of input).
    #[error("prompt aborted by user")]
    Aborted,

    /// The terminal backend failed.
    #[error("prompt interaction failed: {0}")]
    Interaction(String),
}

/// Errors from a wizard run.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// The prompter returned a round without a required answer.
    #[error("missing answer for question '{0}'")]
    MissingAnswer(&'static str),

    /// An answer passed prompt validation but could not be parsed.
    #[error("invalid answer for question '{name}': {detail}")]
    InvalidAnswer { name: &'static str, detail: String },

    /// Writing the finished script failed.
    #[error("failed to write script to '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl WizardError {
    /// Whether this error represents a user cancellation rather than a
    /// genuine failure.
    pub fn is_aborted(&self) -> bool {
        matches!(self, WizardError::Prompt(PromptError::Aborted))
    }
}
