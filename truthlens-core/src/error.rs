use crate::types::InputMode;
use thiserror::Error;

/// Problems with what the user supplied. All of them are shown as a
/// blocking alert and leave the session unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter some text to analyze.")]
    EmptyText,
    #[error("Please choose a file to analyze.")]
    NoFile,
    #[error("\"{media_type}\" is not a valid {mode} file.")]
    WrongMediaType { mode: InputMode, media_type: String },
    #[error("Text mode does not accept files.")]
    FilesNotAccepted,
    #[error("An analysis is already running.")]
    Busy,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog parse: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog section '{0}' is empty")]
    Empty(&'static str),
    #[error("confidence range of '{verdict}' exceeds 100 ({base} + {spread})")]
    ConfidenceOutOfRange { verdict: String, base: u8, spread: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunError {
    #[error("analysis run cancelled")]
    Cancelled,
}
