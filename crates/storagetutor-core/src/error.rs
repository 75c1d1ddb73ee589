//! Error types for tutorial setup and input decoding.

use thiserror::Error;

/// Errors raised while building widgets or decoding user input.
///
/// Setup errors propagate to the caller. Out-of-range navigation is never an
/// error; it is ignored by the cursor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TutorialError {
    #[error("Widget '{0}' has no content")]
    EmptyContent(&'static str),
    #[error("Cannot take {requested} items from a pool of {available}")]
    SubsetTooLarge { requested: usize, available: usize },
    #[error("Invalid content for '{id}': {reason}")]
    InvalidContent { id: &'static str, reason: String },
    #[error("Unknown section: {0}")]
    UnknownSection(String),
    #[error("Invalid action: {0}")]
    InvalidAction(String),
}

/// Result type for tutorial operations.
pub type TutorialResult<T> = Result<T, TutorialError>;
