//! Error types for task list operations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Ambiguous task reference '{0}' matches {1} tasks")]
    Ambiguous(String, usize),

    #[error("Task title cannot be empty")]
    EmptyTitle,

    #[error("Unknown filter: {0} (expected all, active or done)")]
    UnknownFilter(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons an import file is rejected
///
/// The display strings are shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// Parsed, but not an array of objects with string titles
    #[error("Invalid file.")]
    Invalid,

    /// Not JSON at all, or an entry could not be inspected
    #[error("Could not read the file.")]
    Unreadable,
}

pub type Result<T> = std::result::Result<T, TaskError>;
