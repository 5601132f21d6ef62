//! Error types for search-pattern operations

use thiserror::Error;

/// The error type for search-pattern operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Search pattern uses ".." to move up out of the searched directory
    #[error("search pattern uses '..' to move up directories: {pattern}")]
    Traversal { pattern: String },

    /// Empty pattern supplied to the search-string builder
    #[error("search pattern cannot be empty")]
    Empty,

    /// Rooted pattern supplied to the search-string builder
    #[error("search pattern must be a relative fragment, not a rooted path: {pattern}")]
    Rooted { pattern: String },
}

/// Result type for search-pattern operations
pub type Result<T> = std::result::Result<T, PatternError>;
