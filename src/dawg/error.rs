//! Error types for building and querying a word graph.

use thiserror::Error;

/// Errors raised by construction and query operations.
///
/// All of them signal misuse by the caller; none is transient.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DawgError {
    /// A word was inserted after a word that sorts after it.
    ///
    /// Contains the two words that were out of order, after normalization.
    #[error("word {word:?} was inserted after {previous:?}, which sorts after it")]
    OrderingViolation {
        /// The word inserted before.
        previous: String,
        /// The offending word.
        word: String,
    },

    /// A required argument was absent. Carries the argument's name.
    #[error("{0} is absent")]
    NullArgument(&'static str),

    /// A word equal to the previous one was inserted under
    /// [`DuplicatePolicy::Reject`](super::config::DuplicatePolicy::Reject).
    #[error("duplicate word {0:?}")]
    DuplicateWord(String),
}

/// Errors raised while building a word graph from a word list on disk or in a reader.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading the word list failed.
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),

    /// The words were read but could not be inserted.
    #[error(transparent)]
    Dawg(#[from] DawgError),
}

/// A specialized `Result` type for word graph operations.
pub type Result<T> = std::result::Result<T, DawgError>;
