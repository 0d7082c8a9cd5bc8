//! Error types for the vpath library.
//!
//! This module provides the error hierarchy for path construction and
//! combination, using `thiserror` for ergonomic error handling. All failures
//! surface synchronously to the caller; no operation retries or suppresses
//! errors internally, and none produces a partial result.

use thiserror::Error;

/// Result type alias for operations that may fail with a vpath error.
///
/// # Examples
///
/// ```
/// use vpath::{PathValue, Result};
///
/// fn example_operation() -> Result<PathValue> {
///     PathValue::new("a/b")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the vpath library.
///
/// This enum encompasses all possible error conditions that can occur while
/// constructing or combining path values.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid path string was provided.
    ///
    /// Raised when construction is given the reserved invalid-path sentinel
    /// (a string containing the NUL byte), or when a combinator is given an
    /// empty fragment sequence.
    #[error("invalid path {path:?}: {reason}")]
    InvalidPath {
        /// The offending path string.
        path: String,
        /// The reason the path is invalid.
        reason: String,
    },

    /// Construction input could not be interpreted as a path-like string.
    #[error("unsupported input: {reason}")]
    UnsupportedInput {
        /// The reason the input could not be interpreted.
        reason: String,
    },
}

impl Error {
    /// Check if this error indicates an invalid path string.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::Error;
    ///
    /// let err = Error::InvalidPath {
    ///     path: "bad\0path".to_string(),
    ///     reason: "contains the NUL sentinel byte".to_string(),
    /// };
    /// assert!(err.is_invalid_path());
    /// ```
    #[must_use]
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }

    /// Check if this error indicates input of an unsupported shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::Error;
    ///
    /// let err = Error::UnsupportedInput {
    ///     reason: "input is not valid UTF-8".to_string(),
    /// };
    /// assert!(err.is_unsupported_input());
    /// ```
    #[must_use]
    pub fn is_unsupported_input(&self) -> bool {
        matches!(self, Self::UnsupportedInput { .. })
    }
}
