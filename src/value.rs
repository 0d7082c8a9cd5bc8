//! The core path value type.
//!
//! [`PathValue`] is an immutable wrapper around a single path string. It
//! performs no normalization at construction time — normalization is an
//! explicit operation, never automatic — and it never consults a filesystem:
//! whether the wrapped string refers to anything that exists is outside this
//! crate's concern.
//!
//! Construction enforces exactly one invariant: the wrapped string never
//! contains the NUL byte, the reserved sentinel used to signal "not a valid
//! path".

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::split::chop_basename;

/// An immutable wrapper around a single path string.
///
/// Two path values are structurally equal iff their wrapped strings are
/// equal. Every operation on a `PathValue` returns a new value; nothing is
/// ever mutated in place, so values may be freely shared across threads.
///
/// # Examples
///
/// ```
/// use vpath::PathValue;
///
/// let path = PathValue::new("a/b").unwrap();
/// assert_eq!(path.as_str(), "a/b");
/// assert!(path.is_relative());
///
/// // The NUL sentinel is rejected.
/// assert!(PathValue::new("a\0b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PathValue(String);

impl PathValue {
    /// Create a new path value from a string.
    ///
    /// The string is stored verbatim — no normalization, no trimming of
    /// separators.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the string contains the NUL
    /// sentinel byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::PathValue;
    ///
    /// let path = PathValue::new("lib/foo.rb").unwrap();
    /// assert_eq!(path.to_string(), "lib/foo.rb");
    /// ```
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        if path.contains('\0') {
            return Err(Error::InvalidPath {
                path,
                reason: "contains the NUL sentinel byte".to_string(),
            });
        }
        Ok(Self(path))
    }

    /// Create a path value from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedInput`] if the bytes are not valid UTF-8,
    /// or [`Error::InvalidPath`] if they contain the NUL sentinel byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::PathValue;
    ///
    /// let path = PathValue::from_bytes(b"a/b").unwrap();
    /// assert_eq!(path.as_str(), "a/b");
    ///
    /// assert!(PathValue::from_bytes(&[0xff, 0xfe]).is_err());
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let path = std::str::from_utf8(bytes).map_err(|e| Error::UnsupportedInput {
            reason: format!("input is not valid UTF-8: {e}"),
        })?;
        Self::new(path)
    }

    // Internal constructor for strings produced by this crate's own
    // operations, which preserve the no-NUL invariant.
    pub(crate) fn from_trusted(path: String) -> Self {
        Self(path)
    }

    /// The wrapped path string, verbatim.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::PathValue;
    ///
    /// let path = PathValue::new("a/b").unwrap();
    /// assert_eq!(path.into_string(), "a/b");
    /// ```
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether this path is relative.
    ///
    /// Derived by repeatedly chopping basenames until no more can be
    /// chopped: the path is relative iff the remaining prefix is empty. A
    /// non-empty unchoppable prefix is an unremovable root, such as a
    /// leading separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::PathValue;
    ///
    /// assert!(PathValue::new("a/b").unwrap().is_relative());
    /// assert!(PathValue::new("").unwrap().is_relative());
    /// assert!(!PathValue::new("/a/b").unwrap().is_relative());
    /// ```
    #[must_use]
    pub fn is_relative(&self) -> bool {
        let mut prefix = self.0.as_str();
        while let Some((rest, _)) = chop_basename(prefix) {
            prefix = rest;
        }
        prefix.is_empty()
    }

    /// Whether this path is absolute. The logical negation of
    /// [`is_relative`](Self::is_relative).
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::PathValue;
    ///
    /// assert!(PathValue::new("/a/b").unwrap().is_absolute());
    /// assert!(PathValue::new("/").unwrap().is_absolute());
    /// assert!(!PathValue::new("a/b").unwrap().is_absolute());
    /// ```
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        !self.is_relative()
    }
}

impl TryFrom<String> for PathValue {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PathValue {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PathValue> for String {
    fn from(value: PathValue) -> Self {
        value.0
    }
}

impl AsRef<str> for PathValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
