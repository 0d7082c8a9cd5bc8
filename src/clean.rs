//! Flat path normalization.
//!
//! [`PathValue::clean`] produces a canonical display/key form of a single
//! path: empty segments are dropped and `..` resolves against a flat segment
//! stack, optionally after anchoring the path to a current-directory context
//! and stripping a known trailing suffix (e.g. a script extension).
//!
//! This is deliberately not the backtracking algorithm of
//! [`crate::combine`]: here `.` is an ordinary literal segment that survives
//! normalization, while concatenation treats it as inert. Callers that need
//! algebraic combination use `concat`; callers that need a lookup key use
//! `clean`. The two must stay independent.

use crate::split::{SEPARATOR, SEPARATOR_STR};
use crate::value::PathValue;

/// A current-directory context used to anchor a normalization call.
///
/// The default [`NoOp`](Self::NoOp) context normalizes the path as given;
/// [`At`](Self::At) prepends the supplied directory (with exactly one
/// separator) before normalizing.
///
/// # Examples
///
/// ```
/// use vpath::{CurrentDirContext, PathValue};
///
/// let ctx = CurrentDirContext::default();
/// assert!(ctx.is_noop());
///
/// let ctx = CurrentDirContext::at(PathValue::new("lib").unwrap());
/// assert_eq!(ctx.anchor(), Some("lib"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CurrentDirContext {
    /// Normalize the path as given, without anchoring.
    #[default]
    NoOp,
    /// Anchor the path to this directory before normalizing.
    At(PathValue),
}

impl CurrentDirContext {
    /// Create a context anchored at the given directory.
    #[must_use]
    pub fn at(dir: PathValue) -> Self {
        Self::At(dir)
    }

    /// The anchor directory, if any.
    #[must_use]
    pub fn anchor(&self) -> Option<&str> {
        match self {
            Self::NoOp => None,
            Self::At(dir) => Some(dir.as_str()),
        }
    }

    /// Whether this is the no-op context.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp)
    }
}

impl PathValue {
    /// Normalize this path into a canonical key form.
    ///
    /// The path is optionally anchored to `context` and stripped of one
    /// trailing occurrence of `suffix`, then split on the separator and
    /// rebuilt left to right over a segment stack: empty segments are
    /// dropped, `..` pops the stack top (a no-op when the stack is empty),
    /// and every other segment — including `.` — is pushed as-is.
    ///
    /// Because leading empty segments are dropped too, an absolute input
    /// loses its root in the result; the output is a key, not a combinable
    /// path value.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{CurrentDirContext, PathValue};
    ///
    /// let no_ctx = CurrentDirContext::default();
    ///
    /// let path = PathValue::new("a//b/../c/./d").unwrap();
    /// assert_eq!(path.clean(&no_ctx, None).as_str(), "a/c/./d");
    ///
    /// let script = PathValue::new("foo.rb").unwrap();
    /// let ctx = CurrentDirContext::at(PathValue::new("lib").unwrap());
    /// assert_eq!(script.clean(&ctx, Some(".rb")).as_str(), "lib/foo");
    /// ```
    #[must_use]
    pub fn clean(&self, context: &CurrentDirContext, suffix: Option<&str>) -> PathValue {
        let mut working = match context.anchor() {
            Some(dir) => format!("{dir}{SEPARATOR}{}", self.as_str()),
            None => self.as_str().to_owned(),
        };
        if let Some(suffix) = suffix {
            if !suffix.is_empty() && working.ends_with(suffix) {
                working.truncate(working.len() - suffix.len());
            }
        }

        let mut stack: Vec<&str> = Vec::new();
        for segment in working.split(SEPARATOR) {
            match segment {
                "" => {}
                ".." => {
                    stack.pop();
                }
                name => stack.push(name),
            }
        }
        PathValue::from_trusted(stack.join(SEPARATOR_STR))
    }
}
