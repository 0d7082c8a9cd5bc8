//! Lexical splitting primitives.
//!
//! Everything in this module is a pure string operation: no component here
//! assigns meaning to `.` or `..`, and nothing touches a filesystem. The
//! [`chop_basename`] primitive is the foundation the rest of the crate is
//! derived from — the absolute/relative predicates and the backtracking
//! combination both decompose paths by chopping basenames off the end.

/// The separator character this crate's path algebra operates on.
pub const SEPARATOR: char = '/';

// Str form of the separator, for joining segment lists.
pub(crate) const SEPARATOR_STR: &str = "/";

/// Split the trailing basename off a path string.
///
/// Locates the final non-separator run of `path` (trailing separators are
/// ignored, as in the OS-style basename of a string) and returns the prefix
/// before it together with the basename itself. The prefix keeps its own
/// trailing separator. Returns `None` when no basename can be chopped, i.e.
/// the path is empty or consists only of separators.
///
/// This is a purely lexical split: `.` and `..` are returned like any other
/// segment.
///
/// # Examples
///
/// ```
/// use vpath::chop_basename;
///
/// assert_eq!(chop_basename("a/b"), Some(("a/", "b")));
/// assert_eq!(chop_basename("a/b/"), Some(("a/", "b")));
/// assert_eq!(chop_basename("/a"), Some(("/", "a")));
/// assert_eq!(chop_basename("a"), Some(("", "a")));
/// assert_eq!(chop_basename("/"), None);
/// assert_eq!(chop_basename(""), None);
/// ```
#[must_use]
pub fn chop_basename(path: &str) -> Option<(&str, &str)> {
    let trimmed = path.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() {
        return None;
    }
    let start = trimmed
        .rfind(SEPARATOR)
        .map_or(0, |i| i + SEPARATOR.len_utf8());
    Some((&path[..start], &trimmed[start..]))
}

/// The OS-style basename of a path string.
///
/// Trailing separators are ignored. A path consisting only of separators
/// reduces to a single separator, and the empty string stays empty — the
/// combination algorithm relies on that distinction to recognize an
/// unremovable root (a root's basename still contains a separator, an
/// exhausted relative prefix's does not).
///
/// # Examples
///
/// ```
/// use vpath::basename;
///
/// assert_eq!(basename("a/b"), "b");
/// assert_eq!(basename("a/b///"), "b");
/// assert_eq!(basename("/"), "/");
/// assert_eq!(basename("//"), "/");
/// assert_eq!(basename(""), "");
/// ```
#[must_use]
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() {
        if path.is_empty() {
            path
        } else {
            &path[..SEPARATOR.len_utf8()]
        }
    } else {
        let start = trimmed
            .rfind(SEPARATOR)
            .map_or(0, |i| i + SEPARATOR.len_utf8());
        &trimmed[start..]
    }
}
