//! Path-aware combination.
//!
//! This module implements the "+" operator of the path algebra: a
//! backtracking concatenation that collapses leading `.`/`..` segments of
//! the right operand against the trailing segments of the left operand,
//! rather than leaving them uninterpreted. [`join_all`] folds that operator
//! right-to-left over a sequence of fragments.
//!
//! The backtracking here is deliberately distinct from the flat normalizer
//! in [`crate::clean`]: concatenation treats `.` as inert on both sides,
//! while the normalizer keeps `.` as an ordinary literal segment. The two
//! algorithms must not be unified.

use std::ops::Add;

use crate::error::{Error, Result};
use crate::split::{basename, chop_basename, SEPARATOR};
use crate::value::PathValue;

impl PathValue {
    /// Combine two paths into one logical path.
    ///
    /// An absolute right operand overrides the left operand entirely.
    /// Otherwise the right operand's leading `.` segments are discarded and
    /// its leading `..` segments cancel against the left operand's trailing
    /// name segments, one for one. Parent references that reach an
    /// unremovable root are absorbed by it. Interior `.`/`..` segments of
    /// the right operand (those not reachable from its front) are preserved
    /// uninterpreted.
    ///
    /// Also available as the `+` operator on references.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::PathValue;
    ///
    /// let path = |s: &str| PathValue::new(s).unwrap();
    ///
    /// // Cancellation against the left operand.
    /// assert_eq!(path("a/b").concat(&path("..")), path("a"));
    ///
    /// // Self-references are inert.
    /// assert_eq!(path("a/b").concat(&path("./c")), path("a/b/c"));
    ///
    /// // An absolute right operand wins.
    /// assert_eq!(path("a/b").concat(&path("/c")), path("/c"));
    ///
    /// // Parent references are absorbed at the root.
    /// assert_eq!(path("/").concat(&path("..")), path("/"));
    /// ```
    #[must_use]
    pub fn concat(&self, other: &PathValue) -> PathValue {
        plus(self.as_str(), other.as_str())
    }

    /// Join path fragments onto this path, left to right.
    ///
    /// The receiver acts as the leftmost fragment. The fold actually runs
    /// right to left using [`concat`](Self::concat), returning early as
    /// soon as the running result is absolute — an absolute fragment
    /// discards everything to its left, including the receiver. An empty
    /// fragment sequence yields the receiver unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::PathValue;
    ///
    /// let path = |s: &str| PathValue::new(s).unwrap();
    ///
    /// let b = path("b");
    /// let c = path("c");
    /// assert_eq!(path("a").join([&b, &c]), path("a/b/c"));
    ///
    /// // An absolute fragment resets the accumulation.
    /// let abs = path("/b");
    /// assert_eq!(path("a").join([&abs, &c]), path("/b/c"));
    ///
    /// assert_eq!(path("a").join([]), path("a"));
    /// ```
    #[must_use]
    pub fn join<'a, I>(&'a self, fragments: I) -> PathValue
    where
        I: IntoIterator<Item = &'a PathValue>,
    {
        let mut ordered: Vec<&PathValue> = std::iter::once(self).chain(fragments).collect();
        let Some(last) = ordered.pop() else {
            return self.clone();
        };
        fold_fragments(&ordered, last)
    }
}

impl Add<&PathValue> for &PathValue {
    type Output = PathValue;

    fn add(self, rhs: &PathValue) -> PathValue {
        self.concat(rhs)
    }
}

impl Add for PathValue {
    type Output = PathValue;

    fn add(self, rhs: PathValue) -> PathValue {
        self.concat(&rhs)
    }
}

/// Join an ordered sequence of path fragments into one logical path.
///
/// The free-function framing of [`PathValue::join`]: the whole sequence is
/// given explicitly, and an empty sequence is an error rather than a
/// receiver to fall back on.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if `fragments` is empty.
///
/// # Examples
///
/// ```
/// use vpath::{join_all, PathValue};
///
/// let path = |s: &str| PathValue::new(s).unwrap();
///
/// let joined = join_all(&[path("a"), path("b"), path("c")]).unwrap();
/// assert_eq!(joined, path("a/b/c"));
///
/// // An absolute fragment discards everything joined so far to its left.
/// let joined = join_all(&[path("a"), path("/b")]).unwrap();
/// assert_eq!(joined, path("/b"));
///
/// assert!(join_all(&[]).is_err());
/// ```
pub fn join_all(fragments: &[PathValue]) -> Result<PathValue> {
    let Some((last, rest)) = fragments.split_last() else {
        return Err(Error::InvalidPath {
            path: String::new(),
            reason: "cannot join an empty sequence of fragments".to_string(),
        });
    };
    let rest: Vec<&PathValue> = rest.iter().collect();
    Ok(fold_fragments(&rest, last))
}

// Right-to-left fold shared by both join framings. `rest` holds the
// fragments to the left of `last`, in order.
fn fold_fragments(rest: &[&PathValue], last: &PathValue) -> PathValue {
    let mut result = last.clone();
    if result.is_absolute() {
        return result;
    }
    for fragment in rest.iter().rev() {
        result = fragment.concat(&result);
        if result.is_absolute() {
            log::trace!(
                "join short-circuits at absolute fragment {:?}",
                fragment.as_str()
            );
            return result;
        }
    }
    result
}

// The backtracking combination itself.
//
// The right operand is decomposed from its end backward into a segment list
// plus the byte index where each segment starts, and a head cursor marks the
// first unconsumed segment. The left operand is then walked from its end one
// segment at a time, cancelling its trailing names against the right list's
// leading `..` segments. Explicit arrays and an index keep the state flat;
// no recursion, so pathological `../../..` chains cost only iterations.
fn plus(path1: &str, path2: &str) -> PathValue {
    let mut prefix2 = path2;
    let mut segments: Vec<&str> = Vec::new();
    let mut starts: Vec<usize> = Vec::new();
    while let Some((rest, base)) = chop_basename(prefix2) {
        starts.push(rest.len());
        segments.push(base);
        prefix2 = rest;
    }
    if !prefix2.is_empty() {
        // The right operand is rooted; it overrides the left entirely.
        log::trace!("absolute right operand {path2:?} overrides {path1:?}");
        return PathValue::from_trusted(path2.to_owned());
    }
    segments.reverse();
    starts.reverse();

    let mut head = 0;
    let mut prefix1 = path1.to_owned();
    loop {
        // Leading self-references on the right contribute nothing.
        while head < segments.len() && segments[head] == "." {
            head += 1;
        }
        let Some((rest, base)) = chop_basename(&prefix1) else {
            break;
        };
        let rest_len = rest.len();
        let kept_len = rest_len + base.len();
        if base == "." {
            prefix1.truncate(rest_len);
            continue;
        }
        if base == ".." || head == segments.len() || segments[head] != ".." {
            // This left segment survives and becomes the effective tail.
            prefix1.truncate(kept_len);
            break;
        }
        // An ordinary left name cancels a leading right `..`.
        prefix1.truncate(rest_len);
        head += 1;
    }

    let mut anchored = chop_basename(&prefix1).is_some();
    if !anchored && basename(&prefix1).contains(SEPARATOR) {
        // The remaining prefix is an unremovable root; parent references
        // are no-ops against it.
        while head < segments.len() && segments[head] == ".." {
            head += 1;
        }
        anchored = true;
    }

    if head < segments.len() {
        let suffix = &path2[starts[head]..];
        if anchored {
            PathValue::from_trusted(join_with_separator(&prefix1, suffix))
        } else {
            PathValue::from_trusted(format!("{prefix1}{suffix}"))
        }
    } else if anchored {
        PathValue::from_trusted(prefix1)
    } else {
        // A fully consumed relative path collapses to the current directory.
        PathValue::from_trusted(String::from("."))
    }
}

// The unconsumed suffix always starts at a segment, never at a separator,
// so only the prefix's trailing character decides whether to insert one.
fn join_with_separator(prefix: &str, suffix: &str) -> String {
    if prefix.ends_with(SEPARATOR) {
        format!("{prefix}{suffix}")
    } else {
        format!("{prefix}{SEPARATOR}{suffix}")
    }
}
