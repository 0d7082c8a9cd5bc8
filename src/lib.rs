#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # vpath
//!
//! A pure path algebra over POSIX-style path strings.
//!
//! Every operation here is side-effect-free string manipulation: no
//! filesystem access, no symlink resolution, no existence checks. The crate
//! answers three questions about path values — is a path absolute or
//! relative; what is the logical result of concatenating or joining two
//! paths, respecting `.`/`..` semantics; and what is the fully normalized
//! form of a path relative to a notional current-directory context.
//!
//! ## Core Types
//!
//! - [`PathValue`]: immutable wrapper over a path string
//! - [`CurrentDirContext`]: anchor for the [`PathValue::clean`] normalizer
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use vpath::{join_all, PathValue};
//!
//! let base = PathValue::new("a/b").unwrap();
//! let up = PathValue::new("..").unwrap();
//!
//! // Concatenation backtracks through parent references.
//! assert_eq!(base.concat(&up).as_str(), "a");
//!
//! // Joining short-circuits at absolute fragments.
//! let joined = join_all(&[
//!     PathValue::new("a").unwrap(),
//!     PathValue::new("/b").unwrap(),
//! ])
//! .unwrap();
//! assert_eq!(joined.as_str(), "/b");
//! ```
//!
//! All operations are pure and values are immutable, so everything here is
//! freely usable from concurrent callers without coordination.

pub mod clean;
pub mod combine;
pub mod error;
pub mod logging;
pub mod split;
pub mod value;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at crate root for convenience
pub use clean::CurrentDirContext;
pub use combine::join_all;
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use split::{basename, chop_basename, SEPARATOR};
pub use value::PathValue;
