//! Crate error type.
//!
//! Most "failures" in this crate are deliberately benign - deleting a missing
//! value or inserting a duplicate leaves the tree unchanged, and lookups
//! return `Option`. The variants here cover the two cases that are genuine
//! contract violations or absences the caller must handle.

use thiserror::Error;

/// Errors returned by tree and queue operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `dequeue` was called on an empty [`Queue`](crate::Queue).
    #[error("dequeue on an empty queue")]
    EmptyQueue,

    /// The value passed to [`Tree::depth`](crate::Tree::depth) is not present
    /// in the tree.
    #[error("value is not present in the tree")]
    NotFound,
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;
