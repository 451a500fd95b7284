//! Crate error type.
//!
//! Almost everything in this crate is a total function; only the filesystem
//! helpers can fail.

use thiserror::Error;

/// Errors from the fallible helpers.
#[derive(Debug, Error)]
pub enum BagError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, BagError>`.
pub type BagResult<T> = Result<T, BagError>;
