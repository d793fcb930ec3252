//! Error types shared across the crate.
//!
//! Type errors never show up here: an ill-typed expression does not compile.
//! What remains are usage errors on result fields, sink failures while
//! rendering, and errors raised by the in-memory row buffer.

use std::fmt;
use thiserror::Error;

/// Errors raised when reading a result field that holds no row.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    /// The field was never filled by a fetch, or the cursor moved past the
    /// last row. Carries the name of the accessor that was called.
    #[error("accessing {0} in non-existing row")]
    NonExistentRow(&'static str),
}

/// Errors that can occur while serializing an expression to dialect text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SerializeError {
    #[error("Failed to write to output sink")]
    Fmt(#[from] fmt::Error),

    #[error(transparent)]
    Access(#[from] AccessError),
}

/// Errors raised by [`MemoryRowBuffer`](crate::result::MemoryRowBuffer).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("Column index {index} out of bounds for row with {width} columns")]
    ColumnOutOfRange { index: usize, width: usize },
}

/// Result type for serialization.
pub type SerializeResult<T> = Result<T, SerializeError>;
