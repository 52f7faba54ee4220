//! Shared error types used across submodules.

use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum EmFieldsError {
    /// Raised when a component index falls outside the three stored components.
    #[error("component index {index} out of range for a {len}-component field")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of components held by the field.
        len: usize,
    },
    /// Wraps failures while writing reports.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
