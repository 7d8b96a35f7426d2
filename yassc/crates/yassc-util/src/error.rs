//! Core error types for yassc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for source buffer operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Requested range leaves the buffer
    #[error("Range out of bounds: {offset}+{length} exceeds source length {len}")]
    OutOfBounds {
        /// Start of the requested range
        offset: usize,
        /// Requested length in bytes
        length: usize,
        /// Length of the source text
        len: usize,
    },

    /// Range boundary falls inside a multi-byte character
    #[error("Offset {offset} is not on a character boundary")]
    NotCharBoundary {
        /// The offending byte offset
        offset: usize,
    },
}

/// Result type alias for source buffer operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;
