//! Span module - Source location tracking.
//!
//! This module provides the [`Position`] type used to tag every token and
//! every lexical error, and the [`SourceBuffer`] that owns the program text
//! so lexemes can be recovered by `(offset, length)`.
//!
//! # Examples
//!
//! ```
//! use yassc_util::span::{Position, SourceBuffer};
//!
//! let source = SourceBuffer::from("SET x TO 1\n");
//! let pos = Position::new(1, 5, 4);
//! assert_eq!(source.slice(pos.offset, 1).unwrap(), "x");
//! ```

mod source_buffer;

pub use source_buffer::SourceBuffer;

use std::fmt;

/// Location of a single character in the source text.
///
/// `row` and `column` are 1-based and meant for humans; `offset` is the
/// 0-based byte index and is the authoritative coordinate used for slicing.
///
/// # Examples
///
/// ```
/// use yassc_util::span::Position;
///
/// let pos = Position::new(3, 7, 42);
/// assert_eq!(pos.to_string(), "3:7");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number (1-based)
    pub row: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
    /// Byte offset from the start of the source (0-based)
    pub offset: usize,
}

impl Position {
    /// The position of the first character of any source.
    pub const START: Position = Position {
        row: 1,
        column: 1,
        offset: 0,
    };

    /// Create a new position
    ///
    /// # Examples
    ///
    /// ```
    /// use yassc_util::span::Position;
    ///
    /// let pos = Position::new(1, 1, 0);
    /// assert_eq!(pos, Position::START);
    /// ```
    #[inline]
    pub const fn new(row: u32, column: u32, offset: usize) -> Self {
        Self {
            row,
            column,
            offset,
        }
    }
}

impl Default for Position {
    #[inline]
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}
