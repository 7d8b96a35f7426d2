//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. Rows and columns are
//! 1-based and counted in characters; the offset is a 0-based byte index.

use yassc_util::Position;

/// Sentinel returned by [`Cursor::current_char`] once the input is exhausted.
///
/// A literal NUL inside the source is still reported as an invalid character:
/// callers must test [`Cursor::is_at_end`] before classifying.
pub const EOF_CHAR: char = '\0';

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use yassc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("SET x");
///
/// assert_eq!(cursor.current_char(), 'S');
/// cursor.advance(false);
/// assert_eq!(cursor.current_char(), 'E');
/// assert_eq!(cursor.column(), 2);
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte offset in the source.
    offset: usize,

    /// Current row (1-based).
    row: u32,

    /// Current column (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned on the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            row: 1,
            column: 1,
        }
    }

    /// Returns the current character, or [`EOF_CHAR`] at the end of input.
    #[inline]
    pub fn current_char(&self) -> char {
        // Fast path for ASCII (most common case)
        match self.source.as_bytes().get(self.offset) {
            None => EOF_CHAR,
            Some(&b) if b < 128 => b as char,
            Some(_) => self.source[self.offset..].chars().next().unwrap_or(EOF_CHAR),
        }
    }

    /// Returns the character after the current one without consuming anything.
    ///
    /// # Example
    ///
    /// ```
    /// use yassc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("<=");
    /// assert_eq!(cursor.peek_char(), '=');
    /// assert_eq!(Cursor::new("<").peek_char(), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self) -> char {
        let mut chars = self.remaining().chars();
        chars.next();
        chars.next().unwrap_or(EOF_CHAR)
    }

    /// Steps over the current character and returns the new current one.
    ///
    /// When `crossing_line` is true the row is incremented and the column
    /// reset to 1, otherwise the column is incremented. The offset always
    /// moves past the consumed character. Advancing at the end of input is a
    /// no-op that keeps yielding [`EOF_CHAR`].
    pub fn advance(&mut self, crossing_line: bool) -> char {
        let consumed = self.current_char();
        if self.is_at_end() {
            return EOF_CHAR;
        }

        self.offset += consumed.len_utf8();
        if crossing_line {
            self.row += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        self.current_char()
    }

    /// Advances over the current character, crossing a line exactly when
    /// that character is a newline.
    #[inline]
    pub fn bump(&mut self) -> char {
        let crossing_line = self.current_char() == '\n';
        self.advance(crossing_line)
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use yassc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("==");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('<'));
    /// assert_eq!(cursor.offset(), 1);
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Returns the position of the current character.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.row, self.column, self.offset)
    }

    /// Returns the current row (1-based).
    #[inline]
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Returns the current column (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte offset.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the source from `start` up to the current offset.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.offset]
    }

    /// Returns the source text from the current offset to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("IF a");
        assert_eq!(cursor.current_char(), 'I');
        assert_eq!(cursor.position(), Position::START);
    }

    #[test]
    fn test_advance_same_line() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.advance(false), 'b');
        assert_eq!(cursor.advance(false), 'c');
        assert_eq!(cursor.position(), Position::new(1, 3, 2));
        assert_eq!(cursor.advance(false), EOF_CHAR);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_advance_crossing_line() {
        let mut cursor = Cursor::new("a\nb");
        cursor.advance(false);
        assert_eq!(cursor.current_char(), '\n');
        assert_eq!(cursor.advance(true), 'b');
        assert_eq!(cursor.position(), Position::new(2, 1, 2));
    }

    #[test]
    fn test_advance_past_end_is_sticky() {
        let mut cursor = Cursor::new("x");
        cursor.advance(false);
        let end = cursor.position();
        assert_eq!(cursor.advance(false), EOF_CHAR);
        assert_eq!(cursor.advance(true), EOF_CHAR);
        assert_eq!(cursor.position(), end);
    }

    #[test]
    fn test_bump_detects_newline() {
        let mut cursor = Cursor::new("\n\nz");
        cursor.bump();
        cursor.bump();
        assert_eq!(cursor.current_char(), 'z');
        assert_eq!(cursor.row(), 3);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_advance_utf8_counts_bytes_and_chars() {
        let mut cursor = Cursor::new("éx");
        assert_eq!(cursor.current_char(), 'é');
        cursor.advance(false);
        assert_eq!(cursor.current_char(), 'x');
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn test_peek_char() {
        let cursor = Cursor::new("//");
        assert_eq!(cursor.peek_char(), '/');
        let cursor = Cursor::new("");
        assert_eq!(cursor.peek_char(), EOF_CHAR);
    }

    #[test]
    fn test_match_char_at_end() {
        let mut cursor = Cursor::new("");
        assert!(!cursor.match_char(EOF_CHAR));
    }

    #[test]
    fn test_slice_from() {
        let mut cursor = Cursor::new("WHILE x");
        let start = cursor.offset();
        for _ in 0..5 {
            cursor.bump();
        }
        assert_eq!(cursor.slice_from(start), "WHILE");
        assert_eq!(cursor.remaining(), " x");
        assert_eq!(cursor.source(), "WHILE x");
    }

    #[test]
    fn test_empty_source() {
        let cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), EOF_CHAR);
    }
}
