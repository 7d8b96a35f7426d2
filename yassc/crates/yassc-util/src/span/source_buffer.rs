//! In-memory source buffer for lexeme recovery.
//!
//! The tokenizer never re-reads its input: the whole program is held here and
//! every token's text is recovered by slicing `(offset, length)`.

use std::io::Read;
use std::sync::Arc;

use crate::error::{SourceError, SourceResult};

/// The full text of one Yassou program plus precomputed line starts.
///
/// # Examples
///
/// ```
/// use yassc_util::span::SourceBuffer;
///
/// let source = SourceBuffer::new("main.yass", "OUTPUT x\nSET y TO 2");
/// assert_eq!(source.name(), "main.yass");
/// assert_eq!(source.line_count(), 2);
/// assert_eq!(source.line_at(2), Some("SET y TO 2"));
/// ```
#[derive(Clone)]
pub struct SourceBuffer {
    /// Display name (path or `<stdin>`)
    name: String,
    /// Program text
    text: Arc<str>,
    /// Byte offset of the first character of every line
    line_starts: Arc<[usize]>,
}

static_assertions::assert_impl_all!(SourceBuffer: Send, Sync);

impl SourceBuffer {
    /// Create a new source buffer
    ///
    /// # Arguments
    ///
    /// * `name` - File name or display name
    /// * `text` - Program text
    pub fn new(name: impl Into<String>, text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        let line_starts = Self::line_starts(&text);
        Self {
            name: name.into(),
            text,
            line_starts,
        }
    }

    /// Read a whole program from `reader`.
    ///
    /// The reader is owned by this call and dropped before it returns, on the
    /// error path as well as on success.
    ///
    /// # Examples
    ///
    /// ```
    /// use yassc_util::span::SourceBuffer;
    ///
    /// let source = SourceBuffer::from_reader("mem", "IF a THEN".as_bytes()).unwrap();
    /// assert_eq!(source.text(), "IF a THEN");
    /// ```
    pub fn from_reader(name: impl Into<String>, mut reader: impl Read) -> std::io::Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::new(name, text))
    }

    fn line_starts(text: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the display name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the program text
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the program text in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if the program text is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of lines, counting a trailing partial line
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Recover the lexeme that starts at `offset` and spans `length` bytes.
    ///
    /// # Returns
    ///
    /// * `Ok(&str)` - The lexeme text
    /// * `Err(SourceError)` - The range leaves the buffer or splits a character
    ///
    /// # Examples
    ///
    /// ```
    /// use yassc_util::span::SourceBuffer;
    ///
    /// let source = SourceBuffer::from("x = 3.14");
    /// assert_eq!(source.slice(4, 4).unwrap(), "3.14");
    /// assert!(source.slice(6, 10).is_err());
    /// ```
    pub fn slice(&self, offset: usize, length: usize) -> SourceResult<&str> {
        let end = offset
            .checked_add(length)
            .filter(|&end| end <= self.text.len())
            .ok_or(SourceError::OutOfBounds {
                offset,
                length,
                len: self.text.len(),
            })?;

        if !self.text.is_char_boundary(offset) {
            return Err(SourceError::NotCharBoundary { offset });
        }
        if !self.text.is_char_boundary(end) {
            return Err(SourceError::NotCharBoundary { offset: end });
        }

        Ok(&self.text[offset..end])
    }

    /// Get a specific source line (1-based), without its line terminator
    pub fn line_at(&self, row: usize) -> Option<&str> {
        if row == 0 {
            return None;
        }
        let start = *self.line_starts.get(row - 1)?;
        let end = self
            .line_starts
            .get(row)
            .copied()
            .unwrap_or(self.text.len());

        Some(self.text[start..end].trim_end_matches(['\n', '\r']))
    }
}

impl From<&str> for SourceBuffer {
    fn from(text: &str) -> Self {
        Self::new("<memory>", text)
    }
}

impl From<String> for SourceBuffer {
    fn from(text: String) -> Self {
        Self::new("<memory>", text)
    }
}

impl std::fmt::Debug for SourceBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceBuffer")
            .field("name", &self.name)
            .field("len", &self.len())
            .field("line_count", &self.line_count())
            .finish()
    }
}
