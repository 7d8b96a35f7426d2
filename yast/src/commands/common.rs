//! Common types and utilities for yast commands.

use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use yassc_lex::LexError;
use yassc_util::SourceBuffer;

use crate::error::{Result, YastError};

// ============================================================================
// Output Format
// ============================================================================

/// Output formats for the token listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-separated table with a header row.
    Table,
    /// JSON array of token objects.
    Json,
}

impl FromStr for OutputFormat {
    type Err = YastError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(YastError::Validation(format!(
                "{}: {}",
                error_messages::UNKNOWN_FORMAT,
                other
            ))),
        }
    }
}

// ============================================================================
// Source Loading
// ============================================================================

/// Reads a Yassou source file into a [`SourceBuffer`] named after its path.
pub fn read_source(path: &Path) -> Result<SourceBuffer> {
    if !path.exists() {
        return Err(YastError::Validation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(YastError::Validation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    let file = File::open(path)?;
    Ok(SourceBuffer::from_reader(path.display().to_string(), file)?)
}

/// Wraps a lexical error with its rendered diagnostic.
///
/// A literal glued to the next word underlines that whole word.
pub fn lex_failure(path: &Path, buffer: &SourceBuffer, err: &LexError) -> YastError {
    let mut diagnostic = err.to_diagnostic();
    if let LexError::NoConcatViolation { position, .. } = err {
        let run = buffer
            .text()
            .get(position.offset..)
            .map_or(1, |rest| rest.chars().take_while(|c| !c.is_ascii_whitespace()).count());
        diagnostic = diagnostic.with_width(run);
    }

    YastError::Lex {
        path: path.to_path_buf(),
        rendered: diagnostic.render(buffer),
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format";

    /// Error when the worker count is zero.
    pub const ZERO_JOBS: &str = "Number of jobs must be at least 1";

    /// Error when files failed to lex.
    pub const FILES_FAILED: &str = "file(s) failed lexical checks";
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(YastError::Validation(_))
        ));
    }

    #[test]
    fn test_read_source_names_buffer_after_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prog.yass");
        std::fs::write(&path, "OUTPUT 1\n").unwrap();

        let buffer = read_source(&path).unwrap();
        assert_eq!(buffer.text(), "OUTPUT 1\n");
        assert!(buffer.name().ends_with("prog.yass"));
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("/nonexistent/prog.yass")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_read_source_directory() {
        let dir = TempDir::new().unwrap();
        let err = read_source(dir.path()).unwrap_err();
        assert!(err.to_string().contains("not a file"));
    }

    #[test]
    fn test_lex_failure_renders_snippet() {
        let buffer = SourceBuffer::new("bad.yass", "SET a TO 5x\n");
        let err = yassc_lex::tokenize(buffer.text()).unwrap_err();
        let failure = lex_failure(Path::new("bad.yass"), &buffer, &err);
        let text = failure.to_string();
        assert!(text.contains("E1005"));
        assert!(text.contains("bad.yass:1:11"));
    }

    #[test]
    fn test_lex_failure_underlines_glued_word() {
        let buffer = SourceBuffer::new("glue.yass", "OUTPUT \"a\"xyz 1\n");
        let err = yassc_lex::tokenize(buffer.text()).unwrap_err();
        let text = lex_failure(Path::new("glue.yass"), &buffer, &err).to_string();
        assert!(text.contains("E1003"));
        assert!(text.contains("|           ^^^ "));
        assert!(!text.contains("^^^^"));
    }
}
