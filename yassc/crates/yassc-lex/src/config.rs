//! Lexer configuration.
//!
//! Options are passed explicitly into each [`tokenize_with`](crate::tokenize_with)
//! call; there is no process-wide lexer state.

use std::fmt;
use std::str::FromStr;

/// How the length of an `INDENT` token is recorded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IndentMode {
    /// Length equals the number of spaces and tabs in the leading run.
    #[default]
    Width,
    /// Length is always 1; the run's width is only recoverable from the
    /// column of the next token.
    Marker,
}

impl IndentMode {
    /// Lower-case name used by configuration files and flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            IndentMode::Width => "width",
            IndentMode::Marker => "marker",
        }
    }
}

impl fmt::Display for IndentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "width" => Ok(IndentMode::Width),
            "marker" => Ok(IndentMode::Marker),
            other => Err(format!("unknown indent mode '{}' (expected width or marker)", other)),
        }
    }
}

/// Options for a single tokenization run.
///
/// # Example
///
/// ```
/// use yassc_lex::{IndentMode, LexConfig};
///
/// let config = LexConfig::default().with_trace(true).with_indent(IndentMode::Marker);
/// assert!(config.trace);
/// assert_eq!(config.indent, IndentMode::Marker);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexConfig {
    /// Emit a `tracing` event for every dispatch decision and appended token.
    pub trace: bool,
    /// How `INDENT` lengths are recorded.
    pub indent: IndentMode,
}

impl LexConfig {
    /// Enables or disables per-token tracing.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Sets the indentation length policy.
    pub fn with_indent(mut self, indent: IndentMode) -> Self {
        self.indent = indent;
        self
    }
}
