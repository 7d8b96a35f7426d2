//! Diagnostic module - Error reporting infrastructure.
//!
//! A [`Diagnostic`] pairs a message with the [`Position`] it concerns and can
//! render itself against the [`SourceBuffer`] it came from.
//!
//! # Examples
//!
//! ```
//! use yassc_util::diagnostic::{Diagnostic, DiagnosticCode};
//! use yassc_util::span::{Position, SourceBuffer};
//!
//! let source = SourceBuffer::new("main.yass", "x = #");
//! let diag = Diagnostic::error("unknown symbol '#'", Position::new(1, 5, 4))
//!     .with_code(DiagnosticCode::E_LEXER_UNKNOWN_SYMBOL);
//!
//! let rendered = diag.render(&source);
//! assert!(rendered.starts_with("error[E1007]: unknown symbol '#'"));
//! assert!(rendered.contains("--> main.yass:1:5"));
//! ```

mod codes;

pub use codes::DiagnosticCode;

use std::fmt;

use crate::span::{Position, SourceBuffer};

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that stops tokenization
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Location of the offending character
    pub position: Position,
    /// Number of characters to underline (at least one caret is drawn)
    pub width: usize,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Optional label printed after the carets
    pub label: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, position: Position) -> Self {
        Self {
            level,
            message: message.into(),
            position,
            width: 1,
            code: None,
            label: None,
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, position: Position) -> Self {
        Self::new(Level::Error, message, position)
    }

    /// Attach a diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the underline width in characters
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    /// Set the label printed under the source line
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Render the diagnostic with a snippet of the offending line.
    ///
    /// Tabs before the error column are reproduced in the caret line so the
    /// caret stays aligned whatever the terminal's tab width.
    pub fn render(&self, source: &SourceBuffer) -> String {
        let mut out = String::new();

        match self.code {
            Some(code) => out.push_str(&format!("{}[{}]: {}\n", self.level, code, self.message)),
            None => out.push_str(&format!("{}: {}\n", self.level, self.message)),
        }

        let row = self.position.row as usize;
        let gutter = row.to_string().len();
        out.push_str(&format!(
            "{:>width$}--> {}:{}\n",
            "",
            source.name(),
            self.position,
            width = gutter
        ));

        let Some(line) = source.line_at(row) else {
            return out;
        };

        out.push_str(&format!("{:>width$} |\n", "", width = gutter));
        out.push_str(&format!("{} | {}\n", row, line));
        out.push_str(&format!("{:>width$} | ", "", width = gutter));

        let lead = (self.position.column as usize).saturating_sub(1);
        for c in line.chars().chain(std::iter::repeat(' ')).take(lead) {
            out.push(if c == '\t' { '\t' } else { ' ' });
        }
        out.push_str(&"^".repeat(self.width.max(1)));

        if let Some(ref label) = self.label {
            out.push(' ');
            out.push_str(label);
        }
        out.push('\n');

        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {} at {}", self.level, code, self.message, self.position),
            None => write!(f, "{}: {} at {}", self.level, self.message, self.position),
        }
    }
}
