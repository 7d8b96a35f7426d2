//! Lexical error types.
//!
//! Every error stops tokenization at the first violation and carries the
//! position of the offending character.

use thiserror::Error;
use yassc_util::{Diagnostic, DiagnosticCode, Position};

/// A violation of the lexical grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A control character that is not whitespace, or a non-ASCII character
    /// outside a string or comment.
    #[error("invalid character {found:?} at {position}")]
    InvalidCharacter {
        /// The offending character.
        found: char,
        /// Where it occurs.
        position: Position,
    },

    /// A newline or the end of input was reached inside an open string.
    #[error("unterminated string literal at {position}")]
    UnterminatedString {
        /// Where the error occurs.
        position: Position,
    },

    /// A string or comment literal is directly followed by something other
    /// than whitespace.
    #[error("expected whitespace after literal, found {found:?} at {position}")]
    NoConcatViolation {
        /// The offending character.
        found: char,
        /// Where it occurs.
        position: Position,
    },

    /// A second `.` inside a decimal literal.
    #[error("decimal literal has more than one decimal point at {position}")]
    MultipleDecimalPoints {
        /// Where the error occurs.
        position: Position,
    },

    /// A number directly followed by a letter.
    #[error("number directly followed by letter {found:?} at {position}")]
    NumberLetterAdjacency {
        /// The offending character.
        found: char,
        /// Where it occurs.
        position: Position,
    },

    /// A `.` that is neither part of a number nor followed by digits.
    #[error("lone decimal point at {position}")]
    LoneDecimalPoint {
        /// Where the error occurs.
        position: Position,
    },

    /// A printable character with no meaning in the language.
    #[error("unknown symbol {found:?} at {position}")]
    UnknownSymbol {
        /// The offending character.
        found: char,
        /// Where it occurs.
        position: Position,
    },
}

impl LexError {
    /// Position of the offending character.
    pub fn position(&self) -> Position {
        match *self {
            LexError::InvalidCharacter { position, .. }
            | LexError::UnterminatedString { position }
            | LexError::NoConcatViolation { position, .. }
            | LexError::MultipleDecimalPoints { position }
            | LexError::NumberLetterAdjacency { position, .. }
            | LexError::LoneDecimalPoint { position }
            | LexError::UnknownSymbol { position, .. } => position,
        }
    }

    /// Diagnostic code identifying the error kind.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::InvalidCharacter { .. } => DiagnosticCode::E_LEXER_INVALID_CHAR,
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::NoConcatViolation { .. } => DiagnosticCode::E_LEXER_NO_CONCAT,
            LexError::MultipleDecimalPoints { .. } => {
                DiagnosticCode::E_LEXER_MULTIPLE_DECIMAL_POINTS
            },
            LexError::NumberLetterAdjacency { .. } => DiagnosticCode::E_LEXER_NUMBER_LETTER,
            LexError::LoneDecimalPoint { .. } => DiagnosticCode::E_LEXER_LONE_DECIMAL_POINT,
            LexError::UnknownSymbol { .. } => DiagnosticCode::E_LEXER_UNKNOWN_SYMBOL,
        }
    }

    /// Message without the trailing location, for snippet rendering.
    pub fn message(&self) -> String {
        match self {
            LexError::InvalidCharacter { found, .. } => {
                format!("invalid character {}", found.escape_default())
            },
            LexError::UnterminatedString { .. } => "unterminated string literal".to_string(),
            LexError::NoConcatViolation { found, .. } => format!(
                "string or comment must be followed by whitespace, found '{}'",
                found.escape_default()
            ),
            LexError::MultipleDecimalPoints { .. } => {
                "decimal literal has more than one decimal point".to_string()
            },
            LexError::NumberLetterAdjacency { found, .. } => {
                format!("number directly followed by letter '{}'", found)
            },
            LexError::LoneDecimalPoint { .. } => "'.' on its own is not a number".to_string(),
            LexError::UnknownSymbol { found, .. } => format!("unknown symbol '{}'", found),
        }
    }

    /// Converts the error into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.message(), self.position()).with_code(self.code());
        match self {
            LexError::NoConcatViolation { .. } => {
                diagnostic.with_label("insert a space before this character")
            },
            LexError::UnterminatedString { .. } => {
                diagnostic.with_label("string opened on this line is not closed")
            },
            _ => diagnostic,
        }
    }
}

/// Result type alias for lexing.
pub type LexResult<T> = std::result::Result<T, LexError>;
