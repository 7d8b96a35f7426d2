//! yassc-lex - Lexical Analyzer for the Yassou Language
//!
//! This crate turns Yassou source text into an ordered stream of typed,
//! position-tagged tokens for the parser. Yassou is line oriented: every line
//! ends in a `SENTENCE_BREAK`, and leading whitespace becomes an `INDENT`.
//!
//! # Example Usage
//!
//! ```
//! use yassc_lex::{tokenize, TokenKind};
//!
//! let source = "IF x >= 10 THEN\n    OUTPUT \"big\"\n";
//! let tokens = tokenize(source).unwrap();
//!
//! assert_eq!(tokens[0].kind, TokenKind::ReservedWord);
//! assert_eq!(tokens[2].kind, TokenKind::GtEqual);
//! assert_eq!(tokens[2].lexeme(source), ">=");
//! ```
//!
//! Lexing stops at the first violation of the lexical grammar:
//!
//! ```
//! use yassc_lex::{tokenize, LexError};
//!
//! let err = tokenize("SET n TO 5x\n").unwrap_err();
//! assert!(matches!(err, LexError::NumberLetterAdjacency { found: 'x', .. }));
//! assert_eq!(err.position().column, 11);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, reserved words and the `Token` record
//! - [`stream`] - The token sequence returned by the lexer
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`config`] - Per-run lexer options
//! - [`error`] - Lexical errors
//! - [`listing`] - Tabular rendering of a token stream
//!
//! # Token Categories
//!
//! ## Structural
//!
//! - **SENTENCE_BREAK**: each newline, plus one at end of input when the
//!   source does not end in a newline
//! - **INDENT**: the space/tab run at the start of a line
//!
//! ## Reserved Words
//!
//! `AS`, `BOOLEAN`, `BY`, `DECIMAL`, `DO`, `ELSE`, `FALSE`, `FOR`, `IF`,
//! `INPUT`, `INTEGER`, `OUTPUT`, `SET`, `STRING`, `THEN`, `TO`, `TRUE`,
//! `WHILE`. Matching is exact and case sensitive.
//!
//! ## Literals
//!
//! - **Integer**: `42`
//! - **Decimal**: `3.14`, `.5`, `1.`
//! - **String**: `"hello"`, emitted between two `STR_DELIMITER` tokens
//! - **Comment**: `~ note ~` or `~ to end of line`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `//`, `%`, `^`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Logical**: `|`, `&`, `!`
//! - **Assignment**: `=`
//! - **Delimiters**: `,`, `(`, `)`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod listing;
pub mod stream;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use config::{IndentMode, LexConfig};
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::{tokenize, tokenize_with, Lexer};
pub use listing::{ListingRow, TokenListing};
pub use stream::TokenStream;
pub use token::{keyword_from_ident, Keyword, Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;
    use yassc_util::{Position, SourceBuffer};

    fn lex_all(source: &str) -> Vec<(TokenKind, &str)> {
        let tokens = tokenize(source).unwrap();
        tokens
            .iter()
            .map(|t| (t.kind, t.lexeme(source)))
            .collect()
    }

    #[test]
    fn test_assignment_statement() {
        assert_eq!(
            lex_all("SET total TO total + 1\n"),
            vec![
                (TokenKind::ReservedWord, "SET"),
                (TokenKind::Identifier, "total"),
                (TokenKind::ReservedWord, "TO"),
                (TokenKind::Identifier, "total"),
                (TokenKind::Plus, "+"),
                (TokenKind::Integer, "1"),
                (TokenKind::SentenceBreak, "\n"),
            ]
        );
    }

    #[test]
    fn test_block_with_indentation() {
        let source = "WHILE i < 3 DO\n\tOUTPUT i\nOUTPUT \"done\"";
        let kinds: Vec<_> = tokenize(source).unwrap().kinds().collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::ReservedWord,
                TokenKind::Identifier,
                TokenKind::LessThan,
                TokenKind::Integer,
                TokenKind::ReservedWord,
                TokenKind::SentenceBreak,
                TokenKind::Indent,
                TokenKind::ReservedWord,
                TokenKind::Identifier,
                TokenKind::SentenceBreak,
                TokenKind::ReservedWord,
                TokenKind::StrDelimiter,
                TokenKind::String,
                TokenKind::StrDelimiter,
                TokenKind::SentenceBreak,
            ]
        );
    }

    #[test]
    fn test_expression_with_all_operator_groups() {
        let source = "x = (a // 2) ^ b % c != !d | e & f";
        let kinds: Vec<_> = tokenize(source).unwrap().kinds().collect();
        assert!(kinds.contains(&TokenKind::FloorDivide));
        assert!(kinds.contains(&TokenKind::NotEqual));
        assert!(kinds.contains(&TokenKind::Not));
        assert!(kinds.contains(&TokenKind::Or));
        assert!(kinds.contains(&TokenKind::And));
        assert_eq!(kinds.last(), Some(&TokenKind::SentenceBreak));
    }

    #[test]
    fn test_error_renders_against_buffer() {
        let buffer = SourceBuffer::new("main.yass", "SET a TO 1\nOUTPUT \"a\"x\n");
        let err = tokenize(buffer.text()).unwrap_err();
        assert_eq!(err.position(), Position::new(2, 11, 21));

        let rendered = err.to_diagnostic().render(&buffer);
        assert!(rendered.starts_with("error[E1003]"));
        assert!(rendered.contains("main.yass:2:11"));
        assert!(rendered.contains("2 | OUTPUT \"a\"x"));
    }

    #[test]
    fn test_lexemes_recovered_through_buffer() {
        let buffer = SourceBuffer::new("t.yass", "OUTPUT 3.5\n");
        let tokens = tokenize(buffer.text()).unwrap();
        let number = tokens[1];
        assert_eq!(
            buffer.slice(number.location.offset, number.length).unwrap(),
            "3.5"
        );
    }
}
