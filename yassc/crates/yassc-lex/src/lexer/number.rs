//! Number literal lexing.
//!
//! Numbers are runs of digits with at most one `.`. A literal starting with a
//! digit begins as `INTEGER` and becomes `DECIMAL` at its point; one starting
//! with `.` is `DECIMAL` from the outset.

use crate::error::{LexError, LexResult};
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer or decimal literal.
    ///
    /// # Errors
    ///
    /// - `MultipleDecimalPoints` at a `.` seen while the literal is already
    ///   `DECIMAL`. With `..` the first point types the literal, so the
    ///   second one is the duplicate.
    /// - `LoneDecimalPoint` for a literal that is exactly `.`.
    /// - `NumberLetterAdjacency` at a letter directly after the literal.
    pub(crate) fn lex_number(&mut self) -> LexResult<()> {
        let first = self.cursor.current_char();
        let kind = if first.is_ascii_digit() {
            TokenKind::Integer
        } else {
            TokenKind::Decimal
        };
        let mut number = self.begin_token(kind);
        let start = self.cursor.offset();
        self.cursor.bump();

        loop {
            match self.cursor.current_char() {
                c if c.is_ascii_digit() => {},
                '.' if number.kind == TokenKind::Decimal => {
                    return Err(LexError::MultipleDecimalPoints {
                        position: self.cursor.position(),
                    });
                },
                '.' => number.kind = TokenKind::Decimal,
                _ => break,
            }
            self.cursor.bump();
        }

        number.length = self.cursor.offset() - start;
        if number.length == 1 && first == '.' {
            return Err(LexError::LoneDecimalPoint {
                position: number.location,
            });
        }

        let next = self.cursor.current_char();
        if next.is_ascii_alphabetic() {
            return Err(LexError::NumberLetterAdjacency {
                found: next,
                position: self.cursor.position(),
            });
        }

        self.append(number);
        Ok(())
    }
}
