//! String literal lexing.
//!
//! A string produces up to three tokens: the opening `STR_DELIMITER`, the
//! `STRING` body and the closing `STR_DELIMITER`. Escapes are kept verbatim;
//! a backslash only stops the following character from closing the literal.

use crate::error::{LexError, LexResult};
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal starting at the opening quote.
    ///
    /// # Errors
    ///
    /// `UnterminatedString` at the newline or end of input reached before the
    /// closing quote, and `NoConcatViolation` when the closing quote is glued
    /// to the next token.
    pub(crate) fn lex_string(&mut self) -> LexResult<()> {
        let open = self.begin_token(TokenKind::StrDelimiter);
        self.append(open);
        self.cursor.bump();

        let mut body = self.begin_token(TokenKind::String);
        let start = self.cursor.offset();

        loop {
            if self.cursor.is_at_end() {
                return Err(self.unterminated());
            }
            match self.cursor.current_char() {
                '"' => break,
                '\n' => return Err(self.unterminated()),
                '\\' => {
                    self.cursor.bump();
                    self.cursor.bump();
                },
                _ => {
                    self.cursor.bump();
                },
            }
        }

        body.length = self.cursor.offset() - start;
        if body.length > 0 {
            self.append(body);
        }

        let close = self.begin_token(TokenKind::StrDelimiter);
        self.append(close);
        self.cursor.bump();

        self.expect_separator()
    }

    fn unterminated(&self) -> LexError {
        LexError::UnterminatedString {
            position: self.cursor.position(),
        }
    }
}
