//! Comment lexing.
//!
//! Comments open with `~` and close at the next `~` or at the end of the line.

use crate::error::LexResult;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a comment starting at its `~`.
    ///
    /// A closing `~` is part of the token; a newline is not, and is left for
    /// the dispatcher to emit as a sentence break.
    pub(crate) fn lex_comment(&mut self) -> LexResult<()> {
        let mut comment = self.begin_token(TokenKind::Comment);
        let start = self.cursor.offset();
        self.cursor.bump();

        while !self.cursor.is_at_end() {
            match self.cursor.current_char() {
                '\n' => break,
                '~' => {
                    self.cursor.bump();
                    break;
                },
                _ => {
                    self.cursor.bump();
                },
            }
        }

        comment.length = self.cursor.offset() - start;
        self.append(comment);
        self.expect_separator()
    }
}
