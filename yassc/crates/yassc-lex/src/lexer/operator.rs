//! Operator and punctuation lexing.
//!
//! Every symbol is one character, except the four comparisons and floor
//! division, which may extend to two.

use crate::error::{LexError, LexResult};
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an operator or delimiter at the cursor.
    ///
    /// # Errors
    ///
    /// `UnknownSymbol` for a printable character outside the symbol set.
    pub(crate) fn lex_symbol(&mut self) -> LexResult<()> {
        let c = self.cursor.current_char();
        let mut token = self.begin_token(TokenKind::Comma);

        token.kind = match c {
            ',' => self.single(TokenKind::Comma),
            '(' => self.single(TokenKind::ExprBegin),
            ')' => self.single(TokenKind::ExprTerminate),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Multiply),
            '%' => self.single(TokenKind::Modulo),
            '^' => self.single(TokenKind::Raise),
            '|' => self.single(TokenKind::Or),
            '&' => self.single(TokenKind::And),
            '/' => self.extended(TokenKind::Divide, '/', TokenKind::FloorDivide),
            '=' => self.extended(TokenKind::Assignment, '=', TokenKind::Equality),
            '<' => self.extended(TokenKind::LessThan, '=', TokenKind::LtEqual),
            '>' => self.extended(TokenKind::GreaterThan, '=', TokenKind::GtEqual),
            '!' => self.extended(TokenKind::Not, '=', TokenKind::NotEqual),
            found => {
                return Err(LexError::UnknownSymbol {
                    found,
                    position: token.location,
                })
            },
        };

        token.length = self.cursor.offset() - token.location.offset;
        self.append(token);
        Ok(())
    }

    #[inline]
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.bump();
        kind
    }

    /// Handles: `/` `//`, `=` `==`, `<` `<=`, `>` `>=`, `!` `!=`
    fn extended(&mut self, short: TokenKind, second: char, long: TokenKind) -> TokenKind {
        self.cursor.bump();
        if self.cursor.match_char(second) {
            long
        } else {
            short
        }
    }
}
