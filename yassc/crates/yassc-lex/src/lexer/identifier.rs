//! Identifier and reserved word lexing.

use crate::token::{keyword_from_ident, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a word.
    ///
    /// The maximal run of ASCII letters, digits and underscores is scanned
    /// first, then the complete word is looked up in the reserved set, so a
    /// keyword prefix never splits a longer identifier (`FOREACH`, `INTEGERS`).
    pub(crate) fn lex_word(&mut self) {
        let mut word = self.begin_token(TokenKind::Identifier);
        let start = self.cursor.offset();

        while is_word_continue(self.cursor.current_char()) {
            self.cursor.bump();
        }

        let text = self.cursor.slice_from(start);
        word.length = text.len();
        if keyword_from_ident(text).is_some() {
            word.kind = TokenKind::ReservedWord;
        }
        self.append(word);
    }
}

#[inline]
fn is_word_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
