//! Indentation lexing.

use crate::config::IndentMode;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Folds the run of spaces and tabs at the start of a line into one
    /// `INDENT` token positioned at its first character.
    pub(crate) fn lex_indent(&mut self) {
        let mut indent = self.begin_token(TokenKind::Indent);
        let start = self.cursor.offset();

        while matches!(self.cursor.current_char(), ' ' | '\t') {
            self.cursor.bump();
        }

        if self.config.indent == IndentMode::Width {
            indent.length = self.cursor.offset() - start;
        }
        self.append(indent);
    }
}
