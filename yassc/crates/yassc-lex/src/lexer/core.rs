//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the character dispatcher and
//! the public entry points.

use tracing::{debug, trace};

use crate::config::LexConfig;
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::stream::TokenStream;
use crate::token::{Token, TokenKind};

/// Tokenizes `source` with the default configuration.
///
/// # Example
///
/// ```
/// use yassc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("x = 3.14\n").unwrap();
/// let kinds: Vec<_> = tokens.kinds().collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Identifier, TokenKind::Assignment, TokenKind::Decimal, TokenKind::SentenceBreak]
/// );
/// ```
pub fn tokenize(source: &str) -> LexResult<TokenStream> {
    tokenize_with(source, &LexConfig::default())
}

/// Tokenizes `source` with an explicit configuration.
pub fn tokenize_with(source: &str, config: &LexConfig) -> LexResult<TokenStream> {
    Lexer::new(source, *config).run()
}

/// Lexer for the Yassou language.
///
/// A lexer is built for one source text, consumed by [`Lexer::run`], and
/// yields either the complete token stream or the first lexical error.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Tokens produced so far.
    pub(crate) stream: TokenStream,

    /// Options for this run.
    pub(crate) config: LexConfig,

    /// Set at the start of every line until the first dispatch on it.
    pub(crate) indent_armed: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, config: LexConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            stream: TokenStream::new(),
            config,
            indent_armed: true,
        }
    }

    /// Scans the whole source.
    ///
    /// The stream always ends with a `SENTENCE_BREAK`: either the one for a
    /// final newline, or one of length 1 placed at the end-of-input offset.
    pub fn run(mut self) -> LexResult<TokenStream> {
        if self.config.trace {
            debug!(bytes = self.cursor.source().len(), "tokenize start");
        }

        while !self.cursor.is_at_end() {
            if let Err(err) = self.dispatch() {
                if self.config.trace {
                    debug!(error = %err, tokens = self.stream.len(), "tokenize failed");
                }
                return Err(err);
            }
        }

        let terminated = self
            .stream
            .last()
            .is_some_and(|token| token.kind == TokenKind::SentenceBreak);
        if !terminated {
            let eof = self.begin_token(TokenKind::SentenceBreak);
            self.append(eof);
        }

        if self.config.trace {
            debug!(tokens = self.stream.len(), "tokenize finished");
        }
        Ok(self.stream)
    }

    /// Classifies the current character and hands it to a scanner.
    fn dispatch(&mut self) -> LexResult<()> {
        let c = self.cursor.current_char();
        let line_start = std::mem::replace(&mut self.indent_armed, false);

        if self.config.trace {
            trace!(
                char = ?c,
                row = self.cursor.row(),
                column = self.cursor.column(),
                line_start,
                "dispatch"
            );
        }

        match c {
            '\n' => {
                self.lex_sentence_break();
                Ok(())
            },
            ' ' | '\t' if line_start => {
                self.lex_indent();
                Ok(())
            },
            c if is_separator(c) => {
                self.cursor.bump();
                Ok(())
            },
            c if c.is_control() || !c.is_ascii() => Err(LexError::InvalidCharacter {
                found: c,
                position: self.cursor.position(),
            }),
            '"' => self.lex_string(),
            '~' => self.lex_comment(),
            c if c.is_ascii_alphabetic() => {
                self.lex_word();
                Ok(())
            },
            c if c.is_ascii_digit() || c == '.' => self.lex_number(),
            _ => self.lex_symbol(),
        }
    }

    /// Emits the break for the newline under the cursor and re-arms
    /// indentation for the next line.
    fn lex_sentence_break(&mut self) {
        let token = self.begin_token(TokenKind::SentenceBreak);
        self.append(token);
        self.cursor.advance(true);
        self.indent_armed = true;
    }

    /// Starts a token of length 1 at the cursor's current position.
    #[inline]
    pub(crate) fn begin_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.cursor.position())
    }

    /// Appends a finished token to the stream.
    pub(crate) fn append(&mut self, token: Token) {
        if self.config.trace {
            trace!(
                kind = %token.kind,
                row = token.location.row,
                column = token.location.column,
                offset = token.location.offset,
                length = token.length,
                "token"
            );
        }
        self.stream.push(token);
    }

    /// Enforces that a closed string or comment is followed by whitespace or
    /// the end of input.
    pub(crate) fn expect_separator(&self) -> LexResult<()> {
        let next = self.cursor.current_char();
        if self.cursor.is_at_end() || is_separator(next) {
            Ok(())
        } else {
            Err(LexError::NoConcatViolation {
                found: next,
                position: self.cursor.position(),
            })
        }
    }
}

/// Whitespace that separates tokens. Anything else outside the ASCII range is
/// rejected by the dispatcher.
#[inline]
pub(crate) fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}
