//! The ordered token sequence handed to the parser.

use std::ops::Index;
use std::slice;

use crate::token::{Token, TokenKind};

/// Tokens in source order.
///
/// Only the lexer appends; once returned from [`tokenize`](crate::tokenize)
/// the stream is read-only. Offsets are strictly increasing and lexemes never
/// overlap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends `token` at the tail.
    pub(crate) fn push(&mut self, token: Token) {
        debug_assert!(token.length >= 1, "zero-length token {:?}", token);
        debug_assert!(
            self.tokens
                .last()
                .map_or(true, |last| last.end() <= token.location.offset),
            "token {:?} overlaps its predecessor",
            token
        );
        self.tokens.push(token);
    }

    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the stream holds no tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// First token.
    #[inline]
    pub fn first(&self) -> Option<&Token> {
        self.tokens.first()
    }

    /// Last token.
    #[inline]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Forward traversal.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Kinds in stream order.
    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.tokens.iter().map(|token| token.kind)
    }

    /// Tokens as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Consumes the stream, returning its tokens.
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
