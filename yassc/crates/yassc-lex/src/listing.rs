//! Tabular token listing.
//!
//! Renders a token stream as one row per token, with the newline and
//! end-of-input sentence breaks shown as `\n` and `EOF`.

use std::fmt;

use crate::stream::TokenStream;
use crate::token::{Token, TokenKind};

/// Width of the value column in the rendered table.
const VALUE_WIDTH: usize = 20;

/// One row of a [`TokenListing`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListingRow<'a> {
    /// 1-based line of the token.
    pub row: u32,
    /// 1-based column of the token.
    pub column: u32,
    /// Source text, or `\n` / `EOF` for sentence breaks.
    pub value: &'a str,
    /// Length in bytes.
    pub length: usize,
    /// Token kind.
    pub kind: TokenKind,
}

/// A token stream paired with the source it was produced from.
#[derive(Clone, Copy, Debug)]
pub struct TokenListing<'a> {
    stream: &'a TokenStream,
    source: &'a str,
}

impl<'a> TokenListing<'a> {
    /// Pairs `stream` with the `source` it was lexed from.
    pub fn new(stream: &'a TokenStream, source: &'a str) -> Self {
        Self { stream, source }
    }

    /// Rows in stream order.
    pub fn rows(&self) -> impl Iterator<Item = ListingRow<'a>> + 'a {
        let (stream, source) = (self.stream, self.source);
        stream.iter().map(move |token| ListingRow {
            row: token.location.row,
            column: token.location.column,
            value: display_value(token, source),
            length: token.length,
            kind: token.kind,
        })
    }
}

fn display_value<'a>(token: &Token, source: &'a str) -> &'a str {
    match token.kind {
        TokenKind::SentenceBreak if token.location.offset >= source.len() => "EOF",
        TokenKind::SentenceBreak => "\\n",
        _ => token.lexeme(source),
    }
}

impl fmt::Display for TokenListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ROW\tCOL\t{:<width$}\tLENGTH", "VALUE", width = VALUE_WIDTH)?;
        for row in self.rows() {
            writeln!(
                f,
                "{}\t{}\t{:<width$}\t{}",
                row.row,
                row.column,
                row.value,
                row.length,
                width = VALUE_WIDTH
            )?;
        }
        Ok(())
    }
}
