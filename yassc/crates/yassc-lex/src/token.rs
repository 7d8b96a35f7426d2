//! Token type definitions.
//!
//! A [`Token`] is a kind plus the location and byte length of its lexeme; the
//! text itself stays in the source and is recovered with [`Token::lexeme`].

use std::fmt;
use std::ops::Range;

use yassc_util::Position;

/// The closed set of token kinds produced by the lexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Structural
    /// End of a line or end of input
    SentenceBreak,
    /// Leading whitespace run of a line
    Indent,

    // Literals
    /// `42`
    Integer,
    /// `3.14`, `.5`, `1.`
    Decimal,
    /// Contents between two quotes, escapes left uninterpreted
    String,
    /// An opening or closing `"`
    StrDelimiter,
    /// `~ ... ~` or `~ ...` up to the end of the line
    Comment,

    // Words
    /// User-defined name
    Identifier,
    /// One of the built-in all-uppercase keywords
    ReservedWord,

    // Operators and delimiters
    /// `,`
    Comma,
    /// `(`
    ExprBegin,
    /// `)`
    ExprTerminate,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `//`
    FloorDivide,
    /// `%`
    Modulo,
    /// `^`
    Raise,
    /// `|`
    Or,
    /// `&`
    And,
    /// `=`
    Assignment,
    /// `==`
    Equality,
    /// `<`
    LessThan,
    /// `<=`
    LtEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GtEqual,
    /// `!`
    Not,
    /// `!=`
    NotEqual,
}

impl TokenKind {
    /// Returns the canonical upper-case name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::SentenceBreak => "SENTENCE_BREAK",
            TokenKind::Indent => "INDENT",
            TokenKind::Integer => "INTEGER",
            TokenKind::Decimal => "DECIMAL",
            TokenKind::String => "STRING",
            TokenKind::StrDelimiter => "STR_DELIMITER",
            TokenKind::Comment => "COMMENT",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::ReservedWord => "RESERVED_WORD",
            TokenKind::Comma => "COMMA",
            TokenKind::ExprBegin => "EXPR_BEGIN",
            TokenKind::ExprTerminate => "EXPR_TERMINATE",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::FloorDivide => "FLOOR_DIVIDE",
            TokenKind::Modulo => "MODULO",
            TokenKind::Raise => "RAISE",
            TokenKind::Or => "OR",
            TokenKind::And => "AND",
            TokenKind::Assignment => "ASSIGNMENT",
            TokenKind::Equality => "EQUALITY",
            TokenKind::LessThan => "LESS_THAN",
            TokenKind::LtEqual => "LT_EQUAL",
            TokenKind::GreaterThan => "GREATER_THAN",
            TokenKind::GtEqual => "GT_EQUAL",
            TokenKind::Not => "NOT",
            TokenKind::NotEqual => "NOT_EQUAL",
        }
    }

    /// Returns true for kinds whose lexeme carries a value a parser reads:
    /// strings, numbers and words.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::String
                | TokenKind::Integer
                | TokenKind::Decimal
                | TokenKind::Identifier
                | TokenKind::ReservedWord
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The built-in reserved words. Matching is case-sensitive: only the
/// all-uppercase spelling is reserved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Keyword {
    /// `AS`
    As,
    /// `BY`
    By,
    /// `BOOLEAN`
    Boolean,
    /// `DO`
    Do,
    /// `DECIMAL`
    Decimal,
    /// `ELSE`
    Else,
    /// `FALSE`
    False,
    /// `FOR`
    For,
    /// `IF`
    If,
    /// `INPUT`
    Input,
    /// `INTEGER`
    Integer,
    /// `OUTPUT`
    Output,
    /// `SET`
    Set,
    /// `STRING`
    String,
    /// `THEN`
    Then,
    /// `TO`
    To,
    /// `TRUE`
    True,
    /// `WHILE`
    While,
}

impl Keyword {
    /// Every reserved word, in alphabetical order of its spelling.
    pub const ALL: [Keyword; 18] = [
        Keyword::As,
        Keyword::Boolean,
        Keyword::By,
        Keyword::Decimal,
        Keyword::Do,
        Keyword::Else,
        Keyword::False,
        Keyword::For,
        Keyword::If,
        Keyword::Input,
        Keyword::Integer,
        Keyword::Output,
        Keyword::Set,
        Keyword::String,
        Keyword::Then,
        Keyword::To,
        Keyword::True,
        Keyword::While,
    ];

    /// Returns the source spelling of this keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::As => "AS",
            Keyword::By => "BY",
            Keyword::Boolean => "BOOLEAN",
            Keyword::Do => "DO",
            Keyword::Decimal => "DECIMAL",
            Keyword::Else => "ELSE",
            Keyword::False => "FALSE",
            Keyword::For => "FOR",
            Keyword::If => "IF",
            Keyword::Input => "INPUT",
            Keyword::Integer => "INTEGER",
            Keyword::Output => "OUTPUT",
            Keyword::Set => "SET",
            Keyword::String => "STRING",
            Keyword::Then => "THEN",
            Keyword::To => "TO",
            Keyword::True => "TRUE",
            Keyword::While => "WHILE",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Looks up a complete scanned word in the reserved set.
///
/// # Example
///
/// ```
/// use yassc_lex::token::{keyword_from_ident, Keyword};
///
/// assert_eq!(keyword_from_ident("WHILE"), Some(Keyword::While));
/// assert_eq!(keyword_from_ident("While"), None);
/// assert_eq!(keyword_from_ident("FOREACH"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<Keyword> {
    let keyword = match ident {
        "AS" => Keyword::As,
        "BY" => Keyword::By,
        "BOOLEAN" => Keyword::Boolean,
        "DO" => Keyword::Do,
        "DECIMAL" => Keyword::Decimal,
        "ELSE" => Keyword::Else,
        "FALSE" => Keyword::False,
        "FOR" => Keyword::For,
        "IF" => Keyword::If,
        "INPUT" => Keyword::Input,
        "INTEGER" => Keyword::Integer,
        "OUTPUT" => Keyword::Output,
        "SET" => Keyword::Set,
        "STRING" => Keyword::String,
        "THEN" => Keyword::Then,
        "TO" => Keyword::To,
        "TRUE" => Keyword::True,
        "WHILE" => Keyword::While,
        _ => return None,
    };
    Some(keyword)
}

/// A single lexical token.
///
/// `location` is the position of the first character and `length` the
/// number of bytes of the lexeme. `length` is never zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// What the lexeme is
    pub kind: TokenKind,
    /// Position of the first character
    pub location: Position,
    /// Lexeme length in bytes
    pub length: usize,
}

impl Token {
    /// Creates a token of length 1 at `location`.
    #[inline]
    pub fn new(kind: TokenKind, location: Position) -> Self {
        Self {
            kind,
            location,
            length: 1,
        }
    }

    /// Byte offset one past the last byte of the lexeme.
    #[inline]
    pub fn end(&self) -> usize {
        self.location.offset + self.length
    }

    /// Byte range of the lexeme.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.location.offset..self.end()
    }

    /// Recovers the lexeme from the source this token was produced from.
    ///
    /// The end-of-input sentence break lies past the last byte and yields `""`.
    ///
    /// # Example
    ///
    /// ```
    /// use yassc_lex::tokenize;
    ///
    /// let source = "SET total TO 10";
    /// let tokens = tokenize(source).unwrap();
    /// assert_eq!(tokens[1].lexeme(source), "total");
    /// ```
    pub fn lexeme<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span()).unwrap_or("")
    }

    /// The keyword this token spells, for `RESERVED_WORD` tokens.
    pub fn keyword(&self, source: &str) -> Option<Keyword> {
        if self.kind != TokenKind::ReservedWord {
            return None;
        }
        keyword_from_ident(self.lexeme(source))
    }
}
