//! Diagnostic codes for categorizing lexical errors.
//!
//! Every lexical error kind has exactly one code so tools can match on it
//! without parsing message text.
//!
//! # Examples
//!
//! ```
//! use yassc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1002);
//! assert_eq!(code.as_str(), "E1002");
//! ```

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}` with the number zero-padded to
/// four digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// E1001: Lexer - Disallowed control or non-ASCII character
    pub const E_LEXER_INVALID_CHAR: Self = Self::new("E", 1001);
    /// E1002: Lexer - Unterminated string literal
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1003: Lexer - String or comment directly followed by another token
    pub const E_LEXER_NO_CONCAT: Self = Self::new("E", 1003);
    /// E1004: Lexer - Decimal literal with more than one point
    pub const E_LEXER_MULTIPLE_DECIMAL_POINTS: Self = Self::new("E", 1004);
    /// E1005: Lexer - Number directly followed by a letter
    pub const E_LEXER_NUMBER_LETTER: Self = Self::new("E", 1005);
    /// E1006: Lexer - A `.` on its own
    pub const E_LEXER_LONE_DECIMAL_POINT: Self = Self::new("E", 1006);
    /// E1007: Lexer - Unknown symbol
    pub const E_LEXER_UNKNOWN_SYMBOL: Self = Self::new("E", 1007);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}
