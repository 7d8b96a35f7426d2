//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Lexer struct, dispatch loop and entry points
//! - `indent` - Leading whitespace at the start of a line
//! - `identifier` - Words and reserved words
//! - `number` - Integer and decimal literals
//! - `string` - String literals
//! - `comment` - Tilde comments
//! - `operator` - Operators and delimiters

mod comment;
mod core;
mod identifier;
mod indent;
mod number;
mod operator;
mod string;

pub use core::{tokenize, tokenize_with, Lexer};
