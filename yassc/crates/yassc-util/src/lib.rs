//! yassc-util - Core Utilities and Foundation Types
//!
//! Foundation types shared by every stage of the Yassou toolchain:
//!
//! - [`span`] - [`Position`] and the in-memory [`SourceBuffer`] used for
//!   lexeme recovery
//! - [`diagnostic`] - Diagnostic codes and source-snippet rendering
//! - [`error`] - Error types for the operations above

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticCode, Level};
pub use error::{SourceError, SourceResult};
pub use span::{Position, SourceBuffer};
