//! Error and diagnostic system for the Keepsake parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//! - Severity levels
//! - Diagnostic collector for accumulating multiple errors and warnings
//!
//! # Example
//!
//! ```
//! # use keepsake_parser::error::{Diagnostic, ErrorCode};
//! # use keepsake_parser::Span;
//!
//! let diag = Diagnostic::error("section id `plan` is used more than once")
//!     .with_code(ErrorCode::E300)
//!     .with_label(Span::new(120..126), "duplicate id")
//!     .with_secondary_label(Span::new(40..46), "first used here")
//!     .with_help("give each section a unique id");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
