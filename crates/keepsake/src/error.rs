//! Error types for Keepsake operations.
//!
//! This module provides the main error type [`KeepsakeError`] which wraps
//! the error conditions that can occur while building a page.

use std::io;

use thiserror::Error;

use keepsake_parser::error::ParseError;

/// The main error type for Keepsake operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries the parser diagnostics together with the
/// document source, so callers can render labelled snippets.
#[derive(Debug, Error)]
pub enum KeepsakeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for KeepsakeError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl KeepsakeError {
    /// Create a new `Parse` error with the associated source document.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
