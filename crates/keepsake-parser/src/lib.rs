//! # Keepsake Parser
//!
//! Parser for Keepsake content documents. This crate turns the TOML source of
//! a greeting page into the [`Page`] content model, and provides the inline
//! markup renderer used on every prose string.
//!
//! ## Usage
//!
//! ```
//! # use keepsake_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         title = "Happy New Year"
//!
//!         [[sections]]
//!         id = "end"
//!         kind = "closing"
//!         heading = "See you next year"
//!         messages = ["Keep **going**."]
//!     "#;
//!
//!     let parsed = parse(source)?;
//!     assert_eq!(parsed.page().sections().len(), 1);
//!     assert!(parsed.warnings().is_empty());
//!     Ok(())
//! }
//! ```

mod document;
mod elaborate;
pub mod error;
pub mod markup;
mod span;

pub use span::Span;

use keepsake_core::content::Page;
use log::debug;

use elaborate::Builder;
use error::{Diagnostic, ErrorCode, ParseError};

/// A successfully parsed document.
///
/// Parsing succeeds when the document has no errors; it may still carry
/// warnings about content that renders, but probably not as intended.
#[derive(Debug)]
pub struct Parsed {
    page: Page,
    warnings: Vec<Diagnostic>,
}

impl Parsed {
    /// The elaborated page.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Warnings found while parsing.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Splits into the page and its warnings.
    pub fn into_parts(self) -> (Page, Vec<Diagnostic>) {
        (self.page, self.warnings)
    }
}

/// Parse a content document into a page.
///
/// This is the main entry point. It runs two phases:
///
/// 1. **Deserialize** - Read the TOML into a raw document, keeping source spans
/// 2. **Elaborate** - Validate and convert into the content model
///
/// # Returns
///
/// Returns the [`Parsed`] page and its warnings on success, or a
/// [`ParseError`] holding every diagnostic when the document has errors.
pub fn parse(source: &str) -> Result<Parsed, ParseError> {
    debug!(len = source.len(); "Parsing content document");

    let raw = document::from_str(source).map_err(|err| syntax_error(&err, source))?;
    let (page, warnings) = Builder::new(source).build(raw)?;

    Ok(Parsed { page, warnings })
}

/// Converts a TOML error into an `E001` diagnostic.
fn syntax_error(err: &toml::de::Error, source: &str) -> Diagnostic {
    let span = err
        .span()
        .map(Span::new)
        .unwrap_or_else(|| Span::new(source.len()..source.len()));

    Diagnostic::error(err.message().trim_end())
        .with_code(ErrorCode::E001)
        .with_label(span, ErrorCode::E001.description())
        .with_help("see demos/greeting.toml for the document layout")
}
