//! Export functionality for Keepsake pages.
//!
//! This is the final stage of the pipeline:
//!
//! ```text
//! Content document
//!     ↓ parse
//! Page
//!     ↓ layout (schedule chart)
//! Positioned chart
//!     ↓ export (this module)
//! HTML / SVG text
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - the schedule chart as a standalone SVG document
//! - [`html`] - the full page, with the chart inlined
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. It converts into
//! [`KeepsakeError::Export`] at the crate boundary.
//!
//! [`KeepsakeError::Export`]: crate::KeepsakeError::Export

pub mod html;
pub mod svg;

/// Errors that can occur during export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// A template failed to render.
    Template(askama::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Template(err) => write!(f, "Template error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Template(err) => Some(err),
        }
    }
}

impl From<askama::Error> for Error {
    fn from(err: askama::Error) -> Self {
        Self::Template(err)
    }
}
