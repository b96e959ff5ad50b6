//! Error codes for the Keepsake diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Document syntax errors
//! - `E1xx` - Inline markup warnings
//! - `E2xx` - Schedule warnings
//! - `E3xx` - Content validation errors

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Document Errors (E0xx)
    // =========================================================================
    /// Malformed document.
    ///
    /// The content document is not valid TOML, or a value has the wrong type
    /// or a required key is missing.
    E001,

    // =========================================================================
    // Markup Warnings (E1xx)
    // =========================================================================
    /// Unpaired emphasis marker.
    ///
    /// A `**` was opened but not closed on the same line. It is rendered as
    /// literal text.
    E100,

    /// Empty emphasis.
    ///
    /// `****` encloses nothing and renders as nothing.
    E101,

    // =========================================================================
    // Schedule Warnings (E2xx)
    // =========================================================================
    /// Interval starts outside the axis.
    ///
    /// Start units run from 1 to 12.
    E200,

    /// Interval runs past the axis or has no duration.
    ///
    /// The bar is drawn at its computed width regardless.
    E201,

    // =========================================================================
    // Validation Errors (E3xx)
    // =========================================================================
    /// Duplicate id.
    ///
    /// Section ids must be unique in a page, item ids unique in a section.
    E300,

    /// Unknown section kind.
    E301,

    /// Conflicting idea status.
    ///
    /// An idea card sets both `link` and `content`.
    E302,

    /// Conflicting timeline attachment.
    ///
    /// A timeline event sets both `document` and `slides`.
    E303,

    /// Misfiled items.
    ///
    /// A section carries an item list that its kind does not read, such as
    /// `cards` under a `timeline` section.
    E304,

    /// Incomplete pipeline action.
    ///
    /// A pipeline action sets neither or both of `link` and `details`.
    E305,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E300 => "E300",
            ErrorCode::E301 => "E301",
            ErrorCode::E302 => "E302",
            ErrorCode::E303 => "E303",
            ErrorCode::E304 => "E304",
            ErrorCode::E305 => "E305",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "malformed document",
            ErrorCode::E100 => "unpaired emphasis marker",
            ErrorCode::E101 => "empty emphasis",
            ErrorCode::E200 => "interval starts outside the axis",
            ErrorCode::E201 => "interval runs past the axis",
            ErrorCode::E300 => "duplicate id",
            ErrorCode::E301 => "unknown section kind",
            ErrorCode::E302 => "conflicting idea status",
            ErrorCode::E303 => "conflicting timeline attachment",
            ErrorCode::E304 => "items do not belong to this section kind",
            ErrorCode::E305 => "pipeline action needs exactly one target",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
