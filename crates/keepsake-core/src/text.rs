//! Emphasis-aware text segments.
//!
//! Authored prose is split into [`TextSegment`]s by the inline markup
//! renderer. A segment is either plain or emphasized; the order of a segment
//! list is render order.

use std::fmt;

/// An atomic run of text with a single emphasis flag.
///
/// # Examples
///
/// ```
/// # use keepsake_core::text::TextSegment;
/// let plain = TextSegment::plain("a ");
/// let strong = TextSegment::emphasized("b");
///
/// assert!(!plain.is_emphasized());
/// assert!(strong.is_emphasized());
/// assert_eq!(strong.text(), "b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextSegment {
    emphasized: bool,
    text: String,
}

impl TextSegment {
    /// Creates a plain (non-emphasized) segment.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            emphasized: false,
            text: text.into(),
        }
    }

    /// Creates an emphasized segment.
    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            emphasized: true,
            text: text.into(),
        }
    }

    /// Returns `true` if this segment carries emphasis.
    pub fn is_emphasized(&self) -> bool {
        self.emphasized
    }

    /// Returns the segment text with delimiters already stripped.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Appends text to this segment.
    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }
}

impl fmt::Display for TextSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Concatenates the text of all segments, dropping emphasis.
///
/// # Examples
///
/// ```
/// # use keepsake_core::text::{TextSegment, concat_text};
/// let segments = [TextSegment::plain("a "), TextSegment::emphasized("b")];
/// assert_eq!(concat_text(&segments), "a b");
/// ```
pub fn concat_text(segments: &[TextSegment]) -> String {
    segments.iter().map(TextSegment::text).collect()
}
