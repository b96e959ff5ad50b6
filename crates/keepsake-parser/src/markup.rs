//! Inline markup renderer for authored prose.
//!
//! The only markup is bold emphasis: a run wrapped in a doubled `**` marker on
//! both sides. Pairing is lazy and left to right, and an emphasis run never
//! crosses a line terminator. There is no escaping.
//!
//! Malformed markup never fails. An opening marker without a close on the
//! same line stays in the text as literal characters, and scanning resumes one
//! character later so a later valid pair still matches. [`lint_inline`]
//! reports such places for the document validator.
//!
//! A bare `**`, or two markers split by a line break, is therefore plain text.
//! The page this format was first written for treated those as empty
//! emphasis and printed nothing; here they stay visible so the author sees
//! the stray marker.

use keepsake_core::text::TextSegment;
use log::trace;
use winnow::{
    Parser as _,
    combinator::{alt, delimited, peek},
    error::ModalResult,
    stream::{LocatingSlice, Location, Stream},
    token::{take_till, take_until},
};

use crate::span::Span;

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O>;

const MARKER: &str = "**";

/// A problem in inline markup that still renders, just not as emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineIssue {
    /// An opening `**` with no closing `**` on the same line.
    UnpairedMarker(Span),
    /// `****`, an emphasis run with nothing inside.
    EmptyEmphasis(Span),
}

impl InlineIssue {
    /// Byte span of the offending markup, relative to the linted text.
    pub fn span(&self) -> Span {
        match self {
            InlineIssue::UnpairedMarker(span) | InlineIssue::EmptyEmphasis(span) => *span,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<'a> {
    Plain(&'a str),
    /// Inner text of a matched pair, delimiters stripped.
    Emphasis(&'a str),
    /// First `*` of a `**` that failed to pair.
    Unpaired(&'a str),
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn emphasis<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    delimited(MARKER, take_until(0.., MARKER), MARKER)
        .verify(|inner: &str| !inner.contains(is_line_terminator))
        .parse_next(input)
}

fn unpaired<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    ('*', peek('*')).take().parse_next(input)
}

fn piece<'a>(input: &mut Input<'a>) -> IResult<Piece<'a>> {
    alt((
        emphasis.map(Piece::Emphasis), // Must come before any single `*`
        take_till(1.., '*').map(Piece::Plain),
        unpaired.map(Piece::Unpaired),
        '*'.take().map(Piece::Plain),
    ))
    .parse_next(input)
}

/// Splits `source` into pieces with their byte spans.
fn pieces(source: &str) -> Vec<(Piece<'_>, Span)> {
    let mut input = LocatingSlice::new(source);
    let mut pieces = Vec::new();

    while !input.is_empty() {
        let start = input.current_token_start();
        match piece(&mut input) {
            Ok(piece) => {
                let end = input.current_token_start();
                pieces.push((piece, Span::new(start..end)));
            }
            Err(_) => {
                // Every character matches some branch; keep the tail as text.
                let rest = input.next_slice(input.eof_offset());
                pieces.push((Piece::Plain(rest), Span::new(start..source.len())));
            }
        }
    }

    pieces
}

/// Renders authored text into ordered emphasis segments.
///
/// Absent and empty input both yield no segments. Adjacent plain runs are
/// merged, and empty emphasis produces no segment, so no returned segment
/// is empty.
///
/// # Examples
///
/// ```
/// # use keepsake_core::text::TextSegment;
/// # use keepsake_parser::markup::parse_inline;
/// assert_eq!(
///     parse_inline("a **b** c"),
///     vec![
///         TextSegment::plain("a "),
///         TextSegment::emphasized("b"),
///         TextSegment::plain(" c"),
///     ]
/// );
/// assert_eq!(parse_inline("a ** b"), vec![TextSegment::plain("a ** b")]);
/// assert!(parse_inline(None).is_empty());
/// ```
pub fn parse_inline<'a>(source: impl Into<Option<&'a str>>) -> Vec<TextSegment> {
    let Some(source) = source.into() else {
        return Vec::new();
    };

    let mut segments: Vec<TextSegment> = Vec::new();
    for (piece, _) in pieces(source) {
        match piece {
            Piece::Emphasis("") => {}
            Piece::Emphasis(text) => segments.push(TextSegment::emphasized(text)),
            Piece::Plain(text) | Piece::Unpaired(text) => match segments.last_mut() {
                Some(last) if !last.is_emphasized() => last.push_str(text),
                _ => segments.push(TextSegment::plain(text)),
            },
        }
    }

    trace!(segments = segments.len(); "Rendered inline markup");
    segments
}

/// Reports markup in `source` that will not render as emphasis.
///
/// Spans are byte offsets into `source`. An unpaired marker is reported once
/// even when it is part of a longer run of `*`.
pub fn lint_inline(source: &str) -> Vec<InlineIssue> {
    let mut issues = Vec::new();
    let mut last_unpaired: Option<Span> = None;

    for (piece, span) in pieces(source) {
        match piece {
            Piece::Unpaired(_) => {
                let marker = Span::new(span.start()..span.start() + MARKER.len());
                if last_unpaired.is_some_and(|last| last.overlaps(marker)) {
                    continue;
                }
                last_unpaired = Some(marker);
                issues.push(InlineIssue::UnpairedMarker(marker));
            }
            Piece::Emphasis("") => issues.push(InlineIssue::EmptyEmphasis(span)),
            Piece::Emphasis(_) | Piece::Plain(_) => {}
        }
    }

    issues
}
