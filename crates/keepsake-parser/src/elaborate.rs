//! Elaboration of a raw document into the content model.
//!
//! Validation happens here: ids are checked for uniqueness, section kinds are
//! resolved, optional fields that encode a status are turned into explicit
//! variants, and every prose string is linted for inline markup. All problems
//! are collected so a document reports everything wrong with it in one pass.

use std::collections::HashMap;

use log::{debug, info, trace};

use keepsake_core::{
    content::{
        Attachment, Closing, FlipCard, Goal, Hero, IdeaCard, IdeaStatus, MemoryCard, Page,
        PipelineAction, PipelineGroup, PipelineItem, Section, SectionBody, SectionKind,
        Soundtrack, TimelineEvent, TitleLine,
    },
    schedule::{AXIS_UNITS, ScheduleInterval},
};
use toml::Spanned;

use crate::{
    document::{
        Prose, RawAction, RawDocument, RawFlipCard, RawGoal, RawHero, RawIdeaCard,
        RawMemoryCard, RawPipelineGroup, RawPipelineItem, RawSection, RawSoundtrack, RawTask,
        RawTimelineEvent,
    },
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    markup::{InlineIssue, lint_inline},
    span::Span,
};

/// Tracks the first occurrence of each id in one scope.
type IdScope<'a> = HashMap<&'a str, Span>;

const DEFAULT_LINK_LABEL: &str = "View draft";
const DEFAULT_DETAILS_LABEL: &str = "Read more";

pub(crate) struct Builder<'a> {
    source: &'a str,
    diagnostics: DiagnosticCollector,
}

impl<'a> Builder<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            diagnostics: DiagnosticCollector::new(),
        }
    }

    // ============================================================================
    // Main Entry Methods
    // ============================================================================

    /// Builds the page, returning it with any warnings.
    pub fn build(mut self, raw: RawDocument) -> Result<(Page, Vec<Diagnostic>), ParseError> {
        debug!(sections = raw.sections.len(); "Elaborating document");

        let hero = self.build_hero(raw.hero);
        let mut page = Page::new(raw.title, hero);

        if let Some(soundtrack) = raw.soundtrack {
            page = page.with_soundtrack(Self::build_soundtrack(soundtrack));
        }
        if let Some(footer) = raw.footer {
            page = page.with_footer(self.prose(footer));
        }

        {
            let mut section_ids = IdScope::new();
            for raw_section in &raw.sections {
                self.check_unique(&mut section_ids, &raw_section.id, "section");
            }
        }
        let mut sections = Vec::with_capacity(raw.sections.len());
        for raw_section in raw.sections {
            if let Some(section) = self.build_section(raw_section) {
                sections.push(section);
            }
        }
        let page = page.with_sections(sections);

        let warnings = self.diagnostics.finish()?;
        info!(
            title = page.title(),
            sections = page.sections().len(),
            warnings = warnings.len();
            "Document elaborated"
        );
        Ok((page, warnings))
    }

    // ============================================================================
    // Page Parts
    // ============================================================================

    fn build_hero(&mut self, raw: RawHero) -> Hero {
        let titles = raw
            .titles
            .into_iter()
            .map(|line| TitleLine::new(line.primary, line.translation))
            .collect();

        Hero::new(
            raw.dedication.map(|text| self.prose(text)),
            titles,
            raw.epigraph.map(|text| self.prose(text)),
            raw.signature.map(|text| self.prose(text)),
        )
    }

    fn build_soundtrack(raw: RawSoundtrack) -> Soundtrack {
        Soundtrack::new(raw.title, raw.artist, raw.source)
    }

    fn build_section(&mut self, raw: RawSection) -> Option<Section> {
        let kind_span = Span::new(raw.kind.span());
        let Some(kind) = SectionKind::from_name(raw.kind.get_ref()) else {
            let known = SectionKind::ALL.map(SectionKind::as_str).join("`, `");
            self.diagnostics.emit(
                Diagnostic::error(format!("unknown section kind `{}`", raw.kind.get_ref()))
                    .with_code(ErrorCode::E301)
                    .with_label(kind_span, ErrorCode::E301.description())
                    .with_help(format!("expected one of `{known}`")),
            );
            return None;
        };
        trace!(id = raw.id.get_ref().as_str(), kind = kind.as_str(); "Building section");
        self.check_misfiled(kind, kind_span, &raw);

        let body = match kind {
            SectionKind::Timeline => SectionBody::Timeline(self.build_items(
                take(raw.events),
                |event| &event.id,
                "event",
                Self::build_timeline_event,
            )),
            SectionKind::Memories => SectionBody::Memories(self.build_items(
                take(raw.cards),
                |card| &card.id,
                "memory card",
                Self::build_memory_card,
            )),
            SectionKind::Quotes => SectionBody::Quotes(self.build_items(
                take(raw.quotes),
                |card| &card.id,
                "quote card",
                Self::build_flip_card,
            )),
            SectionKind::Notebook => SectionBody::Notebook(self.build_items(
                take(raw.ideas),
                |idea| &idea.id,
                "idea",
                Self::build_idea_card,
            )),
            SectionKind::Plan => SectionBody::Plan(
                take(raw.tasks)
                    .into_iter()
                    .map(|task| self.build_interval(task))
                    .collect(),
            ),
            SectionKind::Closing => {
                let pipeline = take(raw.pipeline)
                    .into_iter()
                    .map(|group| self.build_pipeline_group(group))
                    .collect();
                let messages = self.prose_list(take(raw.messages));
                let blessing = self.prose_list(take(raw.blessing));
                let mut closing = Closing::new(messages, blessing).with_pipeline(pipeline);
                if let Some(goal) = raw.goal {
                    closing = closing.with_goal(self.build_goal(goal.into_inner()));
                }
                SectionBody::Closing(closing)
            }
        };

        let mut section = Section::new(raw.id.into_inner(), raw.heading, body)
            .with_intro(self.prose_list(raw.intro));
        if let Some(subtitle) = raw.subtitle {
            section = section.with_subtitle(subtitle);
        }
        Some(section)
    }

    /// Reports every non-empty item list that `kind` does not read.
    fn check_misfiled(&mut self, kind: SectionKind, kind_span: Span, raw: &RawSection) {
        let lists = [
            ("events", SectionKind::Timeline, list_span(&raw.events)),
            ("cards", SectionKind::Memories, list_span(&raw.cards)),
            ("quotes", SectionKind::Quotes, list_span(&raw.quotes)),
            ("ideas", SectionKind::Notebook, list_span(&raw.ideas)),
            ("tasks", SectionKind::Plan, list_span(&raw.tasks)),
            ("pipeline", SectionKind::Closing, list_span(&raw.pipeline)),
            (
                "goal",
                SectionKind::Closing,
                raw.goal.as_ref().map(|goal| Span::new(goal.span())),
            ),
            ("messages", SectionKind::Closing, list_span(&raw.messages)),
            ("blessing", SectionKind::Closing, list_span(&raw.blessing)),
        ];

        for (key, owner, span) in lists {
            let Some(span) = span else { continue };
            if owner == kind {
                continue;
            }
            self.diagnostics.emit(
                Diagnostic::error(format!(
                    "`{key}` does not belong in a `{}` section",
                    kind.as_str()
                ))
                .with_code(ErrorCode::E304)
                .with_label(span, format!("not read by a `{}` section", kind.as_str()))
                .with_secondary_label(kind_span, "section kind set here")
                .with_help(format!(
                    "`{key}` is read by `{}` sections; move it there or remove it",
                    owner.as_str()
                )),
            );
        }
    }

    /// Checks item ids for uniqueness, then builds each item.
    fn build_items<R, T>(
        &mut self,
        items: Vec<R>,
        id_of: impl Fn(&R) -> &Spanned<String>,
        what: &str,
        mut build: impl FnMut(&mut Self, R) -> T,
    ) -> Vec<T> {
        {
            let mut ids = IdScope::new();
            for item in &items {
                self.check_unique(&mut ids, id_of(item), what);
            }
        }
        items.into_iter().map(|item| build(self, item)).collect()
    }

    // ============================================================================
    // Items
    // ============================================================================

    fn build_timeline_event(&mut self, raw: RawTimelineEvent) -> TimelineEvent {
        let attachment = match (raw.document, raw.slides) {
            (Some(document), Some(slides)) => {
                self.diagnostics.emit(
                    Diagnostic::error(format!(
                        "event `{}` has both a document and slides",
                        raw.id.get_ref()
                    ))
                    .with_code(ErrorCode::E303)
                    .with_label(Span::new(slides.span()), "slides set here")
                    .with_secondary_label(Span::new(document.span()), "document set here")
                    .with_help("an event carries either one document or one slide gallery"),
                );
                Attachment::None
            }
            (Some(document), None) => Attachment::Document {
                href: document.into_inner(),
            },
            (None, Some(slides)) => Attachment::Gallery {
                slides: slides.into_inner(),
            },
            (None, None) => Attachment::None,
        };

        let mut event = TimelineEvent::new(raw.id.into_inner(), raw.year, raw.date, raw.title)
            .with_medium(raw.medium)
            .with_paragraphs(self.prose_list(raw.paragraphs))
            .with_attachment(attachment)
            .with_highlighted(raw.highlighted);
        if let Some(quote) = raw.quote {
            event = event.with_quote(self.prose(quote));
        }
        event
    }

    fn build_memory_card(&mut self, raw: RawMemoryCard) -> MemoryCard {
        MemoryCard::new(raw.id.into_inner(), raw.time, raw.title, raw.image)
            .with_reflection(self.prose_list(raw.reflection))
    }

    fn build_flip_card(&mut self, raw: RawFlipCard) -> FlipCard {
        let front = self.prose(raw.front);
        let back = self.prose(raw.back);
        FlipCard::new(raw.id.into_inner(), front, back)
    }

    fn build_idea_card(&mut self, raw: RawIdeaCard) -> IdeaCard {
        let preview = self.prose(raw.preview);
        let status = match (raw.link, raw.content) {
            (Some(link), Some(content)) => {
                self.diagnostics.emit(
                    Diagnostic::error(format!(
                        "idea `{}` has both a link and content",
                        raw.id.get_ref()
                    ))
                    .with_code(ErrorCode::E302)
                    .with_label(Span::new(content.span()), "content set here")
                    .with_secondary_label(Span::new(link.span()), "link set here")
                    .with_help("remove `link` to open the content in place, or `content` to link out"),
                );
                IdeaStatus::InProgress
            }
            (Some(link), None) => IdeaStatus::External {
                href: link.into_inner(),
            },
            (None, Some(content)) => IdeaStatus::Ready {
                content: self.prose_list(content.into_inner()),
            },
            (None, None) => IdeaStatus::InProgress,
        };

        IdeaCard::new(raw.id.into_inner(), raw.title, preview, status)
    }

    fn build_pipeline_group(&mut self, raw: RawPipelineGroup) -> PipelineGroup {
        let items = raw
            .items
            .into_iter()
            .map(|item| self.build_pipeline_item(item))
            .collect();
        let mut group = PipelineGroup::new(raw.heading, items);
        if let Some(note) = raw.note {
            group = group.with_note(self.prose(note));
        }
        group
    }

    fn build_pipeline_item(&mut self, raw: RawPipelineItem) -> PipelineItem {
        let mut item = PipelineItem::new(self.prose(raw.title));
        if let Some(badge) = raw.badge {
            item = item.with_badge(badge);
        }
        if let Some(note) = raw.note {
            item = item.with_note(self.prose(note));
        }
        if let Some(quote) = raw.quote {
            item = item.with_quote(self.prose(quote));
        }
        if let Some(action) = raw.action.and_then(|action| self.build_action(action)) {
            item = item.with_action(action);
        }
        item
    }

    fn build_action(&mut self, raw: Spanned<RawAction>) -> Option<PipelineAction> {
        let span = Span::new(raw.span());
        let RawAction {
            label,
            link,
            details,
        } = raw.into_inner();

        match (link, details) {
            (Some(link), None) => Some(PipelineAction::Link {
                label: label.unwrap_or_else(|| DEFAULT_LINK_LABEL.to_string()),
                href: link.into_inner(),
            }),
            (None, Some(details)) => Some(PipelineAction::Details {
                label: label.unwrap_or_else(|| DEFAULT_DETAILS_LABEL.to_string()),
                paragraphs: self.prose_list(details.into_inner()),
            }),
            (Some(link), Some(details)) => {
                self.diagnostics.emit(
                    Diagnostic::error("pipeline action has both a link and details")
                        .with_code(ErrorCode::E305)
                        .with_label(Span::new(details.span()), "details set here")
                        .with_secondary_label(Span::new(link.span()), "link set here")
                        .with_help("an action either links out or reveals details, not both"),
                );
                None
            }
            (None, None) => {
                self.diagnostics.emit(
                    Diagnostic::error("pipeline action has no target")
                        .with_code(ErrorCode::E305)
                        .with_label(span, "neither `link` nor `details` is set")
                        .with_help("add `link` to open a draft or `details` to reveal text"),
                );
                None
            }
        }
    }

    fn build_goal(&mut self, raw: RawGoal) -> Goal {
        let question = self.prose(raw.question);
        let response = self.prose(raw.response);
        let goal = Goal::new(question, response);
        match raw.image {
            Some(image) => goal.with_image(image),
            None => goal,
        }
    }

    fn build_interval(&mut self, raw: RawTask) -> ScheduleInterval {
        let start = *raw.start.get_ref();
        let duration = *raw.duration.get_ref();
        let interval = ScheduleInterval::new(raw.label, start, duration);

        if !(1..=AXIS_UNITS).contains(&start) {
            self.diagnostics.emit(
                Diagnostic::warning(format!(
                    "task `{}` starts outside the axis",
                    interval.label()
                ))
                .with_code(ErrorCode::E200)
                .with_label(Span::new(raw.start.span()), format!("start unit {start}"))
                .with_help(format!("start units run from 1 to {AXIS_UNITS}")),
            );
        }

        if duration == 0 {
            self.diagnostics.emit(
                Diagnostic::warning(format!("task `{}` has no duration", interval.label()))
                    .with_code(ErrorCode::E201)
                    .with_label(Span::new(raw.duration.span()), "zero duration")
                    .with_help("the task is listed but draws no bar"),
            );
        } else if start.saturating_add(duration) > AXIS_UNITS + 1 {
            self.diagnostics.emit(
                Diagnostic::warning(format!(
                    "task `{}` runs past the end of the axis",
                    interval.label()
                ))
                .with_code(ErrorCode::E201)
                .with_label(
                    Span::new(raw.duration.span()),
                    format!("ends at unit {}", start.saturating_add(duration) - 1),
                )
                .with_help("the bar is drawn past the last month"),
            );
        }

        interval
    }

    // ============================================================================
    // Helpers
    // ============================================================================

    fn check_unique<'b>(&mut self, scope: &mut IdScope<'b>, id: &'b Spanned<String>, what: &str) {
        let span = Span::new(id.span());
        if let Some(first) = scope.get(id.get_ref().as_str()) {
            self.diagnostics.emit(
                Diagnostic::error(format!(
                    "{what} id `{}` is used more than once",
                    id.get_ref()
                ))
                .with_code(ErrorCode::E300)
                .with_label(span, "duplicate id")
                .with_secondary_label(*first, "first used here")
                .with_help(format!("give each {what} a unique id")),
            );
        } else {
            scope.insert(id.get_ref().as_str(), span);
        }
    }

    fn prose_list(&mut self, values: Vec<Prose>) -> Vec<String> {
        values.into_iter().map(|value| self.prose(value)).collect()
    }

    /// Lints a prose value and returns its text.
    fn prose(&mut self, value: Prose) -> String {
        for issue in lint_inline(value.get_ref()) {
            let span = self.locate(&value, issue.span());
            let diagnostic = match issue {
                InlineIssue::UnpairedMarker(_) => {
                    Diagnostic::warning("emphasis marker `**` is never closed")
                        .with_code(ErrorCode::E100)
                        .with_label(span, "unpaired emphasis marker")
                        .with_help(
                            "the marker is rendered as literal text; close it with `**` on the same line",
                        )
                }
                InlineIssue::EmptyEmphasis(_) => Diagnostic::warning("empty emphasis")
                    .with_code(ErrorCode::E101)
                    .with_label(span, "renders nothing")
                    .with_help("remove the `****`"),
            };
            self.diagnostics.emit(diagnostic);
        }
        value.into_inner()
    }

    /// Maps a span inside a string value to document coordinates.
    ///
    /// Escapes change byte offsets, so when the text does not appear verbatim
    /// in the document the whole value is labelled instead.
    fn locate(&self, value: &Prose, inner: Span) -> Span {
        let range = value.span();
        let text = value.get_ref();
        match self
            .source
            .get(range.clone())
            .and_then(|raw| raw.find(text.as_str()))
        {
            Some(offset) if !text.is_empty() => inner.shift(range.start + offset),
            _ => Span::new(range),
        }
    }
}

/// Unwraps an optional item list.
fn take<T>(list: Option<Spanned<Vec<T>>>) -> Vec<T> {
    list.map(Spanned::into_inner).unwrap_or_default()
}

/// Returns the span of an item list that has at least one entry.
fn list_span<T>(list: &Option<Spanned<Vec<T>>>) -> Option<Span> {
    list.as_ref()
        .filter(|list| !list.get_ref().is_empty())
        .map(|list| Span::new(list.span()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document;

    fn build(source: &str) -> Result<(Page, Vec<Diagnostic>), ParseError> {
        let raw = document::from_str(source).expect("valid TOML");
        Builder::new(source).build(raw)
    }

    fn codes(diagnostics: &[Diagnostic]) -> Vec<ErrorCode> {
        diagnostics.iter().filter_map(Diagnostic::code).collect()
    }

    #[test]
    fn test_minimal_document() {
        let (page, warnings) = build(r#"title = "Hello""#).expect("builds");

        assert_eq!(page.title(), "Hello");
        assert!(page.sections().is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_duplicate_section_id() {
        let source = r#"
title = "t"

[[sections]]
id = "a"
kind = "closing"
heading = "One"

[[sections]]
id = "a"
kind = "closing"
heading = "Two"
"#;
        let err = build(source).unwrap_err();
        let diag = &err.diagnostics()[0];

        assert_eq!(diag.code(), Some(ErrorCode::E300));
        assert_eq!(diag.labels().len(), 2);
        let primary = diag.labels()[0].span();
        assert_eq!(&source[primary.start()..primary.end()], r#""a""#);
        assert!(diag.labels()[1].span().start() < primary.start());
    }

    #[test]
    fn test_duplicate_item_id_within_section() {
        let source = r#"
title = "t"

[[sections]]
id = "quotes"
kind = "quotes"
heading = "Quotes"

[[sections.quotes]]
id = "q"
front = "a"
back = "b"

[[sections.quotes]]
id = "q"
front = "c"
back = "d"
"#;
        let err = build(source).unwrap_err();
        assert_eq!(codes(err.diagnostics()), vec![ErrorCode::E300]);
        assert!(err.diagnostics()[0].message().starts_with("quote card id"));
    }

    #[test]
    fn test_same_item_id_in_different_sections_is_fine() {
        let source = r#"
title = "t"

[[sections]]
id = "one"
kind = "quotes"
heading = "One"
[[sections.quotes]]
id = "q"
front = "a"
back = "b"

[[sections]]
id = "two"
kind = "quotes"
heading = "Two"
[[sections.quotes]]
id = "q"
front = "a"
back = "b"
"#;
        assert!(build(source).is_ok());
    }

    #[test]
    fn test_unknown_section_kind() {
        let source = r#"
title = "t"

[[sections]]
id = "g"
kind = "gallery"
heading = "Gallery"
"#;
        let err = build(source).unwrap_err();
        let diag = &err.diagnostics()[0];

        assert_eq!(diag.code(), Some(ErrorCode::E301));
        assert!(diag.help().is_some_and(|help| help.contains("`timeline`")));
    }

    #[test]
    fn test_idea_status_variants() {
        let source = r#"
title = "t"

[[sections]]
id = "notebook"
kind = "notebook"
heading = "Ideas"

[[sections.ideas]]
id = "wip"
title = "Half-baked"
preview = "..."

[[sections.ideas]]
id = "ready"
title = "Written"
preview = "..."
content = ["First **point**.", "Second."]

[[sections.ideas]]
id = "external"
title = "Elsewhere"
preview = "..."
link = "https://example.com/idea"
"#;
        let (page, warnings) = build(source).expect("builds");
        assert!(warnings.is_empty());

        let SectionBody::Notebook(ideas) = page.sections()[0].body() else {
            panic!("expected a notebook section");
        };
        assert_eq!(ideas[0].status(), &IdeaStatus::InProgress);
        assert_eq!(
            ideas[1].status(),
            &IdeaStatus::Ready {
                content: vec!["First **point**.".to_string(), "Second.".to_string()]
            }
        );
        assert_eq!(
            ideas[2].status(),
            &IdeaStatus::External {
                href: "https://example.com/idea".to_string()
            }
        );
    }

    #[test]
    fn test_idea_with_link_and_content_is_rejected() {
        let source = r#"
title = "t"

[[sections]]
id = "notebook"
kind = "notebook"
heading = "Ideas"

[[sections.ideas]]
id = "both"
title = "Confused"
preview = "..."
link = "https://example.com"
content = ["text"]
"#;
        let err = build(source).unwrap_err();
        assert_eq!(codes(err.diagnostics()), vec![ErrorCode::E302]);
    }

    #[test]
    fn test_event_attachments() {
        let source = r#"
title = "t"

[[sections]]
id = "timeline"
kind = "timeline"
heading = "Timeline"

[[sections.events]]
id = "2024"
year = "2024"
date = "Jan 1"
title = "Letter"
document = "files/2024.pdf"

[[sections.events]]
id = "2025"
year = "2025"
date = "Jan 1"
title = "Slides"
medium = "ppt"
slides = ["s/1.png", "s/2.png"]
highlighted = true
"#;
        let (page, _) = build(source).expect("builds");
        let SectionBody::Timeline(events) = page.sections()[0].body() else {
            panic!("expected a timeline section");
        };

        assert_eq!(
            events[0].attachment(),
            &Attachment::Document {
                href: "files/2024.pdf".to_string()
            }
        );
        assert_eq!(
            events[1].attachment(),
            &Attachment::Gallery {
                slides: vec!["s/1.png".to_string(), "s/2.png".to_string()]
            }
        );
        assert_eq!(events[1].medium(), keepsake_core::content::Medium::Slides);
        assert!(events[1].is_highlighted());
    }

    #[test]
    fn test_event_with_document_and_slides_is_rejected() {
        let source = r#"
title = "t"

[[sections]]
id = "timeline"
kind = "timeline"
heading = "Timeline"

[[sections.events]]
id = "2024"
year = "2024"
date = "Jan 1"
title = "Both"
document = "a.pdf"
slides = ["b.png"]
"#;
        let err = build(source).unwrap_err();
        assert_eq!(codes(err.diagnostics()), vec![ErrorCode::E303]);
    }

    #[test]
    fn test_misfiled_items_are_rejected() {
        let source = r#"
title = "t"

[[sections]]
id = "timeline"
kind = "timeline"
heading = "Timeline"
messages = ["lost words"]

[[sections.cards]]
id = "lost"
time = "2024"
title = "Lost"
image = "lost.jpg"
"#;
        let err = build(source).unwrap_err();
        assert_eq!(
            codes(err.diagnostics()),
            vec![ErrorCode::E304, ErrorCode::E304]
        );

        let cards = &err.diagnostics()[0];
        assert!(cards.message().starts_with("`cards`"));
        assert!(cards.help().is_some_and(|help| help.contains("`memories`")));
        let kind = cards.labels()[1].span();
        assert_eq!(&source[kind.start()..kind.end()], r#""timeline""#);

        let messages = &err.diagnostics()[1];
        let primary = messages.labels()[0].span();
        assert_eq!(&source[primary.start()..primary.end()], r#"["lost words"]"#);
    }

    #[test]
    fn test_empty_misfiled_list_is_ignored() {
        let source = r#"
title = "t"

[[sections]]
id = "plan"
kind = "plan"
heading = "Plan"
blessing = []
"#;
        let (_, warnings) = build(source).expect("builds");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_closing_pipeline_and_goal() {
        let source = r#"
title = "t"

[[sections]]
id = "end"
kind = "closing"
heading = "End"
goal = { question = "What is the **goal**?", response = "Finish.", image = "reply.png" }

[[sections.pipeline]]
heading = "Urgent"
note = "Due soon."

[[sections.pipeline.items]]
title = "Revise the draft"
badge = "DDL"
quote = "Almost there."
action = { link = "drafts/paper.pdf" }

[[sections.pipeline.items]]
title = "Proposal"
action = { label = "Outline", details = ["Scope.", "Method."] }

[[sections.pipeline]]
heading = "Brainstorming"

[[sections.pipeline.items]]
title = "Loose idea"
"#;
        let (page, warnings) = build(source).expect("builds");
        assert!(warnings.is_empty());

        let SectionBody::Closing(closing) = page.sections()[0].body() else {
            panic!("expected a closing section");
        };
        let pipeline = closing.pipeline();
        assert_eq!(pipeline.len(), 2);
        assert_eq!(pipeline[0].note(), Some("Due soon."));

        let items = pipeline[0].items();
        assert_eq!(items[0].badge(), Some("DDL"));
        assert_eq!(
            items[0].action(),
            Some(&PipelineAction::Link {
                label: DEFAULT_LINK_LABEL.to_string(),
                href: "drafts/paper.pdf".to_string()
            })
        );
        assert_eq!(
            items[1].action(),
            Some(&PipelineAction::Details {
                label: "Outline".to_string(),
                paragraphs: vec!["Scope.".to_string(), "Method.".to_string()]
            })
        );
        assert!(pipeline[1].items()[0].action().is_none());

        let goal = closing.goal().expect("goal");
        assert_eq!(goal.question(), "What is the **goal**?");
        assert_eq!(goal.image(), Some("reply.png"));
    }

    #[test]
    fn test_pipeline_action_needs_one_target() {
        let source = r#"
title = "t"

[[sections]]
id = "end"
kind = "closing"
heading = "End"

[[sections.pipeline]]
heading = "Urgent"

[[sections.pipeline.items]]
title = "Both"
action = { link = "a.pdf", details = ["b"] }

[[sections.pipeline.items]]
title = "Neither"
action = { label = "Open" }
"#;
        let err = build(source).unwrap_err();
        assert_eq!(
            codes(err.diagnostics()),
            vec![ErrorCode::E305, ErrorCode::E305]
        );
        let primary = err.diagnostics()[1].labels()[0].span();
        assert_eq!(
            &source[primary.start()..primary.end()],
            r#"{ label = "Open" }"#
        );
    }

    #[test]
    fn test_unpaired_marker_warning_points_at_marker() {
        let source = r#"
title = "t"

[[sections]]
id = "end"
kind = "closing"
heading = "End"
messages = ["keep ** going"]
"#;
        let (page, warnings) = build(source).expect("warnings only");

        assert_eq!(codes(&warnings), vec![ErrorCode::E100]);
        let span = warnings[0].labels()[0].span();
        assert_eq!(&source[span.start()..span.end()], "**");

        let SectionBody::Closing(closing) = page.sections()[0].body() else {
            panic!("expected a closing section");
        };
        assert_eq!(closing.messages(), ["keep ** going"]);
    }

    #[test]
    fn test_empty_emphasis_warning() {
        let source = r#"
title = "t"
footer = "a****b"
"#;
        let (_, warnings) = build(source).expect("warnings only");
        assert_eq!(codes(&warnings), vec![ErrorCode::E101]);
    }

    #[test]
    fn test_interval_warnings() {
        let source = r#"
title = "t"

[[sections]]
id = "plan"
kind = "plan"
heading = "Plan"

[[sections.tasks]]
label = "Fine"
start = 1
duration = 2

[[sections.tasks]]
label = "Too late"
start = 13
duration = 1

[[sections.tasks]]
label = "Overflow"
start = 12
duration = 3

[[sections.tasks]]
label = "Empty"
start = 4
duration = 0
"#;
        let (page, warnings) = build(source).expect("warnings only");

        assert_eq!(
            codes(&warnings),
            vec![
                ErrorCode::E200,
                ErrorCode::E201,
                ErrorCode::E201,
                ErrorCode::E201
            ]
        );
        // Intervals are kept as authored.
        let schedule = page.schedule().expect("plan section");
        assert_eq!(schedule.len(), 4);
        assert_eq!(schedule[2].start_unit(), 12);
        assert_eq!(schedule[2].duration_units(), 3);
    }

    #[test]
    fn test_errors_carry_warnings_too() {
        let source = r#"
title = "t"
footer = "x ** y"

[[sections]]
id = "g"
kind = "gallery"
heading = "Gallery"
"#;
        let err = build(source).unwrap_err();
        assert_eq!(
            codes(err.diagnostics()),
            vec![ErrorCode::E100, ErrorCode::E301]
        );
    }
}
