//! The authored content model of a greeting page.
//!
//! A [`Page`] is a hero banner followed by an ordered list of [`Section`]s.
//! Each section carries exactly one [`SectionBody`] variant, so the set of
//! section kinds is closed and every renderer match is exhaustive.
//!
//! Prose fields hold the raw authored text, including `**emphasis**`
//! markers; splitting into [`TextSegment`](crate::text::TextSegment)s happens
//! at render time.
//!
//! Behaviour that depends on which optional data an item carries is encoded
//! as an explicit variant instead: see [`Attachment`] and [`IdeaStatus`].

use std::fmt;

use serde::Deserialize;

use crate::schedule::ScheduleInterval;

/// A complete greeting page.
#[derive(Debug, Clone)]
pub struct Page {
    title: String,
    hero: Hero,
    soundtrack: Option<Soundtrack>,
    sections: Vec<Section>,
    footer: Option<String>,
}

impl Page {
    /// Creates a page with a title and hero banner and no sections.
    pub fn new(title: impl Into<String>, hero: Hero) -> Self {
        Self {
            title: title.into(),
            hero,
            soundtrack: None,
            sections: Vec::new(),
            footer: None,
        }
    }

    pub fn with_soundtrack(mut self, soundtrack: Soundtrack) -> Self {
        self.soundtrack = Some(soundtrack);
        self
    }

    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Returns the document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn soundtrack(&self) -> Option<&Soundtrack> {
        self.soundtrack.as_ref()
    }

    /// Returns the sections in page order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    /// Returns the intervals of the first plan section, if the page has one.
    pub fn schedule(&self) -> Option<&[ScheduleInterval]> {
        self.sections.iter().find_map(|section| match section.body() {
            SectionBody::Plan(intervals) => Some(intervals.as_slice()),
            _ => None,
        })
    }
}

/// The opening banner of the page.
#[derive(Debug, Clone, Default)]
pub struct Hero {
    dedication: Option<String>,
    titles: Vec<TitleLine>,
    epigraph: Option<String>,
    signature: Option<String>,
}

impl Hero {
    /// Creates a hero banner.
    ///
    /// # Arguments
    ///
    /// * `dedication` - Line naming the recipient, shown above the titles.
    /// * `titles` - Title lines, each with an optional translation.
    /// * `epigraph` - Quotation under the titles.
    /// * `signature` - Sender line at the bottom of the banner.
    pub fn new(
        dedication: Option<String>,
        titles: Vec<TitleLine>,
        epigraph: Option<String>,
        signature: Option<String>,
    ) -> Self {
        Self {
            dedication,
            titles,
            epigraph,
            signature,
        }
    }

    pub fn dedication(&self) -> Option<&str> {
        self.dedication.as_deref()
    }

    pub fn titles(&self) -> &[TitleLine] {
        &self.titles
    }

    pub fn epigraph(&self) -> Option<&str> {
        self.epigraph.as_deref()
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }
}

/// A title with an optional translation set beside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleLine {
    primary: String,
    translation: Option<String>,
}

impl TitleLine {
    pub fn new(primary: impl Into<String>, translation: Option<String>) -> Self {
        Self {
            primary: primary.into(),
            translation,
        }
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn translation(&self) -> Option<&str> {
        self.translation.as_deref()
    }
}

/// Background music for the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Soundtrack {
    title: String,
    artist: Option<String>,
    source: String,
}

impl Soundtrack {
    pub fn new(title: impl Into<String>, artist: Option<String>, source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist,
            source: source.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    /// Returns the audio file URL.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// One scrollable section of the page.
#[derive(Debug, Clone)]
pub struct Section {
    id: String,
    heading: String,
    subtitle: Option<String>,
    intro: Vec<String>,
    body: SectionBody,
}

impl Section {
    /// Creates a section.
    ///
    /// `id` doubles as the HTML anchor of the section.
    pub fn new(id: impl Into<String>, heading: impl Into<String>, body: SectionBody) -> Self {
        Self {
            id: id.into(),
            heading: heading.into(),
            subtitle: None,
            intro: Vec::new(),
            body,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_intro(mut self, intro: Vec<String>) -> Self {
        self.intro = intro;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Returns the introductory paragraphs shown above the body.
    pub fn intro(&self) -> &[String] {
        &self.intro
    }

    pub fn body(&self) -> &SectionBody {
        &self.body
    }

    pub fn kind(&self) -> SectionKind {
        self.body.kind()
    }
}

/// The content of a section, one variant per section kind.
#[derive(Debug, Clone)]
pub enum SectionBody {
    Timeline(Vec<TimelineEvent>),
    Memories(Vec<MemoryCard>),
    Quotes(Vec<FlipCard>),
    Notebook(Vec<IdeaCard>),
    Plan(Vec<ScheduleInterval>),
    Closing(Closing),
}

impl SectionBody {
    /// Returns the kind tag of this body.
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionBody::Timeline(_) => SectionKind::Timeline,
            SectionBody::Memories(_) => SectionKind::Memories,
            SectionBody::Quotes(_) => SectionKind::Quotes,
            SectionBody::Notebook(_) => SectionKind::Notebook,
            SectionBody::Plan(_) => SectionKind::Plan,
            SectionBody::Closing(_) => SectionKind::Closing,
        }
    }
}

/// Kind tag of a section, as written in content documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Timeline,
    Memories,
    Quotes,
    Notebook,
    Plan,
    Closing,
}

impl SectionKind {
    /// All kinds, in the order they are documented.
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Timeline,
        SectionKind::Memories,
        SectionKind::Quotes,
        SectionKind::Notebook,
        SectionKind::Plan,
        SectionKind::Closing,
    ];

    /// Returns the lowercase name used in documents and CSS classes.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Timeline => "timeline",
            SectionKind::Memories => "memories",
            SectionKind::Quotes => "quotes",
            SectionKind::Notebook => "notebook",
            SectionKind::Plan => "plan",
            SectionKind::Closing => "closing",
        }
    }

    /// Looks up a kind by its document name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Medium a past greeting was delivered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medium {
    #[default]
    Text,
    #[serde(alias = "ppt")]
    Slides,
    Code,
}

impl Medium {
    /// Returns a short label for the medium badge.
    pub fn label(self) -> &'static str {
        match self {
            Medium::Text => "text",
            Medium::Slides => "slides",
            Medium::Code => "code",
        }
    }
}

/// Downloadable or browsable material attached to a timeline event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Attachment {
    #[default]
    None,
    /// A single document, linked for download.
    Document { href: String },
    /// A sequence of slide images.
    Gallery { slides: Vec<String> },
}

/// One past greeting on the timeline.
#[derive(Debug, Clone)]
pub struct TimelineEvent {
    id: String,
    year: String,
    date: String,
    title: String,
    medium: Medium,
    paragraphs: Vec<String>,
    quote: Option<String>,
    attachment: Attachment,
    highlighted: bool,
}

impl TimelineEvent {
    pub fn new(
        id: impl Into<String>,
        year: impl Into<String>,
        date: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            year: year.into(),
            date: date.into(),
            title: title.into(),
            medium: Medium::default(),
            paragraphs: Vec::new(),
            quote: None,
            attachment: Attachment::default(),
            highlighted: false,
        }
    }

    pub fn with_medium(mut self, medium: Medium) -> Self {
        self.medium = medium;
        self
    }

    pub fn with_paragraphs(mut self, paragraphs: Vec<String>) -> Self {
        self.paragraphs = paragraphs;
        self
    }

    pub fn with_quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = Some(quote.into());
        self
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = attachment;
        self
    }

    /// Marks the event as the current year's entry.
    pub fn with_highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn medium(&self) -> Medium {
        self.medium
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// Returns the closing quotation shown in a block under the description.
    pub fn quote(&self) -> Option<&str> {
        self.quote.as_deref()
    }

    pub fn attachment(&self) -> &Attachment {
        &self.attachment
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

/// A photo card with a reflection revealed on demand.
#[derive(Debug, Clone)]
pub struct MemoryCard {
    id: String,
    time: String,
    title: String,
    image: String,
    reflection: Vec<String>,
}

impl MemoryCard {
    pub fn new(
        id: impl Into<String>,
        time: impl Into<String>,
        title: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            time: time.into(),
            title: title.into(),
            image: image.into(),
            reflection: Vec::new(),
        }
    }

    pub fn with_reflection(mut self, reflection: Vec<String>) -> Self {
        self.reflection = reflection;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the time label, e.g. `2025.MAR`.
    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn reflection(&self) -> &[String] {
        &self.reflection
    }
}

/// A two-sided quote card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipCard {
    id: String,
    front: String,
    back: String,
}

impl FlipCard {
    pub fn new(id: impl Into<String>, front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            front: front.into(),
            back: back.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }
}

/// How far along an idea in the notebook is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum IdeaStatus {
    /// Nothing to open yet.
    #[default]
    InProgress,
    /// Written up; the content opens in place.
    Ready { content: Vec<String> },
    /// Lives elsewhere; the card links out.
    External { href: String },
}

impl IdeaStatus {
    /// Returns the badge label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            IdeaStatus::InProgress => "wip",
            IdeaStatus::Ready { .. } => "ready",
            IdeaStatus::External { .. } => "link",
        }
    }
}

/// One entry of the idea notebook.
#[derive(Debug, Clone)]
pub struct IdeaCard {
    id: String,
    title: String,
    preview: String,
    status: IdeaStatus,
}

impl IdeaCard {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        preview: impl Into<String>,
        status: IdeaStatus,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            preview: preview.into(),
            status,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub fn status(&self) -> &IdeaStatus {
        &self.status
    }
}

/// The closing section: a pipeline of outstanding work, an optional goal
/// with a hidden response, short cheer messages and a final blessing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Closing {
    pipeline: Vec<PipelineGroup>,
    goal: Option<Goal>,
    messages: Vec<String>,
    blessing: Vec<String>,
}

impl Closing {
    pub fn new(messages: Vec<String>, blessing: Vec<String>) -> Self {
        Self {
            pipeline: Vec::new(),
            goal: None,
            messages,
            blessing,
        }
    }

    pub fn with_pipeline(mut self, pipeline: Vec<PipelineGroup>) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Returns the pipeline groups in authored order.
    pub fn pipeline(&self) -> &[PipelineGroup] {
        &self.pipeline
    }

    pub fn goal(&self) -> Option<&Goal> {
        self.goal.as_ref()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn blessing(&self) -> &[String] {
        &self.blessing
    }
}

/// A heading over a run of pipeline items, such as "Urgent" or "Planning".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineGroup {
    heading: String,
    note: Option<String>,
    items: Vec<PipelineItem>,
}

impl PipelineGroup {
    pub fn new(heading: impl Into<String>, items: Vec<PipelineItem>) -> Self {
        Self {
            heading: heading.into(),
            note: None,
            items,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn items(&self) -> &[PipelineItem] {
        &self.items
    }
}

/// One piece of outstanding work in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineItem {
    title: String,
    badge: Option<String>,
    note: Option<String>,
    quote: Option<String>,
    action: Option<PipelineAction>,
}

impl PipelineItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            badge: None,
            note: None,
            quote: None,
            action: None,
        }
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = Some(quote.into());
        self
    }

    pub fn with_action(mut self, action: PipelineAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn badge(&self) -> Option<&str> {
        self.badge.as_deref()
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn quote(&self) -> Option<&str> {
        self.quote.as_deref()
    }

    pub fn action(&self) -> Option<&PipelineAction> {
        self.action.as_ref()
    }
}

/// What the button on a pipeline item does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineAction {
    /// Opens a draft somewhere else.
    Link { label: String, href: String },
    /// Reveals more text in place.
    Details {
        label: String,
        paragraphs: Vec<String>,
    },
}

impl PipelineAction {
    /// Returns the button label.
    pub fn label(&self) -> &str {
        match self {
            PipelineAction::Link { label, .. } | PipelineAction::Details { label, .. } => label,
        }
    }
}

/// A question for the coming year and the answer kept behind a reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    question: String,
    response: String,
    image: Option<String>,
}

impl Goal {
    pub fn new(question: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            response: response.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    /// Returns the image shown with the response, such as a photo of a reply.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}
