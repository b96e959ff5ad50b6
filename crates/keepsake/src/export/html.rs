//! HTML rendering of a full page.
//!
//! Each section body is rendered by its own template into a fragment, and
//! the fragments are placed into the page template. Prose passes through the
//! inline markup renderer first, so emphasis becomes `<strong>` while all
//! authored text stays escaped.

use std::collections::HashMap;

use askama::Template;
use log::{debug, trace};

use keepsake_core::{
    content::{
        Attachment, Closing, FlipCard, Goal, IdeaCard, IdeaStatus, MemoryCard, Page,
        PipelineAction, PipelineGroup, PipelineItem, Section, SectionBody, TimelineEvent,
    },
    schedule::ScheduleInterval,
    text::TextSegment,
};
use keepsake_parser::markup::parse_inline;

use super::Error;
use crate::config::{AppConfig, InteractionConfig};

// ============================================================================
// Templates
// ============================================================================

#[derive(Template)]
#[template(
    source = "{% for segment in segments %}{% if segment.is_emphasized() %}<strong>{{ segment.text() }}</strong>{% else %}{{ segment.text() }}{% endif %}{% endfor %}",
    ext = "html"
)]
struct RichTextTemplate<'a> {
    segments: &'a [TextSegment],
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    view: &'a PageView,
}

#[derive(Template)]
#[template(path = "sections/timeline.html")]
struct TimelineTemplate {
    events: Vec<EventView>,
}

#[derive(Template)]
#[template(path = "sections/memories.html")]
struct MemoriesTemplate {
    cards: Vec<MemoryView>,
}

#[derive(Template)]
#[template(path = "sections/quotes.html")]
struct QuotesTemplate {
    cards: Vec<QuoteView>,
}

#[derive(Template)]
#[template(path = "sections/notebook.html")]
struct NotebookTemplate {
    ideas: Vec<IdeaView>,
}

#[derive(Template)]
#[template(path = "sections/plan.html")]
struct PlanTemplate {
    chart_svg: String,
    tasks: Vec<TaskView>,
    unlocked: bool,
}

#[derive(Template)]
#[template(path = "sections/closing.html")]
struct ClosingTemplate {
    pipeline: Vec<PipelineGroupView>,
    goal: Option<GoalView>,
    messages: Vec<String>,
    blessing: Vec<String>,
}

// ============================================================================
// Views
// ============================================================================

/// Fields holding `String` HTML fragments (`*_html`, rich prose) are already
/// escaped and are emitted with `|safe`; everything else is escaped by the
/// template.
struct PageView {
    title: String,
    background_color: String,
    text_color: String,
    accent_color: String,
    font_family: String,
    dedication: Option<String>,
    titles: Vec<TitleView>,
    epigraph: Option<String>,
    signature: Option<String>,
    soundtrack: Option<SoundtrackView>,
    nav: Vec<NavLink>,
    sections: Vec<SectionView>,
    footer: Option<String>,
}

struct TitleView {
    primary: String,
    translation: Option<String>,
}

struct SoundtrackView {
    title: String,
    artist: Option<String>,
    source: String,
    autoplay: bool,
}

struct NavLink {
    id: String,
    heading: String,
}

struct SectionView {
    id: String,
    kind: &'static str,
    heading: String,
    subtitle: Option<String>,
    intro: Vec<String>,
    body_html: String,
}

struct EventView {
    id: String,
    year: String,
    date: String,
    title: String,
    medium: &'static str,
    paragraphs: Vec<String>,
    quote: Option<String>,
    document: Option<String>,
    slides: Vec<String>,
    highlighted: bool,
    open: bool,
}

struct MemoryView {
    id: String,
    time: String,
    title: String,
    image: String,
    reflection: Vec<String>,
    open: bool,
}

struct QuoteView {
    id: String,
    front: String,
    back: String,
    face: String,
}

struct IdeaView {
    id: String,
    title: String,
    preview: String,
    status: &'static str,
    content: Vec<String>,
    href: Option<String>,
    open: bool,
}

struct TaskView {
    label: String,
    start: u32,
    duration: u32,
}

struct PipelineGroupView {
    heading: String,
    note: Option<String>,
    items: Vec<PipelineItemView>,
}

/// A pipeline item. `action_label` is empty when the item has no action.
struct PipelineItemView {
    title: String,
    badge: Option<String>,
    note: Option<String>,
    quote: Option<String>,
    action_label: String,
    href: Option<String>,
    details: Vec<String>,
    open: bool,
}

struct GoalView {
    question: String,
    response: String,
    image: Option<String>,
    open: bool,
}

// ============================================================================
// Exporter
// ============================================================================

/// Renders a [`Page`] to a complete HTML5 document.
pub struct HtmlExporter<'a> {
    config: &'a AppConfig,
}

impl<'a> HtmlExporter<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    /// Renders `page`.
    ///
    /// `charts` maps the id of each plan section to its rendered SVG chart.
    /// A plan section without an entry renders its task list only.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] for an invalid configured color and
    /// [`Error::Template`] if a template fails.
    pub fn render(&self, page: &Page, charts: &HashMap<String, String>) -> Result<String, Error> {
        let style = self.config.style();
        let interaction = self.config.interaction();
        let hero = page.hero();

        let sections = page
            .sections()
            .iter()
            .map(|section| self.section_view(section, charts))
            .collect::<Result<Vec<_>, Error>>()?;

        let view = PageView {
            title: page.title().to_string(),
            background_color: style.background_color().map_err(Error::Render)?.to_string(),
            text_color: style.text_color().map_err(Error::Render)?.to_string(),
            accent_color: style.accent_color().map_err(Error::Render)?.to_string(),
            font_family: style.font_family().to_string(),
            dedication: rich_opt(hero.dedication())?,
            titles: hero
                .titles()
                .iter()
                .map(|line| TitleView {
                    primary: line.primary().to_string(),
                    translation: line.translation().map(str::to_string),
                })
                .collect(),
            epigraph: rich_opt(hero.epigraph())?,
            signature: rich_opt(hero.signature())?,
            soundtrack: page.soundtrack().map(|track| SoundtrackView {
                title: track.title().to_string(),
                artist: track.artist().map(str::to_string),
                source: track.source().to_string(),
                autoplay: interaction.playback().is_playing(),
            }),
            nav: page
                .sections()
                .iter()
                .map(|section| NavLink {
                    id: section.id().to_string(),
                    heading: section.heading().to_string(),
                })
                .collect(),
            sections,
            footer: rich_opt(page.footer())?,
        };

        let html = PageTemplate { view: &view }.render()?;
        debug!(bytes = html.len(), sections = view.sections.len(); "HTML page rendered");
        Ok(html)
    }

    fn section_view(
        &self,
        section: &Section,
        charts: &HashMap<String, String>,
    ) -> Result<SectionView, Error> {
        trace!(id = section.id(), kind = section.kind().as_str(); "Rendering section");
        let interaction = self.config.interaction();

        let body_html = match section.body() {
            SectionBody::Timeline(events) => TimelineTemplate {
                events: events
                    .iter()
                    .map(|event| event_view(event, interaction))
                    .collect::<Result<_, _>>()?,
            }
            .render()?,
            SectionBody::Memories(cards) => MemoriesTemplate {
                cards: cards
                    .iter()
                    .map(|card| memory_view(card, interaction))
                    .collect::<Result<_, _>>()?,
            }
            .render()?,
            SectionBody::Quotes(cards) => QuotesTemplate {
                cards: cards
                    .iter()
                    .map(|card| quote_view(card, interaction))
                    .collect::<Result<_, _>>()?,
            }
            .render()?,
            SectionBody::Notebook(ideas) => NotebookTemplate {
                ideas: ideas
                    .iter()
                    .map(|idea| idea_view(idea, interaction))
                    .collect::<Result<_, _>>()?,
            }
            .render()?,
            SectionBody::Plan(intervals) => PlanTemplate {
                chart_svg: charts.get(section.id()).cloned().unwrap_or_default(),
                tasks: intervals.iter().map(task_view).collect(),
                unlocked: interaction.plan().is_expanded(),
            }
            .render()?,
            SectionBody::Closing(closing) => closing_template(closing, interaction)?.render()?,
        };

        Ok(SectionView {
            id: section.id().to_string(),
            kind: section.kind().as_str(),
            heading: section.heading().to_string(),
            subtitle: section.subtitle().map(str::to_string),
            intro: rich_all(section.intro())?,
            body_html,
        })
    }
}

// ============================================================================
// View Builders
// ============================================================================

/// Renders authored prose to an escaped HTML fragment.
fn rich(text: &str) -> Result<String, Error> {
    let segments = parse_inline(text);
    Ok(RichTextTemplate {
        segments: &segments,
    }
    .render()?)
}

fn rich_opt(text: Option<&str>) -> Result<Option<String>, Error> {
    text.map(rich).transpose()
}

fn rich_all(texts: &[String]) -> Result<Vec<String>, Error> {
    texts.iter().map(|text| rich(text)).collect()
}

fn event_view(event: &TimelineEvent, interaction: &InteractionConfig) -> Result<EventView, Error> {
    let (document, slides) = match event.attachment() {
        Attachment::None => (None, Vec::new()),
        Attachment::Document { href } => (Some(href.clone()), Vec::new()),
        Attachment::Gallery { slides } => (None, slides.clone()),
    };

    Ok(EventView {
        id: event.id().to_string(),
        year: event.year().to_string(),
        date: event.date().to_string(),
        title: event.title().to_string(),
        medium: event.medium().label(),
        paragraphs: rich_all(event.paragraphs())?,
        quote: rich_opt(event.quote())?,
        document,
        slides,
        highlighted: event.is_highlighted(),
        open: interaction.timeline().is_expanded(),
    })
}

fn memory_view(card: &MemoryCard, interaction: &InteractionConfig) -> Result<MemoryView, Error> {
    Ok(MemoryView {
        id: card.id().to_string(),
        time: card.time().to_string(),
        title: card.title().to_string(),
        image: card.image().to_string(),
        reflection: rich_all(card.reflection())?,
        open: interaction.memories().is_expanded(),
    })
}

fn quote_view(card: &FlipCard, interaction: &InteractionConfig) -> Result<QuoteView, Error> {
    Ok(QuoteView {
        id: card.id().to_string(),
        front: rich(card.front())?,
        back: rich(card.back())?,
        face: interaction.quotes().to_string(),
    })
}

fn idea_view(idea: &IdeaCard, interaction: &InteractionConfig) -> Result<IdeaView, Error> {
    let (content, href) = match idea.status() {
        IdeaStatus::InProgress => (Vec::new(), None),
        IdeaStatus::Ready { content } => (rich_all(content)?, None),
        IdeaStatus::External { href } => (Vec::new(), Some(href.clone())),
    };

    Ok(IdeaView {
        id: idea.id().to_string(),
        title: idea.title().to_string(),
        preview: rich(idea.preview())?,
        status: idea.status().label(),
        content,
        href,
        open: interaction.ideas().is_expanded(),
    })
}

fn task_view(interval: &ScheduleInterval) -> TaskView {
    TaskView {
        label: interval.label().to_string(),
        start: interval.start_unit(),
        duration: interval.duration_units(),
    }
}

fn closing_template(
    closing: &Closing,
    interaction: &InteractionConfig,
) -> Result<ClosingTemplate, Error> {
    Ok(ClosingTemplate {
        pipeline: closing
            .pipeline()
            .iter()
            .map(|group| pipeline_group_view(group, interaction))
            .collect::<Result<_, _>>()?,
        goal: closing
            .goal()
            .map(|goal| goal_view(goal, interaction))
            .transpose()?,
        messages: rich_all(closing.messages())?,
        blessing: rich_all(closing.blessing())?,
    })
}

fn pipeline_group_view(
    group: &PipelineGroup,
    interaction: &InteractionConfig,
) -> Result<PipelineGroupView, Error> {
    Ok(PipelineGroupView {
        heading: group.heading().to_string(),
        note: rich_opt(group.note())?,
        items: group
            .items()
            .iter()
            .map(|item| pipeline_item_view(item, interaction))
            .collect::<Result<_, _>>()?,
    })
}

fn pipeline_item_view(
    item: &PipelineItem,
    interaction: &InteractionConfig,
) -> Result<PipelineItemView, Error> {
    let (href, details) = match item.action() {
        None => (None, Vec::new()),
        Some(PipelineAction::Link { href, .. }) => (Some(href.clone()), Vec::new()),
        Some(PipelineAction::Details { paragraphs, .. }) => (None, rich_all(paragraphs)?),
    };

    Ok(PipelineItemView {
        title: rich(item.title())?,
        badge: item.badge().map(str::to_string),
        note: rich_opt(item.note())?,
        quote: rich_opt(item.quote())?,
        action_label: item
            .action()
            .map(|action| action.label().to_string())
            .unwrap_or_default(),
        href,
        details,
        open: interaction.pipeline().is_expanded(),
    })
}

fn goal_view(goal: &Goal, interaction: &InteractionConfig) -> Result<GoalView, Error> {
    Ok(GoalView {
        question: rich(goal.question())?,
        response: rich(goal.response())?,
        image: goal.image().map(str::to_string),
        open: interaction.goal().is_expanded(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rich_text_escapes_and_emphasizes() {
        let html = rich("Tom & **Jerry** <3").unwrap();

        assert!(html.contains("<strong>Jerry</strong>"));
        assert!(!html.contains("<3"));
        assert!(!html.contains(" & "));
    }

    #[test]
    fn test_rich_text_keeps_unpaired_marker() {
        assert_eq!(rich("a ** b").unwrap(), "a ** b");
    }

    #[test]
    fn test_rich_opt_absent() {
        assert_eq!(rich_opt(None).unwrap(), None);
    }

    #[test]
    fn test_pipeline_item_view_actions() {
        let interaction = InteractionConfig::default();
        let link = PipelineItem::new("Draft").with_action(PipelineAction::Link {
            label: "View draft".to_string(),
            href: "drafts/a.pdf".to_string(),
        });
        let details = PipelineItem::new("**Plan**").with_action(PipelineAction::Details {
            label: "Read more".to_string(),
            paragraphs: vec!["One & two.".to_string()],
        });

        let link = pipeline_item_view(&link, &interaction).unwrap();
        assert_eq!(link.href.as_deref(), Some("drafts/a.pdf"));
        assert!(link.details.is_empty());
        assert_eq!(link.action_label, "View draft");

        let details = pipeline_item_view(&details, &interaction).unwrap();
        assert_eq!(details.title, "<strong>Plan</strong>");
        assert!(details.href.is_none());
        assert_eq!(details.details.len(), 1);
        assert!(!details.details[0].contains(" & "));
        assert!(!details.open);
    }

    #[test]
    fn test_pipeline_item_without_action() {
        let view = pipeline_item_view(
            &PipelineItem::new("Idea"),
            &InteractionConfig::default().expanded(),
        )
        .unwrap();

        assert!(view.action_label.is_empty());
        assert!(view.href.is_none());
        assert!(view.open);
    }
}
