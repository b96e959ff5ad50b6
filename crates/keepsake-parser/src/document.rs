//! Raw content document as deserialized from TOML.
//!
//! These types mirror the file layout one-to-one and keep source spans on
//! every value that a diagnostic may need to point at. They are turned into
//! the content model by [`crate::elaborate`].

use keepsake_core::content::Medium;
use serde::Deserialize;
use toml::Spanned;

/// A prose string with its location in the document.
pub(crate) type Prose = Spanned<String>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawDocument {
    pub title: String,
    #[serde(default)]
    pub footer: Option<Prose>,
    #[serde(default)]
    pub hero: RawHero,
    #[serde(default)]
    pub soundtrack: Option<RawSoundtrack>,
    #[serde(default)]
    pub sections: Vec<RawSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawHero {
    #[serde(default)]
    pub dedication: Option<Prose>,
    #[serde(default)]
    pub titles: Vec<RawTitleLine>,
    #[serde(default)]
    pub epigraph: Option<Prose>,
    #[serde(default)]
    pub signature: Option<Prose>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawTitleLine {
    pub primary: String,
    #[serde(default)]
    pub translation: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawSoundtrack {
    pub title: String,
    #[serde(default)]
    pub artist: Option<String>,
    pub source: String,
}

/// A section table. Each item list belongs to one kind; lists that do not
/// match `kind` are reported rather than read.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawSection {
    pub id: Spanned<String>,
    pub kind: Spanned<String>,
    pub heading: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub intro: Vec<Prose>,

    #[serde(default)]
    pub events: Option<Spanned<Vec<RawTimelineEvent>>>,
    #[serde(default)]
    pub cards: Option<Spanned<Vec<RawMemoryCard>>>,
    #[serde(default)]
    pub quotes: Option<Spanned<Vec<RawFlipCard>>>,
    #[serde(default)]
    pub ideas: Option<Spanned<Vec<RawIdeaCard>>>,
    #[serde(default)]
    pub tasks: Option<Spanned<Vec<RawTask>>>,
    #[serde(default)]
    pub pipeline: Option<Spanned<Vec<RawPipelineGroup>>>,
    #[serde(default)]
    pub goal: Option<Spanned<RawGoal>>,
    #[serde(default)]
    pub messages: Option<Spanned<Vec<Prose>>>,
    #[serde(default)]
    pub blessing: Option<Spanned<Vec<Prose>>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawTimelineEvent {
    pub id: Spanned<String>,
    pub year: String,
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub medium: Medium,
    #[serde(default)]
    pub paragraphs: Vec<Prose>,
    #[serde(default)]
    pub quote: Option<Prose>,
    #[serde(default)]
    pub document: Option<Spanned<String>>,
    #[serde(default)]
    pub slides: Option<Spanned<Vec<String>>>,
    #[serde(default)]
    pub highlighted: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawMemoryCard {
    pub id: Spanned<String>,
    pub time: String,
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub reflection: Vec<Prose>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawFlipCard {
    pub id: Spanned<String>,
    pub front: Prose,
    pub back: Prose,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawIdeaCard {
    pub id: Spanned<String>,
    pub title: String,
    pub preview: Prose,
    #[serde(default)]
    pub link: Option<Spanned<String>>,
    #[serde(default)]
    pub content: Option<Spanned<Vec<Prose>>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawTask {
    pub label: String,
    pub start: Spanned<u32>,
    pub duration: Spanned<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawPipelineGroup {
    pub heading: String,
    #[serde(default)]
    pub note: Option<Prose>,
    #[serde(default)]
    pub items: Vec<RawPipelineItem>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawPipelineItem {
    pub title: Prose,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub note: Option<Prose>,
    #[serde(default)]
    pub quote: Option<Prose>,
    #[serde(default)]
    pub action: Option<Spanned<RawAction>>,
}

/// A pipeline button. Exactly one of `link` and `details` must be set.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawAction {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub link: Option<Spanned<String>>,
    #[serde(default)]
    pub details: Option<Spanned<Vec<Prose>>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawGoal {
    pub question: Prose,
    pub response: Prose,
    #[serde(default)]
    pub image: Option<String>,
}

/// Deserializes a content document.
pub(crate) fn from_str(source: &str) -> Result<RawDocument, toml::de::Error> {
    toml::from_str(source)
}
