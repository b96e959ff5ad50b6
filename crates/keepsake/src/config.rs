//! Configuration types for Keepsake page rendering.
//!
//! This module provides configuration structures that control how the page
//! and its schedule chart are laid out, styled, and which interactive state
//! each widget starts in. All types implement [`serde::Deserialize`] for
//! loading from external sources; every field has a default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`LayoutConfig`] - Pixel geometry of the schedule chart.
//! - [`StyleConfig`] - Page and chart colors and the font stack.
//! - [`InteractionConfig`] - Initial state of expandable, flippable and playable widgets.
//!
//! # Example
//!
//! ```
//! # use keepsake::config::AppConfig;
//! let config: AppConfig = toml::from_str(
//!     r##"
//!     [layout]
//!     chart_width = 800.0
//!
//!     [style]
//!     accent_color = "#c0392b"
//!
//!     [interaction]
//!     quotes = "back"
//!     "##,
//! )
//! .unwrap();
//!
//! assert_eq!(config.layout().chart_width(), 800.0);
//! assert!(config.style().accent_color().is_ok());
//! assert!(config.interaction().quotes().shows_back());
//! ```

use serde::Deserialize;

use keepsake_core::{
    color::Color,
    state::{CardFace, Disclosure, Playback},
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Schedule chart geometry.
    #[serde(default)]
    layout: LayoutConfig,

    /// Colors and fonts.
    #[serde(default)]
    style: StyleConfig,

    /// Initial widget states.
    #[serde(default)]
    interaction: InteractionConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layout: LayoutConfig, style: StyleConfig, interaction: InteractionConfig) -> Self {
        Self {
            layout,
            style,
            interaction,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the interaction configuration.
    pub fn interaction(&self) -> &InteractionConfig {
        &self.interaction
    }
}

/// Pixel geometry of the schedule chart.
///
/// The month axis is a track `chart_width` pixels wide, to the right of a
/// label column. Bars are stacked one per row.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    chart_width: f32,
    label_width: f32,
    row_height: f32,
    row_gap: f32,
    padding: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            chart_width: 600.0,
            label_width: 150.0,
            row_height: 26.0,
            row_gap: 10.0,
            padding: 16.0,
        }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    ///
    /// # Arguments
    ///
    /// * `chart_width` - Width of the month track; 100% of the axis.
    /// * `label_width` - Width of the task label column.
    /// * `row_height` - Height of one bar.
    /// * `row_gap` - Vertical space between bars.
    /// * `padding` - Margin around the whole chart.
    pub fn new(
        chart_width: f32,
        label_width: f32,
        row_height: f32,
        row_gap: f32,
        padding: f32,
    ) -> Self {
        Self {
            chart_width,
            label_width,
            row_height,
            row_gap,
            padding,
        }
    }

    pub fn chart_width(&self) -> f32 {
        self.chart_width
    }

    pub fn label_width(&self) -> f32 {
        self.label_width
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    pub fn row_gap(&self) -> f32 {
        self.row_gap
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }
}

/// Visual styling of the page and chart.
///
/// Colors are CSS color strings; unset fields fall back to the built-in
/// palette.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    background_color: Option<String>,
    #[serde(default)]
    text_color: Option<String>,
    #[serde(default)]
    accent_color: Option<String>,
    #[serde(default)]
    grid_color: Option<String>,
    #[serde(default)]
    font_family: Option<String>,
}

const DEFAULT_BACKGROUND: &str = "#fbf7ef";
const DEFAULT_TEXT: &str = "#2d2a26";
const DEFAULT_ACCENT: &str = "#b5893c";
const DEFAULT_GRID: &str = "#e4dccb";
const DEFAULT_FONT_FAMILY: &str = "Georgia, 'Noto Serif SC', serif";

impl StyleConfig {
    /// Returns the page background [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Color, String> {
        Self::color_or(self.background_color.as_deref(), DEFAULT_BACKGROUND, "background")
    }

    /// Returns the body text [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn text_color(&self) -> Result<Color, String> {
        Self::color_or(self.text_color.as_deref(), DEFAULT_TEXT, "text")
    }

    /// Returns the accent [`Color`], used for emphasis, badges and chart bars.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn accent_color(&self) -> Result<Color, String> {
        Self::color_or(self.accent_color.as_deref(), DEFAULT_ACCENT, "accent")
    }

    /// Returns the chart grid line [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn grid_color(&self) -> Result<Color, String> {
        Self::color_or(self.grid_color.as_deref(), DEFAULT_GRID, "grid")
    }

    /// Returns the CSS font stack.
    pub fn font_family(&self) -> &str {
        self.font_family.as_deref().unwrap_or(DEFAULT_FONT_FAMILY)
    }

    fn color_or(configured: Option<&str>, default: &str, name: &str) -> Result<Color, String> {
        Color::new(configured.unwrap_or(default))
            .map_err(|err| format!("Invalid {name} color in config: {err}"))
    }
}

/// Initial state of the page's interactive widgets.
///
/// The rendered page is static; these choose which state is written into
/// the HTML before any script runs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Timeline event details.
    timeline: Disclosure,
    /// Memory card reflections.
    memories: Disclosure,
    /// Notebook idea contents.
    ideas: Disclosure,
    /// Quote flip cards.
    quotes: CardFace,
    /// Background music.
    playback: Playback,
    /// The plan chart; collapsed keeps it locked behind the unlock control.
    plan: Disclosure,
    /// Pipeline action details in the closing section.
    pipeline: Disclosure,
    /// The response to the closing goal.
    goal: Disclosure,
}

impl InteractionConfig {
    pub fn timeline(&self) -> Disclosure {
        self.timeline
    }

    pub fn memories(&self) -> Disclosure {
        self.memories
    }

    pub fn ideas(&self) -> Disclosure {
        self.ideas
    }

    pub fn quotes(&self) -> CardFace {
        self.quotes
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn plan(&self) -> Disclosure {
        self.plan
    }

    pub fn pipeline(&self) -> Disclosure {
        self.pipeline
    }

    pub fn goal(&self) -> Disclosure {
        self.goal
    }

    /// Returns a copy with every disclosure expanded.
    ///
    /// Useful for print output, where nothing can be clicked open.
    pub fn expanded(mut self) -> Self {
        self.timeline = Disclosure::Expanded;
        self.memories = Disclosure::Expanded;
        self.ideas = Disclosure::Expanded;
        self.plan = Disclosure::Expanded;
        self.pipeline = Disclosure::Expanded;
        self.goal = Disclosure::Expanded;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_is_valid() {
        let style = StyleConfig::default();

        assert!(style.background_color().is_ok());
        assert!(style.text_color().is_ok());
        assert!(style.accent_color().is_ok());
        assert!(style.grid_color().is_ok());
        assert!(!style.font_family().is_empty());
    }

    #[test]
    fn test_invalid_color_is_reported() {
        let style: StyleConfig = toml::from_str(r#"accent_color = "not-a-color""#).unwrap();

        let err = style.accent_color().unwrap_err();
        assert!(err.contains("accent"));
    }

    #[test]
    fn test_partial_layout_keeps_defaults() {
        let layout: LayoutConfig = toml::from_str("row_height = 40.0").unwrap();

        assert_eq!(layout.row_height(), 40.0);
        assert_eq!(layout.chart_width(), LayoutConfig::default().chart_width());
    }

    #[test]
    fn test_interaction_defaults_are_closed() {
        let interaction = InteractionConfig::default();

        assert!(!interaction.timeline().is_expanded());
        assert!(!interaction.quotes().shows_back());
        assert!(!interaction.playback().is_playing());
        assert!(!interaction.plan().is_expanded());
        assert!(!interaction.goal().is_expanded());
    }

    #[test]
    fn test_interaction_from_toml() {
        let interaction: InteractionConfig =
            toml::from_str("ideas = \"expanded\"\nplayback = \"playing\"").unwrap();

        assert!(interaction.ideas().is_expanded());
        assert!(interaction.playback().is_playing());
        assert!(interaction.expanded().memories().is_expanded());
    }

    #[test]
    fn test_expanded_unlocks_plan_and_reveals() {
        let interaction = InteractionConfig::default().expanded();

        assert!(interaction.plan().is_expanded());
        assert!(interaction.pipeline().is_expanded());
        assert!(interaction.goal().is_expanded());
        assert!(!interaction.quotes().shows_back());
    }
}
