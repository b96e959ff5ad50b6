//! Keepsake - static greeting pages from a content document.
//!
//! Parsing, layout, and rendering for Keepsake pages. A TOML content document
//! describes a hero banner and a list of sections; the result is a single
//! HTML file with an inline SVG schedule chart.

pub mod config;

mod error;
mod export;
mod layout;

pub use keepsake_core::{color, content, schedule, state, text};
pub use keepsake_parser::{Parsed, markup};

pub use error::KeepsakeError;

use std::collections::HashMap;

use log::{debug, info, trace, warn};

use keepsake_core::{
    content::{Page, SectionBody},
    schedule::ScheduleInterval,
};

use config::AppConfig;
use export::{html::HtmlExporter, svg::ChartSvg};
use layout::chart::ScheduleChart;

/// Builder for parsing and rendering Keepsake pages.
///
/// # Examples
///
/// ```rust,no_run
/// use keepsake::{PageBuilder, config::AppConfig};
///
/// let source = std::fs::read_to_string("greeting.toml").unwrap();
///
/// let builder = PageBuilder::new(AppConfig::default());
///
/// // Parse source to the content model
/// let page = builder.parse(&source).expect("Failed to parse");
///
/// // Render the page to HTML
/// let html = builder.render_html(&page).expect("Failed to render");
///
/// // Or use default config
/// let builder = PageBuilder::default();
/// ```
#[derive(Default)]
pub struct PageBuilder {
    config: AppConfig,
}

impl PageBuilder {
    /// Create a new page builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder renders with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a content document into a page.
    ///
    /// Warnings found while parsing are logged and otherwise ignored; use
    /// [`PageBuilder::parse_with_warnings`] to receive them.
    ///
    /// # Errors
    ///
    /// Returns `KeepsakeError::Parse` if the document is malformed or fails
    /// validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use keepsake::PageBuilder;
    ///
    /// let page = PageBuilder::default()
    ///     .parse("title = \"Happy New Year\"")
    ///     .expect("Failed to parse page");
    /// assert_eq!(page.title(), "Happy New Year");
    /// ```
    pub fn parse(&self, source: &str) -> Result<Page, KeepsakeError> {
        let (page, warnings) = self.parse_with_warnings(source)?.into_parts();
        for warning in &warnings {
            warn!(code:? = warning.code(); "{warning}");
        }
        Ok(page)
    }

    /// Parse a content document, returning the page together with its
    /// warnings.
    ///
    /// # Errors
    ///
    /// Returns `KeepsakeError::Parse` if the document is malformed or fails
    /// validation.
    pub fn parse_with_warnings(&self, source: &str) -> Result<Parsed, KeepsakeError> {
        info!("Parsing content document");

        let parsed = keepsake_parser::parse(source)
            .map_err(|err| KeepsakeError::new_parse_error(err, source))?;

        debug!(warnings = parsed.warnings().len(); "Content document parsed");
        trace!(page:? = parsed.page(); "Parsed page");

        Ok(parsed)
    }

    /// Render a page to a complete HTML document.
    ///
    /// Every plan section gets its schedule chart inlined.
    ///
    /// # Errors
    ///
    /// Returns `KeepsakeError::Layout` if the chart geometry is unusable and
    /// `KeepsakeError::Export` if rendering fails.
    pub fn render_html(&self, page: &Page) -> Result<String, KeepsakeError> {
        info!(title = page.title(); "Rendering page");

        let mut charts = HashMap::new();
        for section in page.sections() {
            if let SectionBody::Plan(intervals) = section.body() {
                charts.insert(
                    section.id().to_string(),
                    self.render_schedule_svg(intervals)?,
                );
            }
        }

        let html = HtmlExporter::new(&self.config).render(page, &charts)?;

        info!(bytes = html.len(); "HTML rendered successfully");
        Ok(html)
    }

    /// Render a schedule as a standalone SVG chart.
    ///
    /// # Errors
    ///
    /// Returns `KeepsakeError::Layout` if the chart geometry is unusable and
    /// `KeepsakeError::Export` if a configured color is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use keepsake::{PageBuilder, schedule::ScheduleInterval};
    ///
    /// let svg = PageBuilder::default()
    ///     .render_schedule_svg(&[ScheduleInterval::new("Thesis Proposal", 9, 2)])
    ///     .expect("Failed to render chart");
    /// assert!(svg.contains("Thesis Proposal"));
    /// ```
    pub fn render_schedule_svg(
        &self,
        intervals: &[ScheduleInterval],
    ) -> Result<String, KeepsakeError> {
        debug!(intervals = intervals.len(); "Laying out schedule chart");
        let chart =
            ScheduleChart::build(intervals, self.config.layout()).map_err(KeepsakeError::Layout)?;

        let overflowing = chart.rows().iter().filter(|row| row.overflows_axis()).count();
        if overflowing > 0 {
            debug!(overflowing; "Bars extend past the axis");
        }

        let document = ChartSvg::new(self.config.style())?.render(&chart);
        Ok(document.to_string())
    }
}
