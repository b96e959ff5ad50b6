//! SVG rendering of the schedule chart.

use log::debug;
use svg::{Document, node::element as svg_element};

use keepsake_core::{color::Color, geometry::Bounds};

use super::Error;
use crate::{config::StyleConfig, layout::chart::ScheduleChart};

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const FONT_SIZE: f32 = 12.0;
/// Bar opacities, applied on top of whatever alpha the accent color carries.
const BAR_OPACITY: f32 = 0.9;
/// Bars past the axis are faded so the overflow reads as tentative.
const OVERFLOW_OPACITY: f32 = 0.55;

/// Renders a [`ScheduleChart`] with the colors of a [`StyleConfig`].
pub struct ChartSvg {
    accent: Color,
    grid: Color,
    text: Color,
    font_family: String,
}

impl ChartSvg {
    /// Resolves the chart palette from `style`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if a configured color is invalid.
    pub fn new(style: &StyleConfig) -> Result<Self, Error> {
        Ok(Self {
            accent: style.accent_color().map_err(Error::Render)?,
            grid: style.grid_color().map_err(Error::Render)?,
            text: style.text_color().map_err(Error::Render)?,
            font_family: style.font_family().to_string(),
        })
    }

    /// Renders the chart to an SVG document sized to the chart bounds.
    pub fn render(&self, chart: &ScheduleChart) -> Document {
        let bounds = chart.bounds();
        let doc = Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    bounds.min_x(),
                    bounds.min_y(),
                    bounds.width(),
                    bounds.height()
                ),
            )
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("class", "schedule-chart")
            .set("role", "img")
            .set("font-family", self.font_family.as_str())
            .set("font-size", FONT_SIZE);

        let doc = doc
            .add(self.render_grid(chart))
            .add(self.render_bars(chart));

        debug!(rows = chart.rows().len(); "SVG chart rendered");
        doc
    }

    fn render_grid(&self, chart: &ScheduleChart) -> svg_element::Group {
        let track = chart.track();
        let mut group = svg_element::Group::new().set("class", "grid");

        for (index, line) in chart.grid().iter().enumerate() {
            group = group.add(
                svg_element::Line::new()
                    .set("x1", line.x())
                    .set("y1", track.min_y())
                    .set("x2", line.x())
                    .set("y2", track.max_y())
                    .set("stroke", self.grid.to_string())
                    .set("stroke-width", 1),
            );

            if line.has_label() {
                let unit_width = chart
                    .grid()
                    .get(index + 1)
                    .map_or(0.0, |next| next.x() - line.x());
                group = group.add(
                    svg_element::Text::new(MONTH_LABELS[index])
                        .set("x", line.x() + unit_width / 2.0)
                        .set("y", chart.header_baseline())
                        .set("text-anchor", "middle")
                        .set("fill", self.text.to_string()),
                );
            }
        }

        group
    }

    fn render_bars(&self, chart: &ScheduleChart) -> svg_element::Group {
        let mut group = svg_element::Group::new().set("class", "bars");

        for row in chart.rows() {
            let anchor = row.label_anchor();
            group = group.add(
                svg_element::Text::new(row.label())
                    .set("x", anchor.x())
                    .set("y", anchor.y())
                    .set("fill", self.text.to_string()),
            );
            group = group.add(self.render_bar(row.bar(), row.overflows_axis()));
        }

        group
    }

    fn render_bar(&self, bar: Bounds, overflows: bool) -> svg_element::Rectangle {
        let (class, opacity) = if overflows {
            ("bar overflow", OVERFLOW_OPACITY)
        } else {
            ("bar", BAR_OPACITY)
        };
        let min_point = bar.min_point();
        let fill = self.accent.with_alpha(self.accent.alpha() * opacity);

        svg_element::Rectangle::new()
            .set("class", class)
            .set("x", min_point.x())
            .set("y", min_point.y())
            .set("width", bar.width())
            .set("height", bar.height())
            .set("rx", 4.0)
            .set("fill", fill.to_string())
    }
}

#[cfg(test)]
mod tests {
    use keepsake_core::schedule::ScheduleInterval;

    use super::*;
    use crate::config::LayoutConfig;

    fn render(intervals: &[ScheduleInterval]) -> String {
        render_styled(intervals, &StyleConfig::default())
    }

    fn render_styled(intervals: &[ScheduleInterval], style: &StyleConfig) -> String {
        let chart = ScheduleChart::build(intervals, &LayoutConfig::default()).unwrap();
        ChartSvg::new(style).unwrap().render(&chart).to_string()
    }

    /// Fill attribute of every bar, in document order.
    fn bar_fills(svg: &str) -> Vec<String> {
        svg.split("<rect")
            .skip(1)
            .filter_map(|rest| {
                let element = &rest[..rest.find("/>")?];
                if !element.contains("class=\"bar") {
                    return None;
                }
                let start = element.find("fill=\"")? + "fill=\"".len();
                let len = element[start..].find('"')?;
                Some(element[start..start + len].to_string())
            })
            .collect()
    }

    #[test]
    fn test_chart_has_bar_per_interval() {
        let svg = render(&[
            ScheduleInterval::new("Lit Review", 1, 2),
            ScheduleInterval::new("Data Collection", 3, 3),
        ]);

        assert!(svg.contains("<svg"));
        assert_eq!(svg.matches("class=\"bar\"").count(), 2);
        assert!(svg.contains("Lit Review"));
        assert!(svg.contains("Dec"));
    }

    #[test]
    fn test_overflowing_bar_is_marked() {
        let svg = render(&[ScheduleInterval::new("Thesis", 12, 3)]);

        assert!(svg.contains("class=\"bar overflow\""));
    }

    #[test]
    fn test_overflowing_bar_is_faded() {
        let svg = render(&[
            ScheduleInterval::new("Draft", 1, 2),
            ScheduleInterval::new("Thesis", 12, 3),
        ]);

        let fills = bar_fills(&svg);
        assert_eq!(fills.len(), 2);
        assert_ne!(fills[0], fills[1]);
    }

    #[test]
    fn test_accent_alpha_is_kept() {
        let intervals = [ScheduleInterval::new("Draft", 1, 2)];
        let opaque: StyleConfig = toml::from_str(r#"accent_color = "rgb(192, 57, 43)""#).unwrap();
        let translucent: StyleConfig =
            toml::from_str(r#"accent_color = "rgba(192, 57, 43, 0.5)""#).unwrap();

        let opaque_fills = bar_fills(&render_styled(&intervals, &opaque));
        let translucent_fills = bar_fills(&render_styled(&intervals, &translucent));

        assert_eq!(opaque_fills.len(), 1);
        assert_ne!(opaque_fills, translucent_fills);
    }

    #[test]
    fn test_labels_are_escaped() {
        let svg = render(&[ScheduleInterval::new("R&D <draft>", 2, 1)]);

        assert!(!svg.contains("<draft>"));
        assert!(svg.contains("&lt;draft&gt;"));
    }
}
