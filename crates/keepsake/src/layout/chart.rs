//! Schedule chart layout.
//!
//! A [`ScheduleChart`] places one bar per [`ScheduleInterval`] on a month
//! track. Horizontal placement comes straight from
//! [`ScheduleInterval::layout`]; bars that run off either end of the axis are
//! kept at their computed size, and the chart bounds grow to contain them.

use log::{debug, trace};

use keepsake_core::{
    geometry::{Bounds, Insets, Point, Size},
    schedule::{AXIS_UNITS, LayoutRect, ScheduleInterval},
};

use crate::config::LayoutConfig;

/// One positioned bar with its label.
#[derive(Debug, Clone)]
pub struct ChartRow {
    label: String,
    label_anchor: Point,
    rect: LayoutRect,
    bar: Bounds,
}

impl ChartRow {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Baseline start point of the label text.
    pub fn label_anchor(&self) -> Point {
        self.label_anchor
    }

    /// The percentage layout the bar was placed from.
    pub fn rect(&self) -> LayoutRect {
        self.rect
    }

    pub fn bar(&self) -> Bounds {
        self.bar
    }

    pub fn overflows_axis(&self) -> bool {
        self.rect.overflows_axis()
    }
}

/// A vertical grid line at a unit boundary, with its month label.
#[derive(Debug, Clone, Copy)]
pub struct GridLine {
    unit: u32,
    x: f32,
}

impl GridLine {
    /// Axis unit this line starts, `1..=AXIS_UNITS`, or `AXIS_UNITS + 1`
    /// for the closing line.
    pub fn unit(self) -> u32 {
        self.unit
    }

    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns `false` for the closing line at the end of the axis.
    pub fn has_label(self) -> bool {
        self.unit <= AXIS_UNITS
    }
}

/// A fully positioned schedule chart.
#[derive(Debug, Clone)]
pub struct ScheduleChart {
    track: Bounds,
    header_baseline: f32,
    grid: Vec<GridLine>,
    rows: Vec<ChartRow>,
    bounds: Bounds,
}

impl ScheduleChart {
    /// Lays out `intervals` in order, one row each.
    ///
    /// # Errors
    ///
    /// Returns an error message if the configured geometry is not usable,
    /// such as a non-positive chart width or row height.
    pub fn build(intervals: &[ScheduleInterval], config: &LayoutConfig) -> Result<Self, String> {
        Self::validate(config)?;

        let padding = config.padding();
        let width = config.chart_width();
        let row_pitch = config.row_height() + config.row_gap();
        let track_left = padding + config.label_width();
        let header_height = config.row_height();

        let track_top = padding;
        let rows_top = track_top + header_height + config.row_gap();
        let track_height = header_height + config.row_gap() + row_pitch * intervals.len() as f32;
        let track = Bounds::new_from_top_left(
            Point::new(track_left, track_top),
            Size::new(width, track_height),
        );

        let unit_width = width / AXIS_UNITS as f32;
        let grid = (1..=AXIS_UNITS + 1)
            .map(|unit| GridLine {
                unit,
                x: track_left + (unit - 1) as f32 * unit_width,
            })
            .collect();

        let rows: Vec<ChartRow> = intervals
            .iter()
            .enumerate()
            .map(|(index, interval)| {
                let rect = interval.layout();
                let top = rows_top + index as f32 * row_pitch;
                let bar = Bounds::new_from_top_left(
                    Point::new(
                        track_left + rect.offset_percent() / 100.0 * width,
                        top,
                    ),
                    Size::new(rect.width_percent() / 100.0 * width, config.row_height()),
                );
                trace!(
                    label = interval.label(),
                    x = bar.min_x(),
                    width = bar.width();
                    "Bar placed"
                );

                ChartRow {
                    label: interval.label().to_string(),
                    label_anchor: Point::new(padding, top + config.row_height() * 0.7),
                    rect,
                    bar,
                }
            })
            .collect();

        let frame = Bounds::new_from_top_left(Point::default(), Size::default())
            .merge(&track.add_padding(Insets::uniform(padding)));
        let bounds = rows.iter().fold(frame, |acc, row| {
            acc.merge(&row.bar.add_padding(Insets::uniform(padding)))
        });

        debug!(
            rows = rows.len(),
            width = bounds.width(),
            height = bounds.height();
            "Schedule chart laid out"
        );

        Ok(Self {
            track,
            header_baseline: track_top + header_height * 0.7,
            grid,
            rows,
            bounds,
        })
    }

    /// The month track, header included.
    pub fn track(&self) -> Bounds {
        self.track
    }

    /// Baseline of the month labels.
    pub fn header_baseline(&self) -> f32 {
        self.header_baseline
    }

    pub fn grid(&self) -> &[GridLine] {
        &self.grid
    }

    pub fn rows(&self) -> &[ChartRow] {
        &self.rows
    }

    /// Everything drawn, padding included. May start left of the origin when
    /// a bar begins before the axis.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn validate(config: &LayoutConfig) -> Result<(), String> {
        let positive = [
            ("chart_width", config.chart_width()),
            ("row_height", config.row_height()),
        ];
        let non_negative = [
            ("label_width", config.label_width()),
            ("row_gap", config.row_gap()),
            ("padding", config.padding()),
        ];

        if let Some((name, value)) = positive.iter().find(|(_, v)| !(v.is_finite() && *v > 0.0)) {
            return Err(format!("{name} must be positive, got {value}"));
        }
        if let Some((name, value)) = non_negative
            .iter()
            .find(|(_, v)| !(v.is_finite() && *v >= 0.0))
        {
            return Err(format!("{name} must not be negative, got {value}"));
        }
        Ok(())
    }
}
