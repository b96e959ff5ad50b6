//! Month-axis schedule intervals and their percentage layout.
//!
//! A schedule is drawn as a Gantt-style chart over an axis of
//! [`AXIS_UNITS`] equal units (months). Each [`ScheduleInterval`] maps to a
//! [`LayoutRect`] expressed as percentages of the axis width, so the view
//! layer can position a bar inside a track of any pixel width.
//!
//! The calculation is pure arithmetic over authored data: nothing is clamped
//! or validated here. An interval that runs past the end of the axis yields
//! `offset_percent + width_percent > 100`.

use log::trace;

/// Number of equal units on the schedule axis.
pub const AXIS_UNITS: u32 = 12;

/// Slack, in percent, allowed for `f32` rounding at the axis ends.
pub const OVERFLOW_TOLERANCE: f32 = 1e-3;

/// A named task positioned on the month axis.
///
/// `start_unit` is 1-based: `1` is the first unit on the axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleInterval {
    label: String,
    start_unit: u32,
    duration_units: u32,
}

impl ScheduleInterval {
    /// Creates a new interval.
    ///
    /// # Arguments
    ///
    /// * `label` - Task name shown next to the bar.
    /// * `start_unit` - 1-based first unit of the task.
    /// * `duration_units` - Number of units the task spans.
    pub fn new(label: impl Into<String>, start_unit: u32, duration_units: u32) -> Self {
        Self {
            label: label.into(),
            start_unit,
            duration_units,
        }
    }

    /// Returns the task label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the 1-based start unit.
    pub fn start_unit(&self) -> u32 {
        self.start_unit
    }

    /// Returns the duration in axis units.
    pub fn duration_units(&self) -> u32 {
        self.duration_units
    }

    /// Computes the percentage layout of this interval.
    pub fn layout(&self) -> LayoutRect {
        let rect = interval_layout(self.start_unit, self.duration_units);
        trace!(
            label = self.label,
            offset_percent = rect.offset_percent(),
            width_percent = rect.width_percent();
            "Interval laid out"
        );
        rect
    }
}

/// Horizontal placement of a bar as percentages of the axis width.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutRect {
    offset_percent: f32,
    width_percent: f32,
}

impl LayoutRect {
    /// Creates a new layout rectangle from raw percentages.
    pub fn new(offset_percent: f32, width_percent: f32) -> Self {
        Self {
            offset_percent,
            width_percent,
        }
    }

    /// Distance from the start of the axis to the start of the bar.
    pub fn offset_percent(self) -> f32 {
        self.offset_percent
    }

    /// Width of the bar.
    pub fn width_percent(self) -> f32 {
        self.width_percent
    }

    /// Position of the bar's trailing edge.
    pub fn end_percent(self) -> f32 {
        self.offset_percent + self.width_percent
    }

    /// Returns `true` if the bar extends past either end of the axis.
    ///
    /// Rounding noise below [`OVERFLOW_TOLERANCE`] is not an overflow.
    pub fn overflows_axis(self) -> bool {
        self.offset_percent < -OVERFLOW_TOLERANCE || self.end_percent() > 100.0 + OVERFLOW_TOLERANCE
    }
}

/// Maps a 1-based start unit and a duration onto the 12-unit axis.
///
/// `offset = (start_unit - 1) / 12 * 100` and `width = duration_units / 12 * 100`.
/// Out-of-range input is not rejected; the raw values are returned.
///
/// # Examples
///
/// ```
/// # use keepsake_core::schedule::interval_layout;
/// let rect = interval_layout(7, 1);
/// assert_eq!(rect.offset_percent(), 50.0);
/// assert!((rect.width_percent() - 8.33).abs() < 0.01);
///
/// // Runs past the axis; not clamped.
/// assert!(interval_layout(12, 3).end_percent() > 100.0);
/// ```
pub fn interval_layout(start_unit: u32, duration_units: u32) -> LayoutRect {
    let axis = AXIS_UNITS as f32;
    LayoutRect {
        offset_percent: (start_unit as f32 - 1.0) / axis * 100.0,
        width_percent: duration_units as f32 / axis * 100.0,
    }
}
