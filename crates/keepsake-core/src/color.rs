//! Color handling for Keepsake pages
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Configured colors are validated once and then
//! written back out as CSS color strings in the page stylesheet and the
//! schedule chart.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a CSS color string such as "#2d2a26",
    /// "rgb(168, 162, 158)" or "goldenrod".
    ///
    /// # Examples
    ///
    /// ```
    /// use keepsake_core::color::Color;
    ///
    /// let ink = Color::new("#2d2a26").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates a new color with the specified alpha (transparency) value.
    ///
    /// # Examples
    ///
    /// ```
    /// use keepsake_core::color::Color;
    ///
    /// let gold = Color::new("#d4af37").unwrap();
    /// assert_eq!(gold.with_alpha(0.5).alpha(), 0.5);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha component, between 0.0 (transparent) and 1.0 (opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}
