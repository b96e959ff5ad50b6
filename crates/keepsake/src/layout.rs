//! Pixel layout of page graphics.
//!
//! The percentages produced by the interval layout calculator are mapped onto
//! concrete pixel geometry here, ready for export.

pub mod chart;
