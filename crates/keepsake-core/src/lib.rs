//! Keepsake Core Types and Definitions
//!
//! This crate provides the foundational types for Keepsake greeting pages.
//! It includes:
//!
//! - **Content**: The authored page model ([`content`] module)
//! - **Text**: Emphasis-aware text segments ([`text::TextSegment`])
//! - **Schedule**: Month-axis intervals and their layout ([`schedule`] module)
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **State**: Initial states for interactive page elements ([`state`] module)

pub mod color;
pub mod content;
pub mod geometry;
pub mod schedule;
pub mod state;
pub mod text;
