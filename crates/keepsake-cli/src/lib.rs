//! CLI logic for the Keepsake page generator.
//!
//! Reads one content document, then either validates it (`--check`) or
//! writes the rendered HTML page and, on request, the schedule chart as a
//! standalone SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use keepsake::{KeepsakeError, PageBuilder};

use error_adapter::{DiagnosticAdapter, render_report};

/// Run the Keepsake CLI application
///
/// # Errors
///
/// Returns `KeepsakeError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing and validation errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), KeepsakeError> {
    info!(
        input_path = args.input,
        output_path = args.output,
        check = args.check;
        "Processing content document"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = PageBuilder::new(app_config);
    let (page, warnings) = builder.parse_with_warnings(&source)?.into_parts();

    for warning in &warnings {
        warn!("{}", render_report(&DiagnosticAdapter::new(warning, &source)));
    }

    if args.check {
        info!(warnings = warnings.len(); "Content document is valid");
        return Ok(());
    }

    let html = builder.render_html(&page)?;
    fs::write(&args.output, html)?;
    info!(output_file = args.output; "HTML exported successfully");

    if let Some(chart_path) = &args.chart {
        match page.schedule() {
            Some(intervals) => {
                let svg = builder.render_schedule_svg(intervals)?;
                fs::write(chart_path, svg)?;
                info!(output_file = chart_path; "Schedule chart exported successfully");
            }
            None => warn!(output_file = chart_path; "Page has no plan section, no chart written"),
        }
    }

    Ok(())
}
