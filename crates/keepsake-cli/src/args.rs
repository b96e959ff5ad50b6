//! Command-line argument definitions for the Keepsake CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the content document, where the page
//! and the optional standalone chart are written, the configuration file,
//! and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Keepsake page generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input content document
    #[arg(help = "Path to the TOML content document")]
    pub input: String,

    /// Path to the output HTML file
    #[arg(short, long, default_value = "out.html")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Also write the plan section's schedule chart to this SVG file
    #[arg(long)]
    pub chart: Option<String>,

    /// Parse and validate only; report warnings and write nothing
    #[arg(long)]
    pub check: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["keepsake", "greeting.toml"]).unwrap();
        assert_eq!(args.input, "greeting.toml");
        assert_eq!(args.output, "out.html");
        assert!(args.config.is_none());
        assert!(args.chart.is_none());
        assert!(!args.check);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "keepsake",
            "greeting.toml",
            "-o",
            "site/index.html",
            "-c",
            "keepsake.toml",
            "--chart",
            "plan.svg",
            "--check",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.output, "site/index.html");
        assert_eq!(args.config.as_deref(), Some("keepsake.toml"));
        assert_eq!(args.chart.as_deref(), Some("plan.svg"));
        assert!(args.check);
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_input_is_required() {
        assert!(Args::try_parse_from(["keepsake"]).is_err());
    }
}
