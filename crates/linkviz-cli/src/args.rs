//! Command-line argument definitions for the linkviz CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the script and output paths, the
//! configuration file, overrides for the starting list, and logging
//! verbosity.

use clap::Parser;

use linkviz::list::ListVariant;

/// Command-line arguments for the linkviz list visualizer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a command script; without one the starting list is drawn
    #[arg(help = "Path to the command script")]
    pub script: Option<String>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// List variant to start with (single, dual, circular)
    #[arg(long, value_parser = parse_variant)]
    pub variant: Option<ListVariant>,

    /// Seed for generated values
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

fn parse_variant(value: &str) -> Result<ListVariant, String> {
    value
        .parse()
        .map_err(|err| format!("{err}: expected one of single, dual, circular"))
}
