//! Command-line argument definitions for the rrdgraph CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, logging verbosity and dry runs.

use clap::Parser;

/// Command-line arguments for the rrdgraph tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input graph document
    #[arg(help = "Path to the graph document (TOML)")]
    pub input: String,

    /// Path to the output image file
    #[arg(short, long, default_value = "out.png")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print the rrdtool command instead of running it
    #[arg(long)]
    pub dry_run: bool,
}
