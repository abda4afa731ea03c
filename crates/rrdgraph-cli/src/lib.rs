//! rrdgraph CLI library
//!
//! This module contains the core CLI logic for rendering rrdtool graph
//! documents.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use rrdgraph::{RrdGraphError, document::GraphDocument};

/// Run the rrdgraph CLI application
///
/// This function loads the graph document, builds the `rrdtool graph`
/// command and either prints it (dry run) or runs it and writes the image
/// to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `RrdGraphError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Document parsing and validation errors
/// - rrdtool failures
pub fn run(args: &Args) -> Result<(), RrdGraphError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing graph document"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let graph = GraphDocument::parse(&source)?.into_graph(app_config.graph())?;

    if args.dry_run {
        println!("{}", shell_join(&graph.command()));
        return Ok(());
    }

    let image = graph.generate(&app_config.rrdtool().runner())?;

    fs::write(&args.output, &image)?;

    info!(output_file = args.output, bytes = image.len(); "Graph exported successfully");

    Ok(())
}

/// Joins arguments into a single line that a POSIX shell splits back into
/// the same arguments.
pub fn shell_join(args: &[String]) -> String {
    args.iter()
        .map(|arg| shell_quote(arg))
        .collect::<Vec<_>>()
        .join(" ")
}

fn shell_quote(arg: &str) -> String {
    let is_plain = |c: char| c.is_ascii_alphanumeric() || "-_./:=,%+@".contains(c);
    if !arg.is_empty() && arg.chars().all(is_plain) {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
